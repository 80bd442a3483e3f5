mod ecma_compiler;
mod multiline_literals;

pub use crate::ecma_compiler::EcmaCompiler;
