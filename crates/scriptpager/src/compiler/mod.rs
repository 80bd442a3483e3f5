mod command_compiler;

use std::path::Path;

pub use command_compiler::CommandCompiler;

/// Translates a compiled-kind unit (CoffeeScript) into JavaScript.
///
/// Called once per unit, synchronously. An error aborts the whole build.
pub trait Compiler {
  fn compile(&self, source: &str, path: &Path) -> anyhow::Result<String>;
}

impl<F> Compiler for F
where
  F: Fn(&str, &Path) -> anyhow::Result<String>,
{
  fn compile(&self, source: &str, path: &Path) -> anyhow::Result<String> {
    self(source, path)
  }
}
