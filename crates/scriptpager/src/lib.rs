mod bundler;
mod compiler;
mod generate_stage;
mod runtime;
mod scan_stage;
mod types;
mod utils;

pub use crate::{
  bundler::Bundler,
  compiler::{CommandCompiler, Compiler},
  generate_stage::{BUNDLE_MARKER, DEFAULT_TEMPLATE},
  runtime::{LookupError, ModuleRegistry, ModuleState, RUNTIME_CODE},
  types::bundle_output::BundleOutput,
};
pub use scriptpager_common::*;
pub use scriptpager_error::{BuildDiagnostic, BuildError, BuildResult};
pub use scriptpager_fs::{FileSystem, OsFileSystem};
