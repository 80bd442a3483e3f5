use arcstr::ArcStr;
use scriptpager_common::{ModuleType, ResolvedInput};
use scriptpager_error::{BuildDiagnostic, BuildResult};
use scriptpager_fs::FileSystem;

use crate::{compiler::Compiler, utils::load_source::load_source};

pub struct TransformOutput {
  /// Raw text as read from storage.
  pub source: ArcStr,
  /// JavaScript to embed in the unit's factory.
  pub code: ArcStr,
}

/// Turns a resolved reference into the JavaScript body of its factory.
///
/// An unrecognized extension fails before anything is read.
pub fn transform_source(
  resolved: &ResolvedInput,
  fs: &dyn FileSystem,
  compiler: &dyn Compiler,
) -> BuildResult<TransformOutput> {
  match &resolved.module_type {
    ModuleType::Js => {
      let source = load_source(fs, &resolved.path)?;
      Ok(TransformOutput { code: source.clone(), source })
    }
    ModuleType::CoffeeScript => {
      let source = load_source(fs, &resolved.path)?;
      let code = compiler.compile(&source, &resolved.path).map_err(|err| {
        BuildDiagnostic::compilation_failure(resolved.id.as_arcstr().clone(), err)
      })?;
      Ok(TransformOutput { source, code: code.into() })
    }
    ModuleType::Unknown(extension) => {
      Err(BuildDiagnostic::unknown_extension(resolved.reference.clone(), extension.clone()).into())
    }
  }
}
