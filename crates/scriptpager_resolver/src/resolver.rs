use std::{
  ffi::OsStr,
  path::{Path, PathBuf},
};

use arcstr::ArcStr;
use scriptpager_common::{ModuleId, ModuleType, ResolvedInput, StdAlias};
use scriptpager_utils::{concat_string, path_ext::PathExt};
use sugar_path::SugarPath;

#[derive(Debug, Clone)]
pub struct Resolver {
  cwd: PathBuf,
  stdlib_dir: PathBuf,
}

impl Resolver {
  pub fn new(cwd: PathBuf, stdlib_dir: PathBuf) -> Self {
    Self { cwd, stdlib_dir }
  }

  /// Resolves `reference` to its module identifier, language kind and backing file.
  ///
  /// Resolution never fails: a reference with an unrecognized extension resolves to
  /// `ModuleType::Unknown` and is rejected when its content is transformed.
  pub fn resolve(&self, reference: &str) -> ResolvedInput {
    if let Some(alias) = StdAlias::find(reference) {
      tracing::trace!("`{reference}` selects the bundled `{}`", alias.name);
      return ResolvedInput {
        id: ModuleId::new(alias.name),
        reference: reference.into(),
        path: alias.path_in(&self.stdlib_dir),
        module_type: ModuleType::Js,
      };
    }

    let path = Path::new(reference);
    let module_type = ModuleType::from_extension(path.extension().and_then(OsStr::to_str));

    ResolvedInput {
      id: self.module_id_for(path),
      reference: reference.into(),
      path: self.cwd.join(path),
      module_type,
    }
  }

  fn module_id_for(&self, path: &Path) -> ModuleId {
    let without_extension = path.with_extension("");
    let relative = if without_extension.is_absolute() {
      without_extension.relative(&self.cwd)
    } else {
      without_extension
    };

    let normalized = relative.to_normalized_slash();
    let id = ModuleId::new(normalized);
    if id.is_parent_relative() { id } else { ModuleId::new(ArcStr::from(concat_string!("./", id))) }
  }
}
