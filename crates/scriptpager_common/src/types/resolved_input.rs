use std::path::PathBuf;

use arcstr::ArcStr;

use crate::{ModuleId, ModuleType};

/// Output of the name resolver for one user-supplied reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInput {
  pub id: ModuleId,
  /// The reference as the user wrote it.
  pub reference: ArcStr,
  /// Where the source text is read from.
  pub path: PathBuf,
  pub module_type: ModuleType,
}
