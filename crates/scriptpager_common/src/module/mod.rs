pub mod module_table;

use std::path::PathBuf;

use arcstr::ArcStr;

use crate::{ModuleId, ModuleType};

/// One input unit after the content transform. Immutable once created.
#[derive(Debug, Clone)]
pub struct NormalModule {
  pub id: ModuleId,
  /// The reference as the user wrote it.
  pub reference: ArcStr,
  pub path: PathBuf,
  pub module_type: ModuleType,
  /// Raw source text as read from storage.
  pub source: ArcStr,
  /// JavaScript ready to be wrapped in a factory.
  pub code: ArcStr,
}
