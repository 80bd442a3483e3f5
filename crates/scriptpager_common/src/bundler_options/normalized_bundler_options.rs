use std::path::PathBuf;

use crate::InputItem;

#[derive(Debug)]
pub struct NormalizedBundlerOptions {
  // --- Input
  pub input: Vec<InputItem>,
  pub cwd: PathBuf,
  pub stdlib_dir: PathBuf,

  // --- Transform
  pub coffee: String,
  pub check_syntax: bool,

  // --- Output
  pub template: Option<PathBuf>,
}
