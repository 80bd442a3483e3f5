pub mod input_item;
pub mod module_type;
pub mod normalized_bundler_options;
pub mod std_alias;

use std::path::PathBuf;

use crate::InputItem;

#[derive(Default, Debug, Clone)]
pub struct BundlerOptions {
  // --- Input
  pub input: Option<Vec<InputItem>>,
  pub cwd: Option<PathBuf>,
  /// Directory holding the bundled standard-library files selected by reserved aliases.
  pub stdlib_dir: Option<PathBuf>,

  // --- Transform
  /// Program used to compile CoffeeScript units.
  pub coffee: Option<String>,
  pub check_syntax: Option<bool>,

  // --- Output
  /// Document template containing exactly one insertion marker.
  pub template: Option<PathBuf>,
}
