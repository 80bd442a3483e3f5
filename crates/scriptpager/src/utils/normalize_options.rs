use std::path::PathBuf;

use scriptpager_common::{BundlerOptions, NormalizedBundlerOptions};

pub fn normalize_options(raw_options: BundlerOptions) -> NormalizedBundlerOptions {
  let cwd = raw_options
    .cwd
    .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

  // The bundled libraries ship next to the executable.
  let stdlib_dir = raw_options.stdlib_dir.unwrap_or_else(|| {
    std::env::current_exe()
      .ok()
      .and_then(|exe| exe.parent().map(PathBuf::from))
      .unwrap_or_else(|| cwd.clone())
  });

  NormalizedBundlerOptions {
    input: raw_options.input.unwrap_or_default(),
    stdlib_dir,
    cwd,
    coffee: raw_options.coffee.unwrap_or_else(|| "coffee".to_string()),
    check_syntax: raw_options.check_syntax.unwrap_or(false),
    template: raw_options.template,
  }
}

#[test]
fn test_normalize_options_defaults() {
  let options = normalize_options(BundlerOptions {
    cwd: Some(PathBuf::from("/project")),
    ..Default::default()
  });
  assert!(options.input.is_empty());
  assert_eq!(options.cwd, PathBuf::from("/project"));
  assert_eq!(options.coffee, "coffee");
  assert!(!options.check_syntax);
  assert!(options.template.is_none());
}
