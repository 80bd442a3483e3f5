use std::path::{Path, PathBuf};

/// A bundled standard library, selected with a reserved token instead of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StdAlias {
  pub token: &'static str,
  /// Fixed module identifier the library is registered under.
  pub name: &'static str,
  pub file_name: &'static str,
}

pub static STD_ALIASES: &[StdAlias] = &[
  StdAlias { token: "--jq", name: "jQuery", file_name: "jquery-1.5.0.js" },
  StdAlias { token: "--cs", name: "CoffeeScript", file_name: "coffeescript-1.0.0.js" },
];

impl StdAlias {
  pub fn find(token: &str) -> Option<&'static StdAlias> {
    STD_ALIASES.iter().find(|alias| alias.token == token)
  }

  pub fn path_in(&self, stdlib_dir: &Path) -> PathBuf {
    stdlib_dir.join(self.file_name)
  }
}

#[test]
fn test_find() {
  assert_eq!(StdAlias::find("--jq").map(|alias| alias.name), Some("jQuery"));
  assert_eq!(StdAlias::find("--cs").map(|alias| alias.name), Some("CoffeeScript"));
  assert!(StdAlias::find("jq").is_none());
  assert!(StdAlias::find("--jq.js").is_none());
}
