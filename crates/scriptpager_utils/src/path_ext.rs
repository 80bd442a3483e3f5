use std::path::Path;

use sugar_path::SugarPath;

pub trait PathExt {
  /// Lexically normalized path using `/` as separator, whatever the platform.
  fn to_normalized_slash(&self) -> String;
}

impl PathExt for Path {
  fn to_normalized_slash(&self) -> String {
    let path = self.to_string_lossy().replace('\\', "/");
    Path::new(&path).normalize().to_slash_lossy().into_owned()
  }
}

#[test]
fn test_to_normalized_slash() {
  assert_eq!(Path::new("utils").to_normalized_slash(), "utils");
  assert_eq!(Path::new("./src/./lib/a").to_normalized_slash(), "src/lib/a");
  assert_eq!(Path::new("src/../lib/a").to_normalized_slash(), "lib/a");
  assert_eq!(Path::new("../lib/a").to_normalized_slash(), "../lib/a");
  assert_eq!(Path::new("src\\lib\\a").to_normalized_slash(), "src/lib/a");
}
