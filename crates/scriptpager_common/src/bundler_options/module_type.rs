use arcstr::ArcStr;

/// Language kind of a unit, derived from its file extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleType {
  /// JavaScript, embedded as is.
  Js,
  /// CoffeeScript, handed to the compiler before embedding.
  CoffeeScript,
  /// Anything else. Carries the extension that was not recognized (empty if there was none).
  Unknown(ArcStr),
}

impl ModuleType {
  pub fn from_extension(ext: Option<&str>) -> Self {
    match ext {
      Some("js") => Self::Js,
      Some("coffee") => Self::CoffeeScript,
      Some(other) => Self::Unknown(other.into()),
      None => Self::Unknown(ArcStr::new()),
    }
  }
}

#[test]
fn test_from_extension() {
  assert_eq!(ModuleType::from_extension(Some("js")), ModuleType::Js);
  assert_eq!(ModuleType::from_extension(Some("coffee")), ModuleType::CoffeeScript);
  assert_eq!(ModuleType::from_extension(Some("ts")), ModuleType::Unknown("ts".into()));
  assert_eq!(ModuleType::from_extension(None), ModuleType::Unknown(ArcStr::new()));
}
