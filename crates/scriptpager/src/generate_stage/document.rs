use std::path::Path;

use scriptpager_error::{BuildDiagnostic, BuildResult};
use scriptpager_fs::FileSystem;

use crate::utils::load_source::load_source;

/// Insertion point of the bundle inside a document template.
pub const BUNDLE_MARKER: &str = "<!--scriptpager-->";

pub const DEFAULT_TEMPLATE: &str = concat!(
  "<!doctype html><head><meta charset=\"utf-8\"><title>Script</title>",
  "<meta name=\"apple-mobile-web-app-status-bar-style\" content=\"black\">",
  "<meta name=\"apple-mobile-web-app-capable\" content=\"yes\">",
  "<body><noscript>JavaScript is required.</noscript>",
  "<!--scriptpager-->"
);

#[derive(Debug)]
pub struct DocumentTemplate {
  content: String,
}

impl DocumentTemplate {
  /// Checks that `content` holds exactly one insertion point.
  pub fn new(content: String) -> BuildResult<Self> {
    let occurrences = content.matches(BUNDLE_MARKER).count();
    if occurrences != 1 {
      Err(BuildDiagnostic::InvalidTemplate { occurrences })?;
    }
    Ok(Self { content })
  }

  pub fn load(path: Option<&Path>, fs: &dyn FileSystem) -> BuildResult<Self> {
    match path {
      Some(path) => Self::new(load_source(fs, path)?.to_string()),
      None => Self::new(DEFAULT_TEMPLATE.to_string()),
    }
  }

  pub fn splice(&self, bundle: &str) -> String {
    self.content.replacen(BUNDLE_MARKER, bundle, 1)
  }
}

#[cfg(test)]
mod tests {
  use super::{DocumentTemplate, BUNDLE_MARKER, DEFAULT_TEMPLATE};
  use scriptpager_error::BuildDiagnostic;

  #[test]
  fn default_template_appends_the_bundle() {
    let template = DocumentTemplate::new(DEFAULT_TEMPLATE.to_string()).unwrap();
    let document = template.splice("<script></script>");
    assert!(document.starts_with("<!doctype html><head><meta charset=\"utf-8\"><title>Script</title>"));
    assert!(document.ends_with("<noscript>JavaScript is required.</noscript><script></script>"));
    assert!(!document.contains(BUNDLE_MARKER));
  }

  #[test]
  fn custom_template_needs_exactly_one_marker() {
    for (content, expected) in [("<html></html>", 0), ("<!--scriptpager--><!--scriptpager-->", 2)] {
      let err = DocumentTemplate::new(content.to_string()).unwrap_err();
      assert!(
        matches!(err.first(), Some(BuildDiagnostic::InvalidTemplate { occurrences }) if *occurrences == expected)
      );
    }

    let template = DocumentTemplate::new("<body><!--scriptpager--></body>".to_string()).unwrap();
    assert_eq!(template.splice("<script>x</script>"), "<body><script>x</script></body>");
  }

  #[test]
  fn bundle_text_is_inserted_verbatim() {
    let template = DocumentTemplate::new("<!--scriptpager-->".to_string()).unwrap();
    assert_eq!(template.splice("$0 $1 <!--scriptpager-->"), "$0 $1 <!--scriptpager-->");
  }
}
