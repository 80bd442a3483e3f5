mod build_diagnostic;

use std::ops::{Deref, DerefMut};

pub use crate::build_diagnostic::BuildDiagnostic;

/// All diagnostics collected by one failed build. A build stops at the first fatal
/// diagnostic, so in practice this holds a single entry.
#[derive(Debug)]
pub struct BuildError(pub Vec<BuildDiagnostic>);

impl BuildError {
  pub fn first(&self) -> Option<&BuildDiagnostic> {
    self.0.first()
  }
}

impl Deref for BuildError {
  type Target = Vec<BuildDiagnostic>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl std::fmt::Display for BuildError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for (idx, diagnostic) in self.0.iter().enumerate() {
      if idx > 0 {
        writeln!(f)?;
      }
      write!(f, "{diagnostic}")?;
    }
    Ok(())
  }
}

impl std::error::Error for BuildError {}

impl From<BuildDiagnostic> for BuildError {
  fn from(diagnostic: BuildDiagnostic) -> Self {
    Self(vec![diagnostic])
  }
}

impl From<Vec<BuildDiagnostic>> for BuildError {
  fn from(diagnostics: Vec<BuildDiagnostic>) -> Self {
    Self(diagnostics)
  }
}

pub type BuildResult<T> = Result<T, BuildError>;

#[test]
fn test_display_joins_diagnostics() {
  let err = BuildError(vec![
    BuildDiagnostic::UnknownExtension { reference: "a.txt".into(), extension: "txt".into() },
    BuildDiagnostic::InvalidTemplate { occurrences: 0 },
  ]);
  let rendered = err.to_string();
  assert_eq!(rendered.lines().count(), 2);
  assert!(rendered.starts_with("Unknown file extension: txt"));
}
