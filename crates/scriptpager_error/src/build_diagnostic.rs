use std::path::PathBuf;

use arcstr::ArcStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildDiagnostic {
  #[error("You must supply at least one file reference")]
  NoInput,

  /// The reference maps to no known language kind. Raised before any output is produced.
  #[error("Unknown file extension: {extension} (in `{reference}`)")]
  UnknownExtension { reference: ArcStr, extension: ArcStr },

  /// The external compiler rejected the unit's source.
  #[error("Failed to compile `{id}`: {source:#}")]
  CompilationFailure {
    id: ArcStr,
    #[source]
    source: anyhow::Error,
  },

  #[error("Module identifier `{id}` is produced by both `{first}` and `{second}`")]
  DuplicateIdentifier { id: ArcStr, first: ArcStr, second: ArcStr },

  #[error("Syntax error in `{id}`: {message}")]
  SyntaxError { id: ArcStr, message: String },

  #[error("The document template must contain exactly one insertion marker, found {occurrences}")]
  InvalidTemplate { occurrences: usize },

  #[error("Failed to read `{}`: {source}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

impl BuildDiagnostic {
  pub fn unknown_extension(reference: impl Into<ArcStr>, extension: impl Into<ArcStr>) -> Self {
    Self::UnknownExtension { reference: reference.into(), extension: extension.into() }
  }

  pub fn compilation_failure(id: impl Into<ArcStr>, source: anyhow::Error) -> Self {
    Self::CompilationFailure { id: id.into(), source }
  }

  pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
    Self::Io { path: path.into(), source }
  }

  /// Short machine-friendly name of the diagnostic kind.
  pub fn kind(&self) -> &'static str {
    match self {
      Self::NoInput => "NO_INPUT",
      Self::UnknownExtension { .. } => "UNKNOWN_EXTENSION",
      Self::CompilationFailure { .. } => "COMPILATION_FAILURE",
      Self::DuplicateIdentifier { .. } => "DUPLICATE_IDENTIFIER",
      Self::SyntaxError { .. } => "SYNTAX_ERROR",
      Self::InvalidTemplate { .. } => "INVALID_TEMPLATE",
      Self::Io { .. } => "IO",
    }
  }
}

#[test]
fn test_compilation_failure_keeps_compiler_message() {
  let diagnostic =
    BuildDiagnostic::compilation_failure("./main", anyhow::anyhow!("unexpected indentation"));
  assert_eq!(diagnostic.kind(), "COMPILATION_FAILURE");
  assert_eq!(diagnostic.to_string(), "Failed to compile `./main`: unexpected indentation");
}
