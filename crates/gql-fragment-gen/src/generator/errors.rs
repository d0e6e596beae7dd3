use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenerateError>;

/// Fatal failures of a generation run. Nothing is retried; the run stops at the
/// first error and is expected to be re-run once the cause is fixed.
#[derive(Debug, Error)]
pub enum GenerateError {
  #[error("failed to read schema file '{}'", .path.display())]
  SchemaRead {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("invalid regular expression passed to {option}")]
  InvalidPattern {
    option: &'static str,
    #[source]
    source: regex::Error,
  },

  #[error("fragment name pattern produced no name for block '{excerpt}'")]
  UnmatchedFragmentName { excerpt: String },

  #[error("failed to create directory '{}'", .path.display())]
  CreateDir {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to write '{}'", .path.display())]
  Write {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to remove stale file '{}'", .path.display())]
  Remove {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}
