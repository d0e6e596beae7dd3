use std::path::{Path, PathBuf};

use crate::generator::errors::{GenerateError, Result};

/// Schema text loaded fully into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaSource {
  path: PathBuf,
  text: String,
}

impl SchemaSource {
  pub async fn open(path: &Path) -> Result<Self> {
    let text = tokio::fs::read_to_string(path)
      .await
      .map_err(|source| GenerateError::SchemaRead {
        path: path.to_path_buf(),
        source,
      })?;

    Ok(Self {
      path: path.to_path_buf(),
      text,
    })
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn text(&self) -> &str {
    &self.text
  }
}
