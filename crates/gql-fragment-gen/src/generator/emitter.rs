//! Writes generated documents below the output root.
//!
//! The output tree is treated as desired state: fragments are always rewritten,
//! and operation files are written when planned or removed when not, so repeated
//! runs converge on exactly the current schema and allow-list.

use std::{io::ErrorKind, path::PathBuf};

use strum::{Display, EnumIter, IntoEnumIterator};

use crate::generator::{
  errors::{GenerateError, Result},
  naming::{
    constants::{
      FRAGMENTS_FOLDER, FRAGMENT_FILE_SUFFIX, GRAPHQL_EXTENSION, MUTATIONS_FOLDER, MUTATION_FILE_SUFFIX,
      QUERIES_FOLDER, QUERY_FILE_SUFFIX,
    },
    mutation_operation_name,
  },
  orchestrator::GeneratedEntity,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ArtifactKind {
  #[strum(to_string = "fragments")]
  Fragment,
  #[strum(to_string = "mutations")]
  Mutation,
  #[strum(to_string = "queries")]
  Query,
}

impl ArtifactKind {
  pub const fn folder_name(self) -> &'static str {
    match self {
      Self::Fragment => FRAGMENTS_FOLDER,
      Self::Mutation => MUTATIONS_FOLDER,
      Self::Query => QUERIES_FOLDER,
    }
  }

  pub fn file_name(self, entity_name: &str) -> String {
    match self {
      Self::Fragment => format!("{entity_name}{FRAGMENT_FILE_SUFFIX}.{GRAPHQL_EXTENSION}"),
      Self::Mutation => format!(
        "{}{MUTATION_FILE_SUFFIX}.{GRAPHQL_EXTENSION}",
        mutation_operation_name(entity_name)
      ),
      Self::Query => format!("{entity_name}{QUERY_FILE_SUFFIX}.{GRAPHQL_EXTENSION}"),
    }
  }
}

/// Folder layout under the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
  root: PathBuf,
}

impl OutputLayout {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  pub fn folder(&self, kind: ArtifactKind) -> PathBuf {
    self.root.join(kind.folder_name())
  }

  pub fn artifact_path(&self, kind: ArtifactKind, entity_name: &str) -> PathBuf {
    self.folder(kind).join(kind.file_name(entity_name))
  }
}

pub struct Emitter {
  layout: OutputLayout,
}

impl Emitter {
  pub fn new(layout: OutputLayout) -> Self {
    Self { layout }
  }

  pub fn layout(&self) -> &OutputLayout {
    &self.layout
  }

  /// Creates the three artifact folders. Existing folders are left alone.
  pub async fn prepare(&self) -> Result<()> {
    for kind in ArtifactKind::iter() {
      let path = self.layout.folder(kind);
      tokio::fs::create_dir_all(&path)
        .await
        .map_err(|source| GenerateError::CreateDir { path, source })?;
    }
    Ok(())
  }

  pub async fn emit(&self, entity: &GeneratedEntity) -> Result<()> {
    let name = &entity.entity_name;
    self.sync(ArtifactKind::Fragment, name, Some(entity.fragment.as_str())).await?;
    self.sync(ArtifactKind::Mutation, name, entity.mutation.as_deref()).await?;
    self.sync(ArtifactKind::Query, name, entity.query.as_deref()).await
  }

  async fn sync(&self, kind: ArtifactKind, entity_name: &str, contents: Option<&str>) -> Result<()> {
    let path = self.layout.artifact_path(kind, entity_name);
    match contents {
      Some(contents) => write_file(path, contents).await,
      None => remove_file(path).await,
    }
  }
}

async fn write_file(path: PathBuf, contents: &str) -> Result<()> {
  let mut contents = contents.trim_end().to_string();
  contents.push('\n');
  tokio::fs::write(&path, contents)
    .await
    .map_err(|source| GenerateError::Write { path, source })
}

async fn remove_file(path: PathBuf) -> Result<()> {
  let removed = tokio::fs::remove_file(&path).await;
  match removed {
    Err(source) if source.kind() != ErrorKind::NotFound => Err(GenerateError::Remove { path, source }),
    _ => Ok(()),
  }
}
