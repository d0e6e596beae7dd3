use strum::Display;

use crate::generator::emitter::ArtifactKind;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub fragments_generated: usize,
  pub mutations_generated: usize,
  pub queries_generated: usize,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_fragment(&mut self) {
    self.fragments_generated += 1;
  }

  pub fn record_mutation(&mut self) {
    self.mutations_generated += 1;
  }

  pub fn record_query(&mut self) {
    self.queries_generated += 1;
  }

  pub fn count(&self, kind: ArtifactKind) -> usize {
    match kind {
      ArtifactKind::Fragment => self.fragments_generated,
      ArtifactKind::Mutation => self.mutations_generated,
      ArtifactKind::Query => self.queries_generated,
    }
  }

  pub fn record_warning(&mut self, warning: GenerationWarning) {
    self.warnings.push(warning);
  }

  pub fn record_warnings(&mut self, warnings: impl IntoIterator<Item = GenerationWarning>) {
    self.warnings.extend(warnings);
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Entity '{entity_name}' is declared more than once; the last block wins")]
  DuplicateEntity { entity_name: String },
  #[strum(to_string = "Operation '{operation_name}' does not match any extracted fragment")]
  UnknownOperation { operation_name: String },
}

impl GenerationWarning {
  pub fn is_overwrite(&self) -> bool {
    matches!(self, Self::DuplicateEntity { .. })
  }
}
