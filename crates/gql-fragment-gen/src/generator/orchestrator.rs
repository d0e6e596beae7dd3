//! Orchestration for the schema to GraphQL documents pipeline.
//!
//! The orchestrator owns the extraction patterns and the operation allow-list and
//! turns schema text into an in-memory plan of documents. It never touches the
//! filesystem; the [`Emitter`](crate::generator::emitter::Emitter) applies the plan.
//!
//! ## Usage
//!
//! ```no_run
//! # async fn example() -> anyhow::Result<()> {
//! let schema = tokio::fs::read_to_string("schema.graphql").await?;
//! let orchestrator = Orchestrator::new(FragmentPatterns::default(), OperationAllowList::parse(["SaveFoo"]));
//! let output = orchestrator.generate(&schema)?;
//!
//! println!("Planned {} fragments", output.stats.fragments_generated);
//! # Ok(())
//! # }
//! ```

use std::collections::HashSet;

use crate::generator::{
  documents::{mutation_document, query_document},
  errors::Result,
  extractor::{FragmentCandidate, FragmentPatterns},
  fragment::render_fragment,
  metrics::{GenerationStats, GenerationWarning},
  naming::{OperationAllowList, mutation_operation_name, query_operation_name},
};

/// Documents planned for one extracted entity.
///
/// `mutation` and `query` are `None` when the operation is not allow-listed; the
/// emitter removes the corresponding file in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedEntity {
  pub entity_name: String,
  pub fragment: String,
  pub mutation: Option<String>,
  pub query: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedOutput {
  pub entities: Vec<GeneratedEntity>,
  pub stats: GenerationStats,
}

pub struct Orchestrator {
  patterns: FragmentPatterns,
  allow_list: OperationAllowList,
}

impl Orchestrator {
  pub fn new(patterns: FragmentPatterns, allow_list: OperationAllowList) -> Self {
    Self { patterns, allow_list }
  }

  pub fn allow_list(&self) -> &OperationAllowList {
    &self.allow_list
  }

  pub fn extract(&self, schema: &str) -> Result<Vec<FragmentCandidate>> {
    self.patterns.extract(schema)
  }

  /// Runs extraction, rendering and operation synthesis over `schema`.
  ///
  /// Entities keep schema order. Duplicate names are planned twice (the later one
  /// overwrites the earlier file) and reported as warnings, as are allow-list
  /// entries that name no extracted operation.
  pub fn generate(&self, schema: &str) -> Result<GeneratedOutput> {
    let candidates = self.extract(schema)?;

    let mut stats = GenerationStats::default();
    let mut seen = HashSet::new();
    let mut known_operations = HashSet::new();
    let mut entities = Vec::with_capacity(candidates.len());

    for candidate in candidates {
      if !seen.insert(candidate.entity_name.clone()) {
        stats.record_warning(GenerationWarning::DuplicateEntity {
          entity_name: candidate.entity_name.clone(),
        });
      }

      let mutation_name = mutation_operation_name(&candidate.entity_name);
      let query_name = query_operation_name(&candidate.entity_name);
      known_operations.insert(mutation_name.to_uppercase());
      known_operations.insert(query_name.to_uppercase());

      let entity = self.plan_entity(&candidate, &mutation_name, &query_name);

      stats.record_fragment();
      if entity.mutation.is_some() {
        stats.record_mutation();
      }
      if entity.query.is_some() {
        stats.record_query();
      }

      entities.push(entity);
    }

    stats.record_warnings(
      self
        .allow_list
        .names()
        .filter(|name| !known_operations.contains(*name))
        .map(|name| GenerationWarning::UnknownOperation {
          operation_name: name.to_string(),
        }),
    );

    Ok(GeneratedOutput { entities, stats })
  }

  fn plan_entity(&self, candidate: &FragmentCandidate, mutation_name: &str, query_name: &str) -> GeneratedEntity {
    let entity_name = &candidate.entity_name;

    GeneratedEntity {
      entity_name: entity_name.clone(),
      fragment: render_fragment(&candidate.raw_block),
      mutation: self
        .allow_list
        .contains(mutation_name)
        .then(|| mutation_document(entity_name)),
      query: self.allow_list.contains(query_name).then(|| query_document(entity_name)),
    }
  }
}
