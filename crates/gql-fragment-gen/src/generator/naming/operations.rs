use std::collections::BTreeSet;

use crate::generator::naming::constants::MUTATION_PREFIX;

/// Lower-cases the first character of an entity name and leaves the rest untouched.
///
/// ```text
/// "UserProfile" => "userProfile"
/// "URL"         => "uRL"
/// ```
pub fn camel_case_entity_name(entity_name: &str) -> String {
  let mut chars = entity_name.chars();
  match chars.next() {
    Some(first) => first.to_lowercase().chain(chars).collect(),
    None => String::new(),
  }
}

pub fn mutation_operation_name(entity_name: &str) -> String {
  format!("{MUTATION_PREFIX}{entity_name}")
}

pub fn query_operation_name(entity_name: &str) -> String {
  camel_case_entity_name(entity_name)
}

/// Operation names the caller wants files for.
///
/// Entries are trimmed and upper-cased when parsed, so membership checks are
/// case-insensitive. Empty entries are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationAllowList {
  names: BTreeSet<String>,
}

impl OperationAllowList {
  /// Builds the list from raw entries. Each entry may itself be a comma-separated list.
  pub fn parse<I, S>(entries: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let names = entries
      .into_iter()
      .flat_map(|entry| {
        entry
          .as_ref()
          .split(',')
          .map(|name| name.trim().to_uppercase())
          .filter(|name| !name.is_empty())
          .collect::<Vec<_>>()
      })
      .collect();

    Self { names }
  }

  pub fn contains(&self, operation_name: &str) -> bool {
    self.names.contains(&operation_name.trim().to_uppercase())
  }

  pub fn is_empty(&self) -> bool {
    self.names.is_empty()
  }

  pub fn len(&self) -> usize {
    self.names.len()
  }

  /// Normalized names in sorted order.
  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.names.iter().map(String::as_str)
  }
}
