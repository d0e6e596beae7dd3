use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::generator::errors::{GenerateError, Result};

/// Matches `type NameGql { ... }` blocks whose closing brace ends a line.
pub const DEFAULT_FRAGMENT_PATTERN: &str = r"^type \w+Gql \{.+?\}$";
/// Captures the entity name (type name without the `Gql` suffix) as `$1`.
pub const DEFAULT_FRAGMENT_NAME_PATTERN: &str = r"^type (?:(\w+)Gql).*$";

pub const FRAGMENT_PATTERN_OPTION: &str = "--fragment-regex";
pub const FRAGMENT_NAME_PATTERN_OPTION: &str = "--fragment-name-regex";

// Entity names become file names, so only a single identifier token is accepted.
static ENTITY_NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\w+$").expect("bad regex"));

/// A schema block selected for fragment generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentCandidate {
  pub entity_name: String,
  pub raw_block: String,
}

/// The two patterns driving extraction.
///
/// The block pattern is compiled multi-line with `.` matching newlines, so `^`/`$`
/// anchor at line boundaries (`\r\n` included) while a match may span many lines.
/// The name pattern only gets `.` matching newlines; it is applied to a single block
/// as a `$1` substitution.
#[derive(Debug, Clone)]
pub struct FragmentPatterns {
  block: Regex,
  name: Regex,
}

impl FragmentPatterns {
  pub fn new(block_pattern: &str, name_pattern: &str) -> Result<Self> {
    let block = RegexBuilder::new(block_pattern)
      .multi_line(true)
      .dot_matches_new_line(true)
      .crlf(true)
      .build()
      .map_err(|source| GenerateError::InvalidPattern {
        option: FRAGMENT_PATTERN_OPTION,
        source,
      })?;

    let name = RegexBuilder::new(name_pattern)
      .dot_matches_new_line(true)
      .build()
      .map_err(|source| GenerateError::InvalidPattern {
        option: FRAGMENT_NAME_PATTERN_OPTION,
        source,
      })?;

    Ok(Self { block, name })
  }

  /// Returns every non-overlapping block match in schema order.
  ///
  /// Duplicate entity names are kept; callers decide what to do with them.
  ///
  /// # Errors
  ///
  /// Fails with [`GenerateError::UnmatchedFragmentName`] when the name pattern does
  /// not match a block, or when the substitution leaves anything other than a
  /// single identifier (an empty name, or leftover block text).
  pub fn extract(&self, schema: &str) -> Result<Vec<FragmentCandidate>> {
    self
      .block
      .find_iter(schema)
      .map(|found| {
        let raw_block = found.as_str();
        Ok(FragmentCandidate {
          entity_name: self.entity_name(raw_block)?,
          raw_block: raw_block.to_string(),
        })
      })
      .collect()
  }

  fn entity_name(&self, raw_block: &str) -> Result<String> {
    if !self.name.is_match(raw_block) {
      return Err(unmatched_name(raw_block));
    }

    let name = self.name.replace_all(raw_block, "${1}");
    let name = name.trim();
    if !ENTITY_NAME_RE.is_match(name) {
      return Err(unmatched_name(raw_block));
    }

    Ok(name.to_string())
  }
}

impl Default for FragmentPatterns {
  fn default() -> Self {
    Self::new(DEFAULT_FRAGMENT_PATTERN, DEFAULT_FRAGMENT_NAME_PATTERN).expect("default fragment patterns compile")
  }
}

fn unmatched_name(raw_block: &str) -> GenerateError {
  GenerateError::UnmatchedFragmentName {
    excerpt: raw_block.lines().next().unwrap_or_default().trim().to_string(),
  }
}
