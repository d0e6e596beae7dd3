//! Rewrites a schema type block into a fragment definition.
//!
//! ```text
//! type OrderGql {            fragment Order on OrderGql {
//!   id: Int!                   id
//!   customer: CustomerGql  =>  customer {
//!   lines: [LineGql!]!           ...Customer
//! }                            }
//!                              lines {
//!                                ...Line
//!                              }
//!                            }
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::generator::naming::constants::{REQUIRED_MARKER, TYPE_SUFFIX};

static HEADER_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(&format!(r"^type ((\w+){TYPE_SUFFIX})")).expect("bad regex"));

static SUB_FRAGMENT_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(&format!(r": \[?(\w+?){TYPE_SUFFIX}\]?")).expect("bad regex"));

// `[^\r\n]` instead of `.` so CRLF line endings survive the collapse.
static SCALAR_FIELD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^(\s+\w+):[^\r\n]*").expect("bad regex"));

const SUB_FRAGMENT_REPLACEMENT: &str = " {\n    ...${1}\n  }";
const SUB_FRAGMENT_REPLACEMENT_CRLF: &str = " {\r\n    ...${1}\r\n  }";

/// Renders `raw_block` as a fragment. Pure; the input is not validated.
///
/// Nested spreads use `\r\n` when the block itself does.
pub fn render_fragment(raw_block: &str) -> String {
  let replacement = if raw_block.contains("\r\n") {
    SUB_FRAGMENT_REPLACEMENT_CRLF
  } else {
    SUB_FRAGMENT_REPLACEMENT
  };

  let fragment = HEADER_RE.replace(raw_block, "fragment ${2} on ${1}");
  let fragment = fragment.replace(REQUIRED_MARKER, "");
  let fragment = SUB_FRAGMENT_RE.replace_all(&fragment, replacement);
  SCALAR_FIELD_RE.replace_all(&fragment, "${1}").into_owned()
}
