pub mod generate;
pub mod list;

pub use generate::{GenerateConfig, generate_fragments};
pub use list::list_fragments;

use crate::{generator::extractor::FragmentPatterns, ui::SchemaArgs};

fn fragment_patterns(args: &SchemaArgs) -> anyhow::Result<FragmentPatterns> {
  Ok(FragmentPatterns::new(&args.fragment_regex, &args.fragment_name_regex)?)
}
