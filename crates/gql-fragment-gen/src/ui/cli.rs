use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, Colors, ThemeMode};
use crate::generator::extractor::{DEFAULT_FRAGMENT_NAME_PATTERN, DEFAULT_FRAGMENT_PATTERN};

#[derive(Parser, Debug)]
#[command(name = "gql-fragment-gen")]
#[command(author, version, about = "GraphQL fragment, query and mutation generator")]
#[command(args_conflicts_with_subcommands = true, styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Option<Commands>,

  #[command(flatten)]
  pub generate: GenerateArgs,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List the fragments found in the schema and their operation names
  List(ListArgs),
}

// Shared by every command that reads the schema.
#[derive(Args, Debug, Clone)]
pub struct SchemaArgs {
  /// Path to the GraphQL schema file
  #[arg(long, value_name = "FILE", default_value = "schema.graphql")]
  pub schema_file: PathBuf,

  /// Queries and mutations to generate (comma-separated, case-insensitive)
  #[arg(long, value_name = "NAMES", value_delimiter = ',')]
  pub operation_names: Vec<String>,

  /// Regular expression locating fragment blocks in the schema
  #[arg(long, value_name = "REGEX", default_value = DEFAULT_FRAGMENT_PATTERN)]
  pub fragment_regex: String,

  /// Regular expression extracting the fragment name (capture group 1) from a block
  #[arg(long, value_name = "REGEX", default_value = DEFAULT_FRAGMENT_NAME_PATTERN)]
  pub fragment_name_regex: String,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
  #[command(flatten)]
  pub schema: SchemaArgs,

  /// Root folder for the generated fragments/, mutations/ and queries/ folders
  #[arg(long, value_name = "DIR", default_value = "src/generated")]
  pub output_folder: PathBuf,

  /// Enable verbose output with per-fragment progress
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
  pub quiet: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
  #[command(flatten)]
  pub schema: SchemaArgs,
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn test_cli_is_well_formed() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_defaults() {
    let cli = Cli::try_parse_from(["gql-fragment-gen"]).unwrap();
    assert!(cli.command.is_none());

    let args = cli.generate;
    assert_eq!(args.schema.schema_file, PathBuf::from("schema.graphql"));
    assert_eq!(args.output_folder, PathBuf::from("src/generated"));
    assert!(args.schema.operation_names.is_empty());
    assert_eq!(args.schema.fragment_regex, DEFAULT_FRAGMENT_PATTERN);
    assert_eq!(args.schema.fragment_name_regex, DEFAULT_FRAGMENT_NAME_PATTERN);
    assert!(!args.verbose);
    assert!(!args.quiet);
  }

  #[test]
  fn test_operation_names_are_split_on_commas() {
    let cli = Cli::try_parse_from([
      "gql-fragment-gen",
      "--schema-file",
      "api.graphql",
      "--operation-names",
      "SaveFoo,foo, bar",
      "--verbose",
    ])
    .unwrap();

    assert_eq!(cli.generate.schema.schema_file, PathBuf::from("api.graphql"));
    assert_eq!(cli.generate.schema.operation_names, vec!["SaveFoo", "foo", " bar"]);
    assert!(cli.generate.verbose);
  }

  #[test]
  fn test_list_subcommand() {
    let cli = Cli::try_parse_from(["gql-fragment-gen", "list", "--schema-file", "api.graphql"]).unwrap();
    let Some(Commands::List(args)) = cli.command else {
      panic!("expected list command");
    };
    assert_eq!(args.schema.schema_file, PathBuf::from("api.graphql"));
  }

  #[test]
  fn test_verbose_and_quiet_conflict() {
    assert!(Cli::try_parse_from(["gql-fragment-gen", "-v", "-q"]).is_err());
  }
}
