/// Suffix every schema type name carries; stripping it yields the entity name.
pub const TYPE_SUFFIX: &str = "Gql";
pub const INPUT_TYPE_PREFIX: &str = "Input";
pub const MUTATION_PREFIX: &str = "Save";
pub const MUTATION_RESULT_SUFFIX: &str = "Result";
/// Non-null marker stripped from fragment bodies.
pub const REQUIRED_MARKER: char = '!';

pub const FRAGMENTS_FOLDER: &str = "fragments";
pub const MUTATIONS_FOLDER: &str = "mutations";
pub const QUERIES_FOLDER: &str = "queries";

pub const FRAGMENT_FILE_SUFFIX: &str = "Fragment";
pub const MUTATION_FILE_SUFFIX: &str = "Mutation";
pub const QUERY_FILE_SUFFIX: &str = "Query";
pub const GRAPHQL_EXTENSION: &str = "graphql";
