pub mod constants;
pub mod operations;

pub use operations::{OperationAllowList, camel_case_entity_name, mutation_operation_name, query_operation_name};

#[cfg(test)]
mod tests;
