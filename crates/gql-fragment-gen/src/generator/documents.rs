use crate::generator::naming::{
  camel_case_entity_name,
  constants::{INPUT_TYPE_PREFIX, MUTATION_RESULT_SUFFIX, TYPE_SUFFIX},
  mutation_operation_name, query_operation_name,
};

/// Builds the save mutation for `entity_name`.
///
/// ```graphql
/// mutation SaveFoo($foo: InputFooGql!) {
///   saveFooResult(foo: $foo) {
///     ...Foo
///   }
/// }
/// ```
pub fn mutation_document(entity_name: &str) -> String {
  let operation = mutation_operation_name(entity_name);
  let variable = camel_case_entity_name(entity_name);
  let field = camel_case_entity_name(&operation);

  format!(
    "mutation {operation}(${variable}: {INPUT_TYPE_PREFIX}{entity_name}{TYPE_SUFFIX}!) {{\n  \
     {field}{MUTATION_RESULT_SUFFIX}({variable}: ${variable}) {{\n    \
     ...{entity_name}\n  \
     }}\n\
     }}"
  )
}

/// Builds the by-id query for `entity_name`.
///
/// ```graphql
/// query Foo($id: Int!) {
///   foo(id: $id) {
///     ...Foo
///   }
/// }
/// ```
pub fn query_document(entity_name: &str) -> String {
  let field = query_operation_name(entity_name);

  format!(
    "query {entity_name}($id: Int!) {{\n  \
     {field}(id: $id) {{\n    \
     ...{entity_name}\n  \
     }}\n\
     }}"
  )
}
