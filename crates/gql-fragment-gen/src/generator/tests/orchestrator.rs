use crate::generator::{
  extractor::FragmentPatterns,
  metrics::GenerationWarning,
  naming::OperationAllowList,
  orchestrator::{GeneratedEntity, Orchestrator},
};

const SCHEMA: &str = include_str!("../../../fixtures/schema.graphql");

fn orchestrator(operation_names: &[&str]) -> Orchestrator {
  Orchestrator::new(FragmentPatterns::default(), OperationAllowList::parse(operation_names))
}

fn entity<'a>(entities: &'a [GeneratedEntity], name: &str) -> &'a GeneratedEntity {
  entities
    .iter()
    .find(|entity| entity.entity_name == name)
    .unwrap_or_else(|| panic!("missing entity {name}"))
}

#[test]
fn test_generate_without_operations() {
  let output = orchestrator(&[]).generate(SCHEMA).unwrap();

  assert_eq!(output.entities.len(), 3);
  assert!(output.entities.iter().all(|e| e.mutation.is_none() && e.query.is_none()));
  assert_eq!(output.stats.fragments_generated, 3);
  assert_eq!(output.stats.mutations_generated, 0);
  assert_eq!(output.stats.queries_generated, 0);
  assert!(output.stats.warnings.is_empty());
}

#[test]
fn test_generate_plans_allow_listed_operations() {
  let output = orchestrator(&["SAVEORDER", "customer", "orderline"]).generate(SCHEMA).unwrap();

  let order = entity(&output.entities, "Order");
  assert!(order.fragment.starts_with("fragment Order on OrderGql {"));
  assert!(order.mutation.as_deref().unwrap().starts_with("mutation SaveOrder($order: InputOrderGql!)"));
  assert!(order.query.is_none());

  let customer = entity(&output.entities, "Customer");
  assert!(customer.mutation.is_none());
  assert!(customer.query.as_deref().unwrap().starts_with("query Customer($id: Int!)"));

  let line = entity(&output.entities, "OrderLine");
  assert!(line.query.as_deref().unwrap().contains("orderLine(id: $id)"));

  assert_eq!(output.stats.mutations_generated, 1);
  assert_eq!(output.stats.queries_generated, 2);
}

#[test]
fn test_generate_without_matches() {
  let output = orchestrator(&["SaveFoo"]).generate("type Query {\n  foo: Int\n}\n").unwrap();

  assert!(output.entities.is_empty());
  assert_eq!(output.stats.fragments_generated, 0);
  assert_eq!(output.stats.mutations_generated, 0);
  assert_eq!(output.stats.queries_generated, 0);
  assert_eq!(
    output.stats.warnings,
    vec![GenerationWarning::UnknownOperation {
      operation_name: "SAVEFOO".to_string(),
    }]
  );
}

#[test]
fn test_generate_reports_duplicates_and_keeps_both() {
  let schema = "type FooGql {\n  id: Int\n}\n\ntype FooGql {\n  name: String\n}\n";
  let output = orchestrator(&["foo"]).generate(schema).unwrap();

  assert_eq!(output.entities.len(), 2);
  assert_eq!(output.stats.fragments_generated, 2);
  assert_eq!(output.stats.queries_generated, 2);
  assert_eq!(
    output.stats.warnings,
    vec![GenerationWarning::DuplicateEntity {
      entity_name: "Foo".to_string(),
    }]
  );
  assert!(output.entities[1].fragment.contains("  name"));
}

#[test]
fn test_generate_is_deterministic() {
  let orchestrator = orchestrator(&["SaveOrder", "order"]);
  assert_eq!(orchestrator.generate(SCHEMA).unwrap(), orchestrator.generate(SCHEMA).unwrap());
}
