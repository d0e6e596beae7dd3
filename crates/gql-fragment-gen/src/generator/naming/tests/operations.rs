use crate::generator::naming::{
  OperationAllowList, camel_case_entity_name, mutation_operation_name, query_operation_name,
};

#[test]
fn test_camel_case_entity_name() {
  let cases = [
    ("Foo", "foo"),
    ("UserProfile", "userProfile"),
    ("URL", "uRL"),
    ("already", "already"),
    ("X", "x"),
    ("", ""),
  ];
  for (input, expected) in cases {
    assert_eq!(camel_case_entity_name(input), expected, "failed for input {input:?}");
  }
}

#[test]
fn test_operation_names() {
  let cases = [
    ("Foo", "SaveFoo", "foo"),
    ("OrderLine", "SaveOrderLine", "orderLine"),
    ("A", "SaveA", "a"),
  ];
  for (entity, mutation, query) in cases {
    assert_eq!(mutation_operation_name(entity), mutation);
    assert_eq!(query_operation_name(entity), query);
  }
}

#[test]
fn test_query_name_only_changes_first_char() {
  for entity in ["Foo", "FooBar", "HTTPRequest", "Ünicode"] {
    let query = query_operation_name(entity);
    let mut expected: String = entity.chars().next().unwrap().to_lowercase().collect();
    expected.push_str(&entity[entity.chars().next().unwrap().len_utf8()..]);
    assert_eq!(query, expected);
  }
}

#[test]
fn test_allow_list_normalizes_entries() {
  let allow_list = OperationAllowList::parse(["saveFoo", " bar ", "", "  ", "Baz,qux"]);

  assert_eq!(allow_list.len(), 4);
  assert_eq!(allow_list.names().collect::<Vec<_>>(), vec!["BAR", "BAZ", "QUX", "SAVEFOO"]);
}

#[test]
fn test_allow_list_membership_is_case_insensitive() {
  let allow_list = OperationAllowList::parse(["SAVEFOO", "foo"]);

  assert!(allow_list.contains("SaveFoo"));
  assert!(allow_list.contains("savefoo"));
  assert!(allow_list.contains(&query_operation_name("Foo")));
  assert!(!allow_list.contains("SaveBar"));
}

#[test]
fn test_empty_allow_list() {
  let allow_list = OperationAllowList::parse(Vec::<String>::new());
  assert!(allow_list.is_empty());
  assert!(!allow_list.contains(""));

  let from_blank = OperationAllowList::parse([""]);
  assert!(from_blank.is_empty());
}
