use crate::generator::fragment::render_fragment;

#[test]
fn test_render_scalars_and_references() {
  let block = "type FooGql {\n  id: Int!\n  bar: BarGql\n}";

  assert_eq!(
    render_fragment(block),
    "fragment Foo on FooGql {\n  id\n  bar {\n    ...Bar\n  }\n}"
  );
}

#[test]
fn test_render_order_block() {
  let block = "type OrderGql {\n  id: Int!\n  placedAt: DateTime!\n  status: OrderStatus!\n  customer: CustomerGql!\n  \
               lines: [OrderLineGql!]!\n}";

  let expected = "fragment Order on OrderGql {\n  id\n  placedAt\n  status\n  customer {\n    ...Customer\n  }\n  \
                  lines {\n    ...OrderLine\n  }\n}";

  assert_eq!(render_fragment(block), expected);
}

#[test]
fn test_render_strips_every_required_marker() {
  let rendered = render_fragment("type FooGql {\n  tags: [String!]!\n  owner: UserGql!\n}");
  assert!(!rendered.contains('!'));
  assert!(rendered.contains("\n  tags\n"));
  assert!(rendered.contains("  owner {\n    ...User\n  }"));
}

#[test]
fn test_render_expands_every_reference_once() {
  let block = "type FooGql {\n  a: BarGql\n  b: BarGql\n  c: [BazGql]\n}";
  let rendered = render_fragment(block);

  assert_eq!(rendered.matches("...Bar\n").count(), 2);
  assert_eq!(rendered.matches("...Baz\n").count(), 1);
  assert!(rendered.contains("  a {\n    ...Bar\n  }\n  b {\n    ...Bar\n  }\n  c {\n    ...Baz\n  }"));
}

#[test]
fn test_render_keeps_crlf_line_endings() {
  let block = "type FooGql {\r\n  id: Int!\r\n  name: String\r\n}";
  assert_eq!(render_fragment(block), "fragment Foo on FooGql {\r\n  id\r\n  name\r\n}");
}

#[test]
fn test_render_crlf_block_with_reference() {
  let block = "type FooGql {\r\n  id: Int!\r\n  bar: BarGql\r\n}";
  let rendered = render_fragment(block);

  assert_eq!(
    rendered,
    "fragment Foo on FooGql {\r\n  id\r\n  bar {\r\n    ...Bar\r\n  }\r\n}"
  );
  assert_eq!(rendered.matches('\n').count(), rendered.matches("\r\n").count());
}

// Scalar collapse only applies to indented field lines, so the inline `id` keeps its type.
#[test]
fn test_render_single_line_block() {
  let block = "type FooGql { id: Int!  bar: BarGql }";

  assert_eq!(
    render_fragment(block),
    "fragment Foo on FooGql { id: Int  bar {\n    ...Bar\n  } }"
  );
}

#[test]
fn test_render_only_rewrites_leading_header() {
  let block = "type FooGql {\n  kind: String\n}";
  let rendered = render_fragment(block);
  assert!(rendered.starts_with("fragment Foo on FooGql {"));
  assert_eq!(rendered.matches("fragment").count(), 1);
}

#[test]
fn test_render_block_without_fields() {
  assert_eq!(render_fragment("type EmptyGql {\n}"), "fragment Empty on EmptyGql {\n}");
}
