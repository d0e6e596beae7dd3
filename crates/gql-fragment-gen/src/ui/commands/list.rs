use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::{
  generator::{
    extractor::FragmentCandidate,
    naming::{OperationAllowList, mutation_operation_name, query_operation_name},
    orchestrator::Orchestrator,
  },
  ui::{Colors, ListArgs, Tone, colors::IntoComfyColor, term_width},
  utils::SchemaSource,
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct FragmentRow {
  entity_name: String,
  mutation_name: String,
  mutation_enabled: bool,
  query_name: String,
  query_enabled: bool,
}

impl FragmentRow {
  fn new(candidate: &FragmentCandidate, allow_list: &OperationAllowList) -> Self {
    let mutation_name = mutation_operation_name(&candidate.entity_name);
    let query_name = query_operation_name(&candidate.entity_name);

    Self {
      entity_name: candidate.entity_name.clone(),
      mutation_enabled: allow_list.contains(&mutation_name),
      query_enabled: allow_list.contains(&query_name),
      mutation_name,
      query_name,
    }
  }

  fn enabled_summary(&self) -> String {
    match (self.mutation_enabled, self.query_enabled) {
      (true, true) => "mutation, query".to_string(),
      (true, false) => "mutation".to_string(),
      (false, true) => "query".to_string(),
      (false, false) => "-".to_string(),
    }
  }
}

fn operation_cell(name: &str, enabled: bool, colors: &Colors) -> Cell {
  if enabled {
    Cell::new(name)
      .fg(IntoComfyColor::into(colors.tone(Tone::Success)))
      .add_attribute(Attribute::Bold)
  } else {
    Cell::new(name).fg(IntoComfyColor::into(colors.tone(Tone::Timestamp)))
  }
}

fn build_table(rows: &[FragmentRow], colors: &Colors) -> Table {
  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut header = Row::new();
  header.add_cell(Cell::new("FRAGMENT").fg(IntoComfyColor::into(colors.tone(Tone::Label))));
  header.add_cell(Cell::new("MUTATION").fg(IntoComfyColor::into(colors.tone(Tone::Label))));
  header.add_cell(Cell::new("QUERY").fg(IntoComfyColor::into(colors.tone(Tone::Label))));
  header.add_cell(Cell::new("ENABLED").fg(IntoComfyColor::into(colors.tone(Tone::Label))));
  table.set_header(header);

  for fragment in rows {
    let mut row = Row::new();
    row.add_cell(
      Cell::new(&fragment.entity_name)
        .fg(IntoComfyColor::into(colors.tone(Tone::Value)))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(operation_cell(&fragment.mutation_name, fragment.mutation_enabled, colors));
    row.add_cell(operation_cell(&fragment.query_name, fragment.query_enabled, colors));
    row.add_cell(
      Cell::new(fragment.enabled_summary())
        .fg(IntoComfyColor::into(colors.tone(Tone::Accent)))
        .set_alignment(CellAlignment::Right),
    );
    table.add_row(row);
  }

  table
}

pub async fn list_fragments(args: ListArgs, colors: &Colors) -> anyhow::Result<()> {
  let patterns = super::fragment_patterns(&args.schema)?;
  let allow_list = OperationAllowList::parse(&args.schema.operation_names);
  let orchestrator = Orchestrator::new(patterns, allow_list);

  let schema = SchemaSource::open(&args.schema.schema_file).await?;
  let candidates = orchestrator.extract(schema.text())?;

  let rows: Vec<FragmentRow> = candidates
    .iter()
    .map(|candidate| FragmentRow::new(candidate, orchestrator.allow_list()))
    .collect();

  println!("{}", build_table(&rows, colors));

  Ok(())
}
