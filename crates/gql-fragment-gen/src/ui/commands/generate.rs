use std::{io::Write, path::PathBuf};

use anyhow::Context;
use chrono::{Local, Timelike};
use strum::IntoEnumIterator;

use crate::{
  generator::{
    emitter::{ArtifactKind, Emitter, OutputLayout},
    extractor::FragmentPatterns,
    metrics::GenerationStats,
    naming::OperationAllowList,
    orchestrator::Orchestrator,
  },
  ui::{Colors, GenerateArgs, SchemaArgs, Tone},
  utils::SchemaSource,
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub schema_file: PathBuf,
  pub output_folder: PathBuf,
  pub patterns: FragmentPatterns,
  pub allow_list: OperationAllowList,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  async fn load_schema(&self) -> anyhow::Result<SchemaSource> {
    Ok(SchemaSource::open(&self.schema_file).await?)
  }

  fn create_orchestrator(&self) -> Orchestrator {
    Orchestrator::new(self.patterns.clone(), self.allow_list.clone())
  }

  fn create_emitter(&self) -> Emitter {
    Emitter::new(OutputLayout::new(&self.output_folder))
  }
}

impl GenerateConfig {
  pub fn from_args(args: GenerateArgs) -> anyhow::Result<Self> {
    let GenerateArgs {
      schema,
      output_folder,
      verbose,
      quiet,
    } = args;

    let patterns = super::fragment_patterns(&schema)?;
    let SchemaArgs {
      schema_file,
      operation_names,
      ..
    } = schema;

    Ok(Self {
      schema_file,
      output_folder,
      patterns,
      allow_list: OperationAllowList::parse(operation_names),
      verbose,
      quiet,
    })
  }
}

/// Console reporting for a generation run.
///
/// Writes to an injected sink; a broken sink never fails the run.
struct GenerateLogger<'a, W: Write> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
  out: W,
}

impl<'a, W: Write> GenerateLogger<'a, W> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors, out: W) -> Self {
    Self { config, colors, out }
  }

  fn line(&mut self, message: &str) {
    if !self.config.quiet {
      let _ = writeln!(self.out, "{message}");
    }
  }

  fn info(&mut self, message: &str) {
    let timestamp = self.colors.paint(format_timestamp(), Tone::Timestamp);
    self.line(&format!("{timestamp} {message}"));
  }

  fn log_loading(&mut self) {
    let message = format!(
      "Reading graphql schema from {}",
      self.colors.paint(self.config.schema_file.display(), Tone::Info)
    );
    self.info(&message);

    if self.config.verbose && !self.config.allow_list.is_empty() {
      let message = format!(
        "{} operation names requested",
        self.colors.paint(self.config.allow_list.len(), Tone::Value)
      );
      self.line(&message);
    }
  }

  fn log_fragment(&mut self, entity_name: &str) {
    if self.config.verbose {
      let message = format!("fragment {}", self.colors.paint(entity_name, Tone::Success));
      self.line(&message);
    }
  }

  fn print_summary(&mut self, stats: &GenerationStats, layout: &OutputLayout) {
    for kind in ArtifactKind::iter() {
      let message = format!(
        "Saved {} {kind} to {}",
        self.colors.paint(stats.count(kind), Tone::Success),
        self.colors.paint(layout.folder(kind).display(), Tone::Info)
      );
      self.line(&message);
    }
  }

  fn print_warnings(&mut self, stats: &GenerationStats) {
    if stats.warnings.is_empty() {
      return;
    }

    let message = format!(
      "{} {}",
      self.colors.paint("Warnings:", Tone::Label),
      self.colors.paint(stats.warnings.len(), Tone::Value)
    );
    self.line(&message);

    for warning in &stats.warnings {
      if !warning.is_overwrite() && !self.config.verbose {
        continue;
      }

      let message = format!(
        "{} {}",
        self.colors.paint("Warning:", Tone::Accent),
        self.colors.paint(warning, Tone::Primary)
      );
      self.line(&message);
    }
  }
}

/// Runs the whole pipeline: load, extract, render, then sync the output tree.
///
/// Returns the run statistics after every file has been written or removed.
pub async fn generate_fragments<W: Write>(
  config: &GenerateConfig,
  colors: &Colors,
  out: W,
) -> anyhow::Result<GenerationStats> {
  let mut logger = GenerateLogger::new(config, colors, out);

  logger.log_loading();
  let schema = config.load_schema().await?;

  let output = config
    .create_orchestrator()
    .generate(schema.text())
    .with_context(|| format!("failed to extract fragments from '{}'", schema.path().display()))?;

  let emitter = config.create_emitter();
  emitter.prepare().await?;
  for entity in &output.entities {
    logger.log_fragment(&entity.entity_name);
    emitter.emit(entity).await?;
  }

  logger.print_summary(&output.stats, emitter.layout());
  logger.print_warnings(&output.stats);

  Ok(output.stats)
}
