//! Schema snapshot command

use super::{spinner, CatalogSource};
use anyhow::{Context, Result};
use console::style;
use crudgen::catalog::SchemaSnapshot;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Capture the catalog as JSON
pub struct SnapshotCommand {
    output: Option<PathBuf>,
}

impl SnapshotCommand {
    pub const fn new(output: Option<PathBuf>) -> Self {
        Self { output }
    }

    pub fn execute(&self, source: &CatalogSource) -> Result<()> {
        let catalog = source.open()?;

        let reading = spinner("Capturing schema...")?;
        let snapshot = SchemaSnapshot::capture(catalog.as_ref());
        reading.finish_and_clear();
        let snapshot = snapshot.context("Failed to capture schema")?;

        let json = snapshot.to_json_pretty()?;

        match &self.output {
            Some(path) => {
                fs::write(path, json)
                    .with_context(|| format!("Failed to write file: {}", path.display()))?;
                info!(path = %path.display(), tables = snapshot.tables.len(), "Wrote snapshot");
                println!(
                    "{} {} tables to {}",
                    style("Captured").green().bold(),
                    snapshot.tables.len(),
                    style(path.display()).dim()
                );
            }
            None => println!("{json}"),
        }

        Ok(())
    }
}
