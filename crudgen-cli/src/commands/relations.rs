//! Relationship report command

use super::CatalogSource;
use anyhow::{Context, Result};
use console::style;
use crudgen::config::CrudConfig;
use crudgen::{infer_relationships, Introspector};

/// Print what inference finds for one table, writing nothing
pub struct RelationsCommand {
    table: String,
    json: bool,
}

impl RelationsCommand {
    pub const fn new(table: String, json: bool) -> Self {
        Self { table, json }
    }

    pub fn execute(&self, config: &CrudConfig, source: &CatalogSource) -> Result<()> {
        let catalog = source.open()?;
        let mut introspector = Introspector::new(catalog.as_ref());
        let relations = infer_relationships(&mut introspector, &self.table, &config.model.namespace)
            .with_context(|| format!("Failed to infer relationships for {}", self.table))?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&relations.descriptors)?);
            return Ok(());
        }

        println!(
            "\n{} {}",
            style("Relationships of").cyan().bold(),
            style(&self.table).green().bold()
        );

        if relations.descriptors.is_empty() {
            println!("  {}", style("none").dim());
        }
        for descriptor in &relations.descriptors {
            println!(
                "  {} {} {} ({} -> {})",
                style(descriptor.kind).yellow(),
                style(&descriptor.accessor_name).bold(),
                descriptor.related_table,
                descriptor.foreign_key_column,
                descriptor.owner_key_column
            );
        }

        println!("\n{}", style("Documentation:").cyan().bold());
        println!("{}", relations.documentation);
        println!("\n{}", style("Accessors:").cyan().bold());
        println!("{}", relations.accessors);

        Ok(())
    }
}
