//! CRUD scaffold command

use super::{overwrite_policy, spinner, CatalogSource};
use anyhow::{Context, Result};
use console::style;
use crudgen::config::CrudConfig;
use crudgen::{infer_relationships, Introspector};
use crudgen_cli_lib::scaffold::WriteOutcome;
use crudgen_cli_lib::{Replacements, ScaffoldGenerator, ScaffoldWriter, Stack, StubRegistry};
use tracing::info;

/// Generate CRUD files for one table
pub struct MakeCommand {
    table: String,
    stack: Stack,
    route: Option<String>,
    force: bool,
}

impl MakeCommand {
    pub const fn new(table: String, stack: Stack, route: Option<String>, force: bool) -> Self {
        Self {
            table,
            stack,
            route,
            force,
        }
    }

    pub fn execute(&self, config: &CrudConfig, source: &CatalogSource) -> Result<()> {
        println!(
            "\n{} {} {}",
            style("Scaffolding").cyan().bold(),
            style(&self.table).green().bold(),
            style(format!("({})", self.stack)).dim()
        );

        let catalog = source.open()?;
        let mut introspector = Introspector::new(catalog.as_ref());

        let reading = spinner("Reading schema...")?;
        let inferred =
            infer_relationships(&mut introspector, &self.table, &config.model.namespace);
        reading.finish_and_clear();
        let relations = inferred
            .with_context(|| format!("Failed to infer relationships for {}", self.table))?;

        let columns = introspector
            .columns(&self.table)
            .with_context(|| format!("Failed to read columns of {}", self.table))?
            .to_vec();

        let replacements =
            Replacements::build(config, &self.table, &columns, &relations, self.route.as_deref());
        let model = replacements.model_name.clone();

        let templates = StubRegistry::with_overrides(config.custom_stub_dir())
            .context("Failed to load stubs")?;
        let files = ScaffoldGenerator::new(config, self.stack, replacements, templates)
            .generate()
            .context("Failed to generate scaffold files")?;

        let project_root = std::env::current_dir().context("Failed to get current directory")?;
        let writer = ScaffoldWriter::new(project_root, overwrite_policy(self.force));

        println!(
            "\n{} {} files:",
            style("Generated").green().bold(),
            files.len()
        );

        for file in &files {
            match writer.write(file)? {
                WriteOutcome::Created(path) | WriteOutcome::Overwritten(path) => {
                    info!(path = %path.display(), "Generated file");
                    println!(
                        "  {} {} ({})",
                        style("✓").green(),
                        style(path.display()).dim(),
                        style(&file.description).dim()
                    );
                }
                WriteOutcome::Skipped(path) => println!(
                    "  {} {} (exists, skipped)",
                    style("-").yellow(),
                    style(path.display()).dim()
                ),
            }
        }

        println!(
            "\n{} {} has {} relationships",
            style("✨").green().bold(),
            style(&model).green().bold(),
            relations.descriptors.len()
        );

        Ok(())
    }
}
