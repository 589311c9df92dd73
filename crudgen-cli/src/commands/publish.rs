//! Configuration and stub publishing command

use super::overwrite_policy;
use anyhow::{Context, Result};
use console::style;
use crudgen::config::{CrudConfig, CONFIG_FILE};
use crudgen_cli_lib::scaffold::WriteOutcome;
use crudgen_cli_lib::{GeneratedFile, ScaffoldWriter, StubRegistry};
use std::path::PathBuf;

/// Stub directory used when the config still points at the built-ins
const DEFAULT_STUB_DIR: &str = "resources/stubs/crud";

/// Write `crud.toml`, and optionally the stubs, for customization
pub struct PublishCommand {
    stubs: bool,
    force: bool,
}

impl PublishCommand {
    pub const fn new(stubs: bool, force: bool) -> Self {
        Self { stubs, force }
    }

    pub fn execute(&self, config: &CrudConfig, config_path: Option<PathBuf>) -> Result<()> {
        let mut config = config.clone();
        let mut files = Vec::new();

        if self.stubs {
            let stub_dir = config
                .custom_stub_dir()
                .map_or_else(|| PathBuf::from(DEFAULT_STUB_DIR), PathBuf::from);
            config.stub_path = stub_dir.display().to_string();
            files.extend(StubRegistry::stub_files(&stub_dir));
        }

        files.insert(
            0,
            GeneratedFile {
                path: config_path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE)),
                content: config.to_toml()?,
                description: "generator configuration".to_string(),
            },
        );

        let project_root = std::env::current_dir().context("Failed to get current directory")?;
        let writer = ScaffoldWriter::new(project_root, overwrite_policy(self.force));

        for outcome in writer.write_all(&files)? {
            match outcome {
                WriteOutcome::Created(path) | WriteOutcome::Overwritten(path) => println!(
                    "  {} {}",
                    style("✓").green(),
                    style(path.display()).dim()
                ),
                WriteOutcome::Skipped(path) => println!(
                    "  {} {} (exists, skipped)",
                    style("-").yellow(),
                    style(path.display()).dim()
                ),
            }
        }

        Ok(())
    }
}
