//! CLI command implementations

pub mod make;
pub mod publish;
pub mod relations;
pub mod snapshot;

pub use make::MakeCommand;
pub use publish::PublishCommand;
pub use relations::RelationsCommand;
pub use snapshot::SnapshotCommand;

use anyhow::{Context, Result};
use crudgen::catalog::{DatabaseCatalog, SchemaSnapshot};
use crudgen::config::CrudConfig;
use crudgen::SchemaCatalog;
use crudgen_cli_lib::Overwrite;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tracing::debug;

/// Where the schema comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// A JSON snapshot on disk
    Snapshot(PathBuf),
    /// A live database
    Database(String),
    /// Nothing configured
    Missing,
}

impl CatalogSource {
    /// Pick the schema source
    ///
    /// A snapshot wins over any URL. URLs resolve from the flag, then the
    /// config file, then `DATABASE_URL`.
    pub fn resolve(
        schema: Option<PathBuf>,
        database_url: Option<String>,
        config: &CrudConfig,
    ) -> Self {
        if let Some(path) = schema {
            return Self::Snapshot(path);
        }

        database_url
            .or_else(|| config.database_url.clone())
            .or_else(|| std::env::var("DATABASE_URL").ok())
            .map_or(Self::Missing, Self::Database)
    }

    /// Open the catalog behind this source
    ///
    /// # Errors
    ///
    /// Returns an error if no source is configured, the snapshot cannot be
    /// read, or the database connection fails
    pub fn open(&self) -> Result<Box<dyn SchemaCatalog>> {
        match self {
            Self::Snapshot(path) => {
                debug!(path = %path.display(), "Reading schema snapshot");
                let snapshot = SchemaSnapshot::from_path(path)
                    .with_context(|| format!("Failed to load snapshot: {}", path.display()))?;
                Ok(Box::new(snapshot))
            }
            Self::Database(url) => {
                let spinner = spinner("Connecting to database...")?;
                let catalog = DatabaseCatalog::connect(url);
                spinner.finish_and_clear();

                let catalog = catalog.context("Failed to open database catalog")?;
                debug!(backend = catalog.backend().name(), "Connected");
                Ok(Box::new(catalog))
            }
            Self::Missing => anyhow::bail!(
                "No schema source. Pass --database-url or --schema, set database_url in crud.toml, or export DATABASE_URL"
            ),
        }
    }
}

/// Steady spinner on stderr
pub fn spinner(message: &'static str) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .context("Failed to set progress style")?,
    );
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner.set_message(message);
    Ok(spinner)
}

/// Overwrite policy for a command
///
/// Without `--force`, an interactive terminal is asked and anything else
/// keeps existing files.
pub fn overwrite_policy(force: bool) -> Overwrite {
    if force {
        Overwrite::Always
    } else if console::user_attended() {
        Overwrite::Prompt
    } else {
        Overwrite::Skip
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_wins_over_url() {
        let source = CatalogSource::resolve(
            Some(PathBuf::from("shop.json")),
            Some("sqlite::memory:".to_string()),
            &CrudConfig::default(),
        );
        assert_eq!(source, CatalogSource::Snapshot(PathBuf::from("shop.json")));
    }

    #[test]
    fn test_flag_wins_over_config() {
        let config = CrudConfig {
            database_url: Some("postgres://localhost/shop".to_string()),
            ..CrudConfig::default()
        };
        let source = CatalogSource::resolve(None, Some("sqlite::memory:".to_string()), &config);
        assert_eq!(source, CatalogSource::Database("sqlite::memory:".to_string()));

        let source = CatalogSource::resolve(None, None, &config);
        assert_eq!(
            source,
            CatalogSource::Database("postgres://localhost/shop".to_string())
        );
    }

    #[test]
    fn test_missing_source_fails_to_open() {
        let err = CatalogSource::Missing.open().err().unwrap();
        assert!(err.to_string().contains("No schema source"));
    }

    #[test]
    fn test_unreadable_snapshot() {
        let source = CatalogSource::Snapshot(PathBuf::from("/nonexistent/shop.json"));
        assert!(source.open().is_err());
    }

    #[test]
    fn test_force_always_overwrites() {
        assert_eq!(overwrite_policy(true), Overwrite::Always);
    }
}
