//! crudgen CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{CatalogSource, MakeCommand, PublishCommand, RelationsCommand, SnapshotCommand};
use crudgen::config::CrudConfig;
use crudgen::observability::{self, LogOptions};
use crudgen_cli_lib::Stack;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "crudgen")]
#[command(version)]
#[command(about = "Scaffold CRUD source files from a database schema", long_about = None)]
struct Cli {
    /// Database connection URL (falls back to the config file, then `DATABASE_URL`)
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Read the schema from a JSON snapshot instead of a database
    #[arg(long, global = true, value_name = "SNAPSHOT")]
    schema: Option<PathBuf>,

    /// Config file (defaults to ./crud.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate CRUD files for a table
    Make {
        /// Table name, optionally schema-qualified
        table: String,
        /// Output stack
        #[arg(value_enum, default_value_t = Stack::default())]
        stack: Stack,
        /// Route name (defaults to the kebab-case plural of the model)
        #[arg(long)]
        route: Option<String>,
        /// Overwrite existing files without asking
        #[arg(long)]
        force: bool,
    },
    /// Show the relationships inferred for a table
    Relations {
        /// Table name, optionally schema-qualified
        table: String,
        /// Print descriptors as JSON
        #[arg(long)]
        json: bool,
    },
    /// Capture the schema as a JSON snapshot
    Snapshot {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write a default crud.toml for customization
    Publish {
        /// Also copy the built-in stubs
        #[arg(long)]
        stubs: bool,
        /// Overwrite existing files without asking
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    observability::init(LogOptions {
        verbose: cli.verbose,
        json: cli.log_json,
    })?;

    // publish may be asked to create the config file it is pointed at
    let config = match (&cli.command, cli.config.as_deref()) {
        (Commands::Publish { .. }, Some(path)) if !path.exists() => CrudConfig::load_from(path)?,
        (_, explicit) => CrudConfig::load(explicit)?,
    };
    let source = CatalogSource::resolve(cli.schema, cli.database_url, &config);

    match cli.command {
        Commands::Make {
            table,
            stack,
            route,
            force,
        } => {
            let cmd = MakeCommand::new(table, stack, route, force);
            cmd.execute(&config, &source)?;
        }
        Commands::Relations { table, json } => {
            RelationsCommand::new(table, json).execute(&config, &source)?;
        }
        Commands::Snapshot { output } => {
            SnapshotCommand::new(output).execute(&source)?;
        }
        Commands::Publish { stubs, force } => {
            PublishCommand::new(stubs, force).execute(&config, cli.config)?;
        }
    }

    Ok(())
}
