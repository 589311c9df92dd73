//! Observability (logging)
//!
//! Structured logging to stderr, so generated output on stdout stays clean.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging options chosen on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogOptions {
    /// Raise this crate's level to `debug`
    pub verbose: bool,

    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl LogOptions {
    /// Filter used when `RUST_LOG` is not set
    #[must_use]
    pub const fn default_directives(self) -> &'static str {
        if self.verbose {
            "warn,crudgen=debug,crudgen_cli_lib=debug"
        } else {
            "warn"
        }
    }
}

/// Initialize the logging stack
///
/// `RUST_LOG` takes precedence over the verbosity flag.
///
/// # Example
///
/// ```rust,no_run
/// use crudgen::observability::{self, LogOptions};
///
/// # fn main() -> anyhow::Result<()> {
/// observability::init(LogOptions { verbose: true, json: false })?;
/// tracing::debug!("Catalog opened");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns error if a global subscriber is already installed
pub fn init(options: LogOptions) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(options.default_directives()));

    if options.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    }

    Ok(())
}
