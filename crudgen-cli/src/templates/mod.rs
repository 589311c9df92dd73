//! Stub registry and rendering

use crate::scaffold::GeneratedFile;
use anyhow::{Context, Result};
use handlebars::Handlebars;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod stubs;

/// Every stub the generator knows, by name and built-in source
pub const STUBS: [(&str, &str); 6] = [
    ("Model", stubs::MODEL),
    ("Controller", stubs::CONTROLLER),
    ("ApiController", stubs::API_CONTROLLER),
    ("Request", stubs::REQUEST),
    ("Resource", stubs::RESOURCE),
    ("LivewireForm", stubs::LIVEWIRE_FORM),
];

/// Extension of stub files on disk
pub const STUB_EXTENSION: &str = "stub";

/// Handlebars registry holding every stub
///
/// Stubs found as `{name}.stub` in the custom directory replace the
/// built-in ones; missing files fall back silently.
pub struct StubRegistry {
    handlebars: Handlebars<'static>,
}

impl StubRegistry {
    /// Registry with the built-in stubs only
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in stub fails to parse
    pub fn new() -> Result<Self> {
        Self::with_overrides(None)
    }

    /// Registry with stubs from `custom_dir` taking precedence
    ///
    /// # Errors
    ///
    /// Returns an error if a stub cannot be read or fails to parse
    pub fn with_overrides(custom_dir: Option<&Path>) -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Disable HTML escaping since we're generating code
        handlebars.register_escape_fn(handlebars::no_escape);

        for (name, builtin) in STUBS {
            let custom = custom_dir
                .map(|dir| stub_path(dir, name))
                .filter(|path| path.is_file());

            match custom {
                Some(path) => {
                    debug!(stub = name, path = %path.display(), "Using custom stub");
                    let source = fs::read_to_string(&path)
                        .with_context(|| format!("Failed to read stub: {}", path.display()))?;
                    handlebars
                        .register_template_string(name, source)
                        .with_context(|| format!("Invalid stub: {}", path.display()))?;
                }
                None => handlebars
                    .register_template_string(name, builtin)
                    .with_context(|| format!("Invalid built-in stub: {name}"))?,
            }
        }

        Ok(Self { handlebars })
    }

    /// Render stub `name` with `context`
    ///
    /// # Errors
    ///
    /// Returns an error if the stub is unknown or rendering fails
    pub fn render(&self, name: &str, context: &serde_json::Value) -> Result<String> {
        self.handlebars
            .render(name, context)
            .with_context(|| format!("Failed to render stub: {name}"))
    }

    /// Every built-in stub as a file under `dir`, ready for publishing
    #[must_use]
    pub fn stub_files(dir: &Path) -> Vec<GeneratedFile> {
        STUBS
            .iter()
            .map(|(name, source)| GeneratedFile {
                path: stub_path(dir, name),
                content: (*source).to_string(),
                description: format!("{name} stub"),
            })
            .collect()
    }
}

fn stub_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(name).with_extension(STUB_EXTENSION)
}
