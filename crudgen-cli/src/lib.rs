//! crudgen CLI library

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod scaffold;
pub mod templates;

pub use scaffold::{GeneratedFile, Overwrite, Replacements, ScaffoldGenerator, ScaffoldWriter};
pub use templates::StubRegistry;

/// Output stack for a scaffold
///
/// Only non-markup files are generated, so `bootstrap` and `tailwind`
/// currently produce the same set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Stack {
    /// Resource controller with Bootstrap views (default)
    #[default]
    Bootstrap,
    /// Resource controller with Tailwind views
    Tailwind,
    /// Livewire components with a form object
    Livewire,
    /// JSON API controller and resource
    Api,
}

impl Stack {
    /// Stack name as typed on the command line
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bootstrap => "bootstrap",
            Self::Tailwind => "tailwind",
            Self::Livewire => "livewire",
            Self::Api => "api",
        }
    }
}

impl std::fmt::Display for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
