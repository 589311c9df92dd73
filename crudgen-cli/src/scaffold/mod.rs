//! CRUD scaffolding
//!
//! - [`Replacements`] turns a table, its columns and inferred relations into
//!   template values
//! - [`ScaffoldGenerator`] renders the stubs a stack needs
//! - [`ScaffoldWriter`] puts the results on disk

pub mod generator;
pub mod replacements;
pub mod writer;

pub use generator::{namespace_path, GeneratedFile, ScaffoldGenerator};
pub use replacements::Replacements;
pub use writer::{Overwrite, ScaffoldWriter, WriteOutcome};
