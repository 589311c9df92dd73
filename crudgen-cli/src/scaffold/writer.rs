//! Writing generated files to disk

use super::GeneratedFile;
use anyhow::{Context, Result};
use dialoguer::Confirm;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What to do when a generated file already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Replace existing files
    Always,
    /// Leave existing files untouched
    Skip,
    /// Ask on the terminal for each existing file
    Prompt,
}

/// Outcome of writing one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file did not exist before
    Created(PathBuf),
    /// An existing file was replaced
    Overwritten(PathBuf),
    /// An existing file was kept
    Skipped(PathBuf),
}

/// Writes generated files below a project root
#[derive(Debug, Clone)]
pub struct ScaffoldWriter {
    project_root: PathBuf,
    overwrite: Overwrite,
}

impl ScaffoldWriter {
    /// Create a writer rooted at `project_root`
    #[must_use]
    pub fn new(project_root: impl Into<PathBuf>, overwrite: Overwrite) -> Self {
        Self {
            project_root: project_root.into(),
            overwrite,
        }
    }

    /// Write one file, creating parent directories as needed
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or the file cannot be written, or the
    /// overwrite prompt fails
    pub fn write(&self, file: &GeneratedFile) -> Result<WriteOutcome> {
        let full_path = self.project_root.join(&file.path);
        let exists = full_path.exists();

        if exists && !self.should_overwrite(&file.path)? {
            info!(path = %file.path.display(), "Keeping existing file");
            return Ok(WriteOutcome::Skipped(file.path.clone()));
        }

        // Create parent directories if they don't exist
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&full_path, &file.content)
            .with_context(|| format!("Failed to write file: {}", full_path.display()))?;
        debug!(path = %full_path.display(), bytes = file.content.len(), "Wrote file");

        Ok(if exists {
            WriteOutcome::Overwritten(file.path.clone())
        } else {
            WriteOutcome::Created(file.path.clone())
        })
    }

    /// Write every file in order
    ///
    /// # Errors
    ///
    /// Stops at the first file that fails
    pub fn write_all(&self, files: &[GeneratedFile]) -> Result<Vec<WriteOutcome>> {
        files.iter().map(|file| self.write(file)).collect()
    }

    fn should_overwrite(&self, path: &Path) -> Result<bool> {
        match self.overwrite {
            Overwrite::Always => Ok(true),
            Overwrite::Skip => Ok(false),
            Overwrite::Prompt => Confirm::new()
                .with_prompt(format!("{} already exists. Overwrite?", path.display()))
                .default(false)
                .interact()
                .context("Failed to read overwrite confirmation"),
        }
    }
}
