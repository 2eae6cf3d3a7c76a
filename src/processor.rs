//! Plan execution against the filesystem.
//! The processor is the only component that writes to disk: it checks the
//! target directory, creates parents as needed, renders each plan entry, and
//! stops on the first failure rather than continuing with an inconsistent
//! tree. There is no rollback of files already written before a failure.

use crate::error::{Error, Result};
use crate::planner::{ContentSource, GenerationPlan};
use crate::renderer::TemplateRenderer;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Ensures the target directory exists and is safe to populate.
///
/// A missing directory is created. An existing directory is accepted only
/// when it is empty; a `.git` entry is tolerated so that `new .` works in a
/// freshly initialized repository.
///
/// # Errors
/// * `Error::TargetConflict` if the directory contains anything else
pub fn ensure_target_dir(target: &Path) -> Result<()> {
    if !target.exists() {
        return fs::create_dir_all(target)
            .map_err(|e| Error::WriteError { path: target.to_path_buf(), source: e });
    }

    for entry in fs::read_dir(target)? {
        let entry = entry?;
        if entry.file_name() != ".git" {
            return Err(Error::TargetConflict { path: target.to_path_buf() });
        }
    }

    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| Error::WriteError { path: parent.to_path_buf(), source: e })?;
    }
    fs::write(path, content)
        .map_err(|e| Error::WriteError { path: path.to_path_buf(), source: e })
}

/// Executes a generation plan under `target`.
///
/// The target directory is checked for conflicts before anything is written.
/// Entries are then processed in plan order: parents created, content
/// rendered through `engine` (or taken verbatim for literal entries), file
/// written. The first render or write failure aborts the run and names the
/// offending template or path.
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - Relative paths of all created files, in order
pub fn materialize(
    plan: &GenerationPlan,
    target: &Path,
    engine: &dyn TemplateRenderer,
) -> Result<Vec<PathBuf>> {
    ensure_target_dir(target)?;

    let mut created = Vec::with_capacity(plan.entries.len());

    for entry in &plan.entries {
        let content = match &entry.source {
            ContentSource::Template { id, context } => engine.render(id, context)?,
            ContentSource::Literal(payload) => payload.clone(),
        };

        let dest = target.join(&entry.path);
        debug!("writing file: {}", dest.display());
        write_file(&dest, &content)?;

        created.push(entry.path.clone());
    }

    Ok(created)
}
