//! Removal of i18n support from a generated project.
//!
//! Entry-file edits are exact substring removals. A template whose entry file
//! no longer contains the expected snippets is left as is.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

use tracing::debug;

use super::metadata::{load_descriptor, save_descriptor};
use crate::domain::{AppError, Framework, LOCALES_DIR, README_FILE, strip_i18n_mentions};

/// What the stripper changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StripSummary {
    pub locales_removed: bool,
    pub snippets_removed: usize,
    pub dependencies_removed: Vec<String>,
    pub readme_updated: bool,
}

/// Remove locales, entry-file wiring, dependencies and README mentions.
///
/// Does nothing when `need_i18n` is true. Any read or write failure is fatal.
pub fn strip(
    project_dir: &Path,
    framework: Framework,
    need_i18n: bool,
) -> Result<StripSummary, AppError> {
    let mut summary = StripSummary::default();
    if need_i18n {
        return Ok(summary);
    }

    let removal = framework.i18n_removal();

    summary.locales_removed = remove_locales(&project_dir.join(LOCALES_DIR))?;
    summary.snippets_removed =
        remove_entry_snippets(&project_dir.join(removal.entry_file), removal.entry_snippets)?;

    if let Some(mut descriptor) = load_descriptor(project_dir)? {
        summary.dependencies_removed = descriptor.remove_dependencies(removal.dependencies);
        if !summary.dependencies_removed.is_empty() {
            save_descriptor(project_dir, &descriptor)?;
        }
    }

    summary.readme_updated = strip_readme(&project_dir.join(README_FILE))?;

    debug!(framework = %framework, ?summary, "i18n removed");
    Ok(summary)
}

fn remove_locales(dir: &Path) -> Result<bool, AppError> {
    match fs::remove_dir_all(dir) {
        Ok(()) => Ok(true),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
        Err(err) => Err(strip_error(dir, err)),
    }
}

fn remove_entry_snippets(path: &Path, snippets: &[&str]) -> Result<usize, AppError> {
    let original = fs::read_to_string(path).map_err(|err| strip_error(path, err))?;

    let mut content = original.clone();
    let mut removed = 0;
    for snippet in snippets {
        if content.contains(snippet) {
            content = content.replacen(snippet, "", 1);
            removed += 1;
        }
    }

    if content != original {
        fs::write(path, content).map_err(|err| strip_error(path, err))?;
    }
    Ok(removed)
}

fn strip_readme(path: &Path) -> Result<bool, AppError> {
    let original = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(false),
        Err(err) => return Err(strip_error(path, err)),
    };

    let stripped = strip_i18n_mentions(&original);
    if stripped == original {
        return Ok(false);
    }
    fs::write(path, stripped).map_err(|err| strip_error(path, err))?;
    Ok(true)
}

fn strip_error(path: &Path, source: io::Error) -> AppError {
    AppError::StripI18n { path: path.to_path_buf(), source }
}
