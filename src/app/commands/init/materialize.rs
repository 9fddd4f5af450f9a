use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::domain::AppError;
use crate::ports::TemplateFile;

/// Write every template file under `target`, preserving relative paths and bytes.
///
/// Stops at the first failure. Files written before the failure stay on disk.
pub fn copy_template(files: &[TemplateFile], target: &Path) -> Result<usize, AppError> {
    for file in files {
        let dest = destination(target, &file.path)?;
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .map_err(|source| AppError::CopyTemplate { path: dest.clone(), source })?;
        }
        fs::write(&dest, &file.content)
            .map_err(|source| AppError::CopyTemplate { path: dest.clone(), source })?;
    }

    debug!(count = files.len(), target = %target.display(), "template copied");
    Ok(files.len())
}

/// Join a template-relative path onto `target`, refusing paths that leave it.
fn destination(target: &Path, relative: &str) -> Result<PathBuf, AppError> {
    let relative = Path::new(relative);
    let escapes = relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes || relative.as_os_str().is_empty() {
        return Err(AppError::CopyTemplate {
            path: target.join(relative),
            source: io::Error::new(io::ErrorKind::InvalidInput, "template path escapes target"),
        });
    }
    Ok(target.join(relative))
}
