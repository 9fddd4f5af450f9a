//! Target directory conflict handling.
//!
//! This is the only step allowed to delete data. Deletion is recursive and
//! happens only after `force` or an explicit confirmation.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::app::progress::Status;
use crate::domain::AppError;
use crate::ports::Prompter;

/// How the target directory was made ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The directory did not exist and was created.
    Created,
    /// An existing directory was removed and recreated empty.
    Replaced,
    /// The user cancelled the confirmation prompt; nothing was touched.
    Cancelled,
}

/// Ensure `path` is an empty directory.
///
/// An existing path is replaced when `force` is set or the user confirms.
/// Declining returns `AppError::OverwriteDeclined` and leaves the path as is.
pub fn resolve<P: Prompter>(
    prompter: &P,
    path: &Path,
    force: bool,
) -> Result<Resolution, AppError> {
    if !path.exists() {
        create(path)?;
        return Ok(Resolution::Created);
    }

    if !force {
        match prompter.confirm_overwrite()? {
            Some(true) => {}
            Some(false) => return Err(AppError::OverwriteDeclined { path: path.to_path_buf() }),
            None => return Ok(Resolution::Cancelled),
        }
    }

    let status = Status::begin(&format!("Removing target directory ({})", path.display()));
    remove(path)?;
    status.finish();

    create(path)?;
    Ok(Resolution::Replaced)
}

fn remove(path: &Path) -> Result<(), AppError> {
    debug!(path = %path.display(), "removing existing target");
    let result = if path.is_dir() { fs::remove_dir_all(path) } else { fs::remove_file(path) };
    result.map_err(|source| AppError::RemoveDirectory { path: path.to_path_buf(), source })
}

fn create(path: &Path) -> Result<(), AppError> {
    fs::create_dir_all(path)
        .map_err(|source| AppError::CreateDirectory { path: path.to_path_buf(), source })
}
