//! Descriptor (`package.json`) patching.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::{AppError, DESCRIPTOR_FILE, ProjectDescriptor};

/// Set the descriptor `name` to `project_name`.
///
/// Returns `false` when the project has no descriptor or the rewrite fails.
/// Failures are logged as warnings and never abort the scaffold.
pub fn patch_name(project_dir: &Path, project_name: &str) -> bool {
    let result = load_descriptor(project_dir).and_then(|descriptor| match descriptor {
        Some(mut descriptor) => {
            descriptor.set_name(project_name);
            save_descriptor(project_dir, &descriptor).map(|_| true)
        }
        None => Ok(false),
    });

    match result {
        Ok(patched) => {
            debug!(patched, name = project_name, "descriptor name");
            patched
        }
        Err(err) => {
            warn!("Error updating package.json: {}", err);
            false
        }
    }
}

/// Read and parse the descriptor. A missing file yields `Ok(None)`.
pub(super) fn load_descriptor(project_dir: &Path) -> Result<Option<ProjectDescriptor>, AppError> {
    let path = project_dir.join(DESCRIPTOR_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(AppError::Descriptor { path, details: err.to_string() }),
    };

    ProjectDescriptor::parse(&content)
        .map(Some)
        .map_err(|details| AppError::Descriptor { path, details })
}

/// Overwrite the descriptor with 2-space indented JSON.
pub(super) fn save_descriptor(
    project_dir: &Path,
    descriptor: &ProjectDescriptor,
) -> Result<(), AppError> {
    let path = project_dir.join(DESCRIPTOR_FILE);
    let content = descriptor
        .to_pretty_string()
        .map_err(|details| AppError::Descriptor { path: path.clone(), details })?;
    fs::write(&path, content).map_err(|err| AppError::Descriptor { path, details: err.to_string() })
}
