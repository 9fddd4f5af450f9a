use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for zj operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Project name is empty or contains characters outside `[A-Za-z0-9_-]`.
    #[error(
        "Invalid project name '{0}': must contain only letters, digits, hyphens, or underscores"
    )]
    InvalidProjectName(String),

    /// Framework name is not one of the supported variants.
    #[error("Invalid framework '{0}': must be one of Vue, React")]
    InvalidFramework(String),

    /// User declined to overwrite an existing project directory.
    #[error("Operation cancelled: {} already exists and was left untouched", path.display())]
    OverwriteDeclined { path: PathBuf },

    /// Target directory could not be created.
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Existing target directory could not be removed.
    #[error("Failed to remove directory {}: {source}", path.display())]
    RemoveDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A template file could not be written into the target directory.
    #[error("Failed to copy template file to {}: {source}", path.display())]
    CopyTemplate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No template tree exists for the requested framework.
    #[error("Template for '{framework}' not found at {location}")]
    TemplateNotFound { framework: String, location: String },

    /// Project descriptor could not be read, parsed, or written.
    #[error("Failed to process package.json at {}: {details}", path.display())]
    Descriptor { path: PathBuf, details: String },

    /// A read or write failed while removing i18n support.
    #[error("Failed to remove i18n support at {}: {source}", path.display())]
    StripI18n {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Interactive prompt failed for a reason other than cancellation.
    #[error("Prompt failed: {0}")]
    Prompt(String),
}
