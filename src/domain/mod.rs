pub mod answers;
pub mod descriptor;
pub mod error;
pub mod framework;
pub mod project_name;
pub mod readme;
pub mod target;

pub use answers::AnswerRecord;
pub use descriptor::{DESCRIPTOR_FILE, ProjectDescriptor};
pub use error::AppError;
pub use framework::{Framework, I18nRemoval};
pub use project_name::{DEFAULT_PROJECT_NAME, ProjectName, is_valid_project_name};
pub use readme::{README_FILE, strip_i18n_mentions};
pub use target::{ScaffoldTarget, resolve_target};

/// Locales asset directory relative to a generated project root.
pub const LOCALES_DIR: &str = "src/locales";
