use crate::domain::{AppError, Framework};

/// Port for interactive questions.
///
/// Every method returns `Ok(None)` when the user cancels the prompt, which is
/// distinct from a negative answer (`Ok(Some(false))`).
pub trait Prompter {
    /// Ask for a project name. Implementations only return valid names.
    fn ask_project_name(&self) -> Result<Option<String>, AppError>;

    /// Ask which framework template to use.
    fn ask_framework(&self) -> Result<Option<Framework>, AppError>;

    /// Ask whether the project should keep i18n support.
    fn ask_need_i18n(&self) -> Result<Option<bool>, AppError>;

    /// Ask whether an existing target directory may be overwritten.
    fn confirm_overwrite(&self) -> Result<Option<bool>, AppError>;
}
