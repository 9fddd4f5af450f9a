//! API Facade for the application.
//!
//! Glues context creation to command execution for callers outside the CLI.

use std::path::PathBuf;

use crate::adapters::{DialoguerPrompter, DirectoryTemplateStore, EmbeddedTemplateStore};
use crate::app::{AppContext, commands};
use crate::ports::{Prompter, TemplateStore};

pub use crate::app::commands::init::{InitOutcome, InitRequest, ScaffoldReport, StripSummary};
pub use crate::domain::{AppError, Framework};

/// Scaffold a project using terminal prompts and the embedded templates.
pub fn init(request: &InitRequest) -> Result<InitOutcome, AppError> {
    init_with_templates(request, None)
}

/// Scaffold a project, reading templates from `template_dir` when given.
pub fn init_with_templates(
    request: &InitRequest,
    template_dir: Option<PathBuf>,
) -> Result<InitOutcome, AppError> {
    let prompter = DialoguerPrompter::new();
    match template_dir {
        Some(dir) => init_with(prompter, DirectoryTemplateStore::new(dir), request),
        None => init_with(prompter, EmbeddedTemplateStore::new(), request),
    }
}

/// Scaffold a project with caller-provided adapters.
pub fn init_with<P, T>(
    prompter: P,
    templates: T,
    request: &InitRequest,
) -> Result<InitOutcome, AppError>
where
    P: Prompter,
    T: TemplateStore,
{
    let ctx = AppContext::new(prompter, templates);
    commands::init::execute(&ctx, request)
}
