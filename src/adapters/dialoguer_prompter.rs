use std::io::ErrorKind;

use dialoguer::{Confirm, Error as DialoguerError, Input, Select};
use owo_colors::{OwoColorize, Stream::Stderr};

use crate::domain::{AppError, DEFAULT_PROJECT_NAME, Framework, is_valid_project_name};
use crate::ports::Prompter;

/// Terminal prompts backed by `dialoguer`.
#[derive(Debug, Clone, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn ask_project_name(&self) -> Result<Option<String>, AppError> {
        let answer = Input::<String>::new()
            .with_prompt("Project Name")
            .default(DEFAULT_PROJECT_NAME.to_string())
            .validate_with(|input: &String| -> Result<(), &str> {
                if is_valid_project_name(input) {
                    Ok(())
                } else {
                    Err("Project name may only contain letters, digits, hyphens, and underscores")
                }
            })
            .interact_text();
        cancellable(answer, "project name")
    }

    fn ask_framework(&self) -> Result<Option<Framework>, AppError> {
        let items: Vec<&str> = Framework::ALL.iter().map(|f| f.display_name()).collect();
        let selection = Select::new()
            .with_prompt("Select a framework")
            .items(&items)
            .default(0)
            .interact_opt();
        Ok(cancellable(selection, "framework")?.flatten().map(|index| Framework::ALL[index]))
    }

    fn ask_need_i18n(&self) -> Result<Option<bool>, AppError> {
        let answer = Confirm::new()
            .with_prompt("Do you need i18n support?")
            .default(true)
            .interact_opt();
        Ok(cancellable(answer, "i18n choice")?.flatten())
    }

    fn confirm_overwrite(&self) -> Result<Option<bool>, AppError> {
        eprintln!(
            "{}",
            "⚠️ Project directory already exists!".if_supports_color(Stderr, |t| t.yellow())
        );
        let answer = Confirm::new()
            .with_prompt("Continue will overwrite the folder")
            .default(false)
            .interact_opt();
        Ok(cancellable(answer, "overwrite confirmation")?.flatten())
    }
}

/// Map an interrupted read to cancellation and other failures to `AppError::Prompt`.
fn cancellable<T>(result: Result<T, DialoguerError>, what: &str) -> Result<Option<T>, AppError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Prompt(format!("Failed to read {}: {}", what, err))),
    }
}
