use std::cell::Cell;

use crate::domain::{AppError, Framework};
use crate::ports::Prompter;

/// Prompter returning preset answers. `None` simulates a cancelled prompt.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    pub project_name: Option<String>,
    pub framework: Option<Framework>,
    pub need_i18n: Option<bool>,
    pub overwrite: Option<bool>,
    pub questions_asked: Cell<usize>,
    pub overwrite_prompts: Cell<usize>,
}

impl ScriptedPrompter {
    pub fn answering(project_name: &str, framework: Framework, need_i18n: bool) -> Self {
        Self {
            project_name: Some(project_name.to_string()),
            framework: Some(framework),
            need_i18n: Some(need_i18n),
            overwrite: Some(true),
            ..Self::default()
        }
    }

    pub fn with_overwrite(mut self, overwrite: Option<bool>) -> Self {
        self.overwrite = overwrite;
        self
    }

    fn asked(&self) {
        self.questions_asked.set(self.questions_asked.get() + 1);
    }
}

impl Prompter for ScriptedPrompter {
    fn ask_project_name(&self) -> Result<Option<String>, AppError> {
        self.asked();
        Ok(self.project_name.clone())
    }

    fn ask_framework(&self) -> Result<Option<Framework>, AppError> {
        self.asked();
        Ok(self.framework)
    }

    fn ask_need_i18n(&self) -> Result<Option<bool>, AppError> {
        self.asked();
        Ok(self.need_i18n)
    }

    fn confirm_overwrite(&self) -> Result<Option<bool>, AppError> {
        self.asked();
        self.overwrite_prompts.set(self.overwrite_prompts.get() + 1);
        Ok(self.overwrite)
    }
}
