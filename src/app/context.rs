use crate::ports::{Prompter, TemplateStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<P: Prompter, T: TemplateStore> {
    prompter: P,
    templates: T,
}

impl<P: Prompter, T: TemplateStore> AppContext<P, T> {
    /// Create a new application context.
    pub fn new(prompter: P, templates: T) -> Self {
        Self { prompter, templates }
    }

    /// Get a reference to the interactive prompter.
    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Get a reference to the template store.
    pub fn templates(&self) -> &T {
        &self.templates
    }
}
