mod dialoguer_prompter;
mod directory_template_store;
mod embedded_template_store;

pub use dialoguer_prompter::DialoguerPrompter;
pub use directory_template_store::DirectoryTemplateStore;
pub use embedded_template_store::EmbeddedTemplateStore;
