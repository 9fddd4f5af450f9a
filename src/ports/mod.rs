mod prompter;
mod template_store;

pub use prompter::Prompter;
pub use template_store::{TemplateFile, TemplateStore};
