mod memory_template_store;
mod scripted_prompter;

pub use memory_template_store::{MemoryTemplateStore, REACT_MAIN, VUE_MAIN};
pub use scripted_prompter::ScriptedPrompter;
