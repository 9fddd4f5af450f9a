use crate::domain::{AppError, Framework};

/// A file in a framework template tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Path relative to the template root, `/`-separated.
    pub path: String,
    /// Raw file content.
    pub content: Vec<u8>,
}

/// Port for reading bundled project templates. Stores are read-only.
pub trait TemplateStore {
    /// All files of the framework's template, sorted by path.
    fn template_files(&self, framework: Framework) -> Result<Vec<TemplateFile>, AppError>;

    /// Human-readable location of the framework's template, for diagnostics.
    fn describe(&self, framework: Framework) -> String;
}
