use include_dir::{Dir, DirEntry, include_dir};

use crate::domain::{AppError, Framework};
use crate::ports::{TemplateFile, TemplateStore};

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Templates compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedTemplateStore;

impl EmbeddedTemplateStore {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for EmbeddedTemplateStore {
    fn template_files(&self, framework: Framework) -> Result<Vec<TemplateFile>, AppError> {
        let root = TEMPLATES_DIR.get_dir(framework.dir_name()).ok_or_else(|| {
            AppError::TemplateNotFound {
                framework: framework.display_name().to_string(),
                location: self.describe(framework),
            }
        })?;

        let mut files = Vec::new();
        collect_files(root, root, &mut files);
        files.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(files)
    }

    fn describe(&self, framework: Framework) -> String {
        format!("<embedded>/{}", framework.dir_name())
    }
}

fn collect_files(root: &'static Dir, dir: &'static Dir, files: &mut Vec<TemplateFile>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                let relative = file.path().strip_prefix(root.path()).unwrap_or(file.path());
                let path = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                files.push(TemplateFile { path, content: file.contents().to_vec() });
            }
            DirEntry::Dir(subdir) => collect_files(root, subdir, files),
        }
    }
}
