use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::domain::{AppError, Framework};
use crate::ports::{TemplateFile, TemplateStore};

/// Templates read from an on-disk root containing one directory per framework.
#[derive(Debug, Clone)]
pub struct DirectoryTemplateStore {
    root: PathBuf,
}

impl DirectoryTemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn framework_dir(&self, framework: Framework) -> PathBuf {
        self.root.join(framework.dir_name())
    }
}

impl TemplateStore for DirectoryTemplateStore {
    fn template_files(&self, framework: Framework) -> Result<Vec<TemplateFile>, AppError> {
        let dir = self.framework_dir(framework);
        if !dir.is_dir() {
            return Err(AppError::TemplateNotFound {
                framework: framework.display_name().to_string(),
                location: dir.display().to_string(),
            });
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&dir).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(|err| AppError::Io(err.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let content = fs::read(entry.path())?;
            files.push(TemplateFile { path: relative_path(&dir, entry.path()), content });
        }

        files.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(files)
    }

    fn describe(&self, framework: Framework) -> String {
        self.framework_dir(framework).display().to_string()
    }
}

fn relative_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
