use super::{Framework, ProjectName};

/// Resolved user configuration for one scaffold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub project_name: ProjectName,
    pub framework: Framework,
    pub need_i18n: bool,
}

impl AnswerRecord {
    pub fn new(project_name: ProjectName, framework: Framework, need_i18n: bool) -> Self {
        Self { project_name, framework, need_i18n }
    }
}
