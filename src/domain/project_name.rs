use super::AppError;

/// A validated project name.
///
/// Guarantees:
/// - Non-empty
/// - Contains only ASCII letters, digits, `-`, or `_`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

/// Name offered by the interactive prompt.
pub const DEFAULT_PROJECT_NAME: &str = "my-project";

/// Check a candidate project name without constructing a `ProjectName`.
pub fn is_valid_project_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl ProjectName {
    /// Validate and create a new instance.
    pub fn new(name: &str) -> Result<Self, AppError> {
        if is_valid_project_name(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(AppError::InvalidProjectName(name.to_string()))
        }
    }

    /// Return the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::ops::Deref for ProjectName {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        self
    }
}

impl std::fmt::Display for ProjectName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
