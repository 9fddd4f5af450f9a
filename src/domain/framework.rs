use std::fmt;
use std::str::FromStr;

use super::AppError;

/// Frontend frameworks with a bundled template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framework {
    Vue,
    React,
}

/// Edits that remove i18n wiring from a generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct I18nRemoval {
    /// Entry file path relative to the project root.
    pub entry_file: &'static str,
    /// Exact snippets deleted from the entry file, first occurrence only.
    pub entry_snippets: &'static [&'static str],
    /// Keys deleted from the descriptor's `dependencies` mapping.
    pub dependencies: &'static [&'static str],
}

impl Framework {
    /// All frameworks in prompt order.
    pub const ALL: [Framework; 2] = [Framework::Vue, Framework::React];

    /// Template directory name for this framework.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Framework::Vue => "vue",
            Framework::React => "react",
        }
    }

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::Vue => "Vue",
            Framework::React => "React",
        }
    }

    /// Parse a framework name, ignoring case.
    pub fn from_name(name: &str) -> Option<Framework> {
        match name.trim().to_lowercase().as_str() {
            "vue" => Some(Framework::Vue),
            "react" => Some(Framework::React),
            _ => None,
        }
    }

    pub fn i18n_removal(&self) -> I18nRemoval {
        match self {
            Framework::Vue => I18nRemoval {
                entry_file: "src/main.ts",
                entry_snippets: &["import i18n from '@/locales';\n", "app.use(i18n);\n"],
                dependencies: &["vue-i18n"],
            },
            Framework::React => I18nRemoval {
                entry_file: "src/main.tsx",
                entry_snippets: &["import './locales';\n"],
                dependencies: &["i18next", "i18next-browser-languagedetector", "react-i18next"],
            },
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Framework {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Framework::from_name(s).ok_or_else(|| AppError::InvalidFramework(s.to_string()))
    }
}
