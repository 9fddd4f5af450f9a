//! Target directory resolution.
//!
//! Pure path computation: nothing here touches the filesystem.

use std::path::{Component, Path, PathBuf};

/// Resolved filesystem destination for a scaffold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldTarget {
    /// Absolute, lexically normalized project directory.
    pub path: PathBuf,
    /// Final path segment, used for display and the descriptor `name`.
    pub project_name: String,
    /// Whether the directory existed when the conflict check ran.
    pub existed_before: bool,
}

/// Derive the target directory from a raw CLI argument and a project name.
///
/// A path-like `arg` that differs from `project_name` is resolved against `cwd`
/// (absolute arguments are kept as-is). Otherwise `project_name` is joined onto
/// `cwd`. The returned `project_name` is always the basename of the chosen path.
pub fn resolve_target(arg: Option<&str>, project_name: &str, cwd: &Path) -> ScaffoldTarget {
    let chosen = match arg.map(str::trim) {
        Some(raw) if !raw.is_empty() && raw != project_name => raw,
        _ => project_name,
    };

    let path = normalize(&cwd.join(chosen));
    let project_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| project_name.to_string());

    ScaffoldTarget { path, project_name, existed_before: false }
}

/// Collapse `.` and `..` components without consulting the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cwd() -> PathBuf {
        PathBuf::from("/work")
    }

    #[test]
    fn bare_name_resolves_under_cwd() {
        let target = resolve_target(None, "demo", &cwd());
        assert_eq!(target.path, PathBuf::from("/work/demo"));
        assert_eq!(target.project_name, "demo");
        assert!(!target.existed_before);
    }

    #[test]
    fn argument_equal_to_name_resolves_under_cwd() {
        let target = resolve_target(Some("demo"), "demo", &cwd());
        assert_eq!(target.path, PathBuf::from("/work/demo"));
    }

    #[test]
    fn nested_relative_argument_uses_basename() {
        let target = resolve_target(Some("apps/web/demo"), "fallback", &cwd());
        assert_eq!(target.path, PathBuf::from("/work/apps/web/demo"));
        assert_eq!(target.project_name, "demo");
    }

    #[test]
    fn trailing_separator_is_ignored() {
        let target = resolve_target(Some("apps/demo/"), "fallback", &cwd());
        assert_eq!(target.path, PathBuf::from("/work/apps/demo"));
        assert_eq!(target.project_name, "demo");
    }

    #[test]
    fn absolute_argument_is_kept() {
        let target = resolve_target(Some("/srv/projects/shop"), "fallback", &cwd());
        assert_eq!(target.path, PathBuf::from("/srv/projects/shop"));
        assert_eq!(target.project_name, "shop");
    }

    #[test]
    fn parent_components_are_collapsed() {
        let target = resolve_target(Some("../sibling/./app"), "fallback", &cwd());
        assert_eq!(target.path, PathBuf::from("/sibling/app"));
        assert_eq!(target.project_name, "app");
    }

    #[test]
    fn dot_argument_targets_cwd() {
        let target = resolve_target(Some("."), "fallback", &cwd());
        assert_eq!(target.path, PathBuf::from("/work"));
        assert_eq!(target.project_name, "work");
    }

    #[test]
    fn blank_argument_falls_back_to_name() {
        let target = resolve_target(Some("  "), "demo", &cwd());
        assert_eq!(target.path, PathBuf::from("/work/demo"));
    }

    proptest! {
        #[test]
        fn project_name_is_always_the_final_segment(
            dirs in proptest::collection::vec("[a-z0-9_-]{1,8}", 0..4),
            name in "[A-Za-z0-9_-]{1,16}",
        ) {
            let mut arg = dirs.join("/");
            if !arg.is_empty() {
                arg.push('/');
            }
            arg.push_str(&name);

            let target = resolve_target(Some(&arg), "fallback", &cwd());
            prop_assert_eq!(&target.project_name, &name);
            prop_assert!(target.path.is_absolute());
            prop_assert!(target.path.starts_with("/work"));
        }
    }
}
