//! Shared testing utilities for zj CLI tests.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory used as the CLI's working directory.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `zj` binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("zj").expect("Failed to locate zj binary");
        cmd.current_dir(self.work_dir()).env("HOME", self.root.path()).env("NO_COLOR", "1");
        cmd
    }

    /// Run `zj init <name> --framework <framework> --i18n|--no-i18n` and assert success.
    pub fn init_project(&self, name: &str, framework: &str, i18n: bool) {
        let i18n_flag = if i18n { "--i18n" } else { "--no-i18n" };
        self.cli().args(["init", name, "--framework", framework, i18n_flag]).assert().success();
    }

    /// Path to a project inside the work directory.
    pub fn project(&self, name: &str) -> PathBuf {
        self.work_dir.join(name)
    }

    /// Parse a project's package.json.
    pub fn descriptor(&self, name: &str) -> Value {
        let content = fs::read_to_string(self.project(name).join("package.json"))
            .expect("package.json should be readable");
        serde_json::from_str(&content).expect("package.json should be valid JSON")
    }

    /// Read a text file inside a project.
    pub fn read(&self, name: &str, path: &str) -> String {
        fs::read_to_string(self.project(name).join(path))
            .unwrap_or_else(|err| panic!("{} should be readable: {}", path, err))
    }

    /// Assert that a dependency key is absent from a project's package.json.
    pub fn assert_dependency_absent(&self, name: &str, dependency: &str) {
        let descriptor = self.descriptor(name);
        assert!(
            descriptor["dependencies"].get(dependency).is_none(),
            "{} should not be a dependency",
            dependency
        );
    }

    /// Assert that a dependency key is present in a project's package.json.
    pub fn assert_dependency_present(&self, name: &str, dependency: &str) {
        let descriptor = self.descriptor(name);
        assert!(
            descriptor["dependencies"].get(dependency).is_some(),
            "{} should be a dependency",
            dependency
        );
    }
}
