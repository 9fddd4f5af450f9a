//! In-memory view of a generated project's `package.json`.

use serde_json::{Map, Value};

/// File name of the project descriptor inside a generated project.
pub const DESCRIPTOR_FILE: &str = "package.json";

/// A parsed `package.json` document.
///
/// Key order is preserved, so fields that are not touched serialize exactly
/// where they were read.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDescriptor {
    document: Map<String, Value>,
}

impl ProjectDescriptor {
    /// Parse a descriptor. The root must be a JSON object.
    pub fn parse(content: &str) -> Result<Self, String> {
        match serde_json::from_str::<Value>(content).map_err(|err| err.to_string())? {
            Value::Object(document) => Ok(Self { document }),
            _ => Err("expected a JSON object at the root".to_string()),
        }
    }

    pub fn set_name(&mut self, name: &str) {
        self.document.insert("name".to_string(), Value::String(name.to_string()));
    }

    /// Whether `dependencies` contains `key`.
    pub fn has_dependency(&self, key: &str) -> bool {
        self.document
            .get("dependencies")
            .and_then(Value::as_object)
            .is_some_and(|deps| deps.contains_key(key))
    }

    /// Remove `keys` from the `dependencies` mapping.
    ///
    /// Missing keys and a missing mapping are tolerated. Returns the keys that
    /// were actually removed.
    pub fn remove_dependencies(&mut self, keys: &[&str]) -> Vec<String> {
        let Some(deps) = self.document.get_mut("dependencies").and_then(Value::as_object_mut)
        else {
            return Vec::new();
        };

        keys.iter()
            .filter(|key| deps.shift_remove(**key).is_some())
            .map(|key| key.to_string())
            .collect()
    }

    /// Serialize with 2-space indentation and a trailing newline.
    pub fn to_pretty_string(&self) -> Result<String, String> {
        let mut out = serde_json::to_string_pretty(&self.document).map_err(|err| err.to_string())?;
        out.push('\n');
        Ok(out)
    }
}
