//! Schema definitions for IR documents.
//!
//! The schema is loaded once per pipeline run and shared read-only; callers
//! pass it by reference rather than through any ambient global.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors loading the schema file. Both are fatal to a batch run: no
/// meaningful validation is possible without a schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("schema file {path} is unreadable: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("schema file {path} is malformed: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Declares the required shape of an IR document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaDefinition {
    /// Required top-level keys.
    pub required: Vec<String>,
    /// Closed set of acceptable `language` tags.
    pub languages: Vec<String>,
    /// Required per-function fields.
    #[serde(default = "default_function_required")]
    pub function_required: Vec<String>,
}

fn default_function_required() -> Vec<String> {
    vec!["name".into(), "effects".into(), "resources".into()]
}

impl Default for SchemaDefinition {
    fn default() -> Self {
        Self {
            required: vec![
                "module".into(),
                "language".into(),
                "functions".into(),
                "abi".into(),
            ],
            languages: vec!["rust".into(), "cpp".into()],
            function_required: default_function_required(),
        }
    }
}

impl SchemaDefinition {
    /// Loads a schema from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| SchemaError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| SchemaError::Malformed {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn allows_language(&self, tag: &str) -> bool {
        self.languages.iter().any(|lang| lang == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_schema() {
        let schema = SchemaDefinition::default();
        assert_eq!(schema.required, ["module", "language", "functions", "abi"]);
        assert!(schema.allows_language("rust"));
        assert!(schema.allows_language("cpp"));
        assert!(!schema.allows_language("python"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"required": ["module", "functions"], "languages": ["rust"]}}"#
        )
        .unwrap();

        let schema = SchemaDefinition::from_file(file.path()).unwrap();
        assert_eq!(schema.required, ["module", "functions"]);
        assert!(!schema.allows_language("cpp"));
        // function_required falls back to the built-in contract
        assert_eq!(schema.function_required, ["name", "effects", "resources"]);
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let err = SchemaDefinition::from_file("/nonexistent/schema.json").unwrap_err();
        assert!(matches!(err, SchemaError::Unreadable { .. }));
    }

    #[test]
    fn test_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = SchemaDefinition::from_file(file.path()).unwrap_err();
        assert!(matches!(err, SchemaError::Malformed { .. }));
    }
}
