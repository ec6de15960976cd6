//! Module inputs and the IR document emitted per module.

use crate::abi::AbiDescriptor;
use crate::taxonomy::{Effect, Language, ResourceClass};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors a frontend can raise while extracting a module.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("unreadable source: {0}")]
    UnreadableSource(String),
}

/// One source file being processed. Immutable once read; owned by the
/// frontend invocation that consumes it.
#[derive(Debug, Clone)]
pub struct Module {
    path: PathBuf,
    language: Language,
    bytes: Vec<u8>,
}

impl Module {
    pub fn new(path: impl Into<PathBuf>, language: Language, bytes: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            language,
            bytes,
        }
    }

    /// Builds a module from in-memory source text.
    pub fn from_source(path: impl Into<PathBuf>, language: Language, source: &str) -> Self {
        Self::new(path, language, source.as_bytes().to_vec())
    }

    /// Reads a module from disk. Missing or unreadable files surface as
    /// plain I/O errors at the caller's boundary.
    pub fn read(path: impl Into<PathBuf>, language: Language) -> std::io::Result<Self> {
        let path = path.into();
        let bytes = std::fs::read(&path)?;
        Ok(Self {
            path,
            language,
            bytes,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// String identity used as the `module` key of the IR document.
    pub fn identity(&self) -> String {
        self.path.display().to_string()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Decodes the raw content as UTF-8.
    pub fn text(&self) -> Result<&str, ExtractionError> {
        std::str::from_utf8(&self.bytes).map_err(|err| {
            ExtractionError::UnreadableSource(format!(
                "{}: invalid utf-8: {}",
                self.path.display(),
                err
            ))
        })
    }
}

/// One extracted function signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionRecord {
    /// Non-empty identifier; unique within the module together with the
    /// module identity, not globally.
    pub name: String,
    /// Set semantics, serialized as a sequence.
    pub effects: Vec<Effect>,
    /// Resource dimension -> discipline; never empty for a valid record.
    pub resources: BTreeMap<String, ResourceClass>,
}

impl FunctionRecord {
    pub fn new(
        name: impl Into<String>,
        effects: Vec<Effect>,
        resources: BTreeMap<String, ResourceClass>,
    ) -> Self {
        Self {
            name: name.into(),
            effects,
            resources,
        }
    }
}

/// The unit of output: one module's normalized description. Constructed by
/// a single frontend invocation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrDocument {
    pub module: String,
    pub language: Language,
    pub functions: Vec<FunctionRecord>,
    pub abi: AbiDescriptor,
}

impl IrDocument {
    pub fn new(module: &Module, functions: Vec<FunctionRecord>, abi: AbiDescriptor) -> Self {
        Self {
            module: module.identity(),
            language: module.language(),
            functions,
            abi,
        }
    }
}
