//! Effect and resource/capability vocabulary shared by all frontends.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Resource dimension every frontend classifies.
pub const MEMORY_DIMENSION: &str = "memory";

/// Closed set of source languages with a frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Rust,
    Cpp,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Rust => "rust",
            Language::Cpp => "cpp",
        }
    }

    /// Maps a file extension to its language, if one is registered.
    pub fn from_extension(ext: &str) -> Option<Language> {
        match ext {
            "rs" => Some(Language::Rust),
            "cpp" | "cc" | "cxx" | "hpp" | "h" => Some(Language::Cpp),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Observable side-effect category a function may exhibit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    /// Console or file output anywhere in the module.
    Io,
}

/// Ownership/lifetime discipline for one resource dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceClass {
    /// Move/borrow semantics, values consumed at most once.
    Affine,
    /// Capability-style ownership, access mediated by handles.
    Capability,
}

/// Language-specific structural hints carried in the ABI descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapabilityFlag {
    Borrow,
    Mut,
    Immut,
}
