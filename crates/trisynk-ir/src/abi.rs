//! ABI descriptor generation.

use crate::document::Module;
use crate::taxonomy::CapabilityFlag;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// The single calling convention every frontend targets. Identical across
/// languages; a mismatch means a broken frontend.
pub const CALLING_CONVENTION: &str = "trisynk_fastcall";

/// Deterministic content fingerprint of a module, used to detect source
/// drift. Repeatability matters here, not cryptographic strength; the
/// digest is truncated to 32 bits.
pub fn layout_hash(bytes: &[u8]) -> u32 {
    let digest = Sha256::digest(bytes);
    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}

/// Cross-language calling-convention claim plus a content fingerprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbiDescriptor {
    pub calling_convention: String,
    pub layout_hash: u32,
    /// Language-specific structural hints. Additive metadata only; never
    /// alters the calling convention.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Vec<CapabilityFlag>>,
}

impl AbiDescriptor {
    /// Generates the descriptor for a module with no extra capability hints.
    pub fn generate(module: &Module) -> Self {
        Self {
            calling_convention: CALLING_CONVENTION.to_string(),
            layout_hash: layout_hash(module.bytes()),
            capabilities: None,
        }
    }

    pub fn with_capabilities(mut self, capabilities: Vec<CapabilityFlag>) -> Self {
        self.capabilities = Some(capabilities);
        self
    }
}
