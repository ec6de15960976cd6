//! The per-language extraction capability.

use std::path::Path;
use trisynk_ir::{ExtractionError, IrDocument, Language, Module};

/// Turns a module's raw source into an IR document.
///
/// Implementations must be referentially transparent: identical module
/// content always yields an identical document. Zero matched declarations
/// is not an error here; the validation harness rejects the empty document
/// later. New languages plug in by implementing this trait and registering,
/// never by touching the pipeline driver.
pub trait Frontend: Send + Sync {
    fn language(&self) -> Language;

    fn extract(&self, module: &Module) -> Result<IrDocument, ExtractionError>;
}

/// Registered frontends, dispatched by language tag or file extension.
#[derive(Default)]
pub struct FrontendRegistry {
    frontends: Vec<Box<dyn Frontend>>,
}

impl FrontendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, frontend: Box<dyn Frontend>) -> Self {
        self.frontends.push(frontend);
        self
    }

    pub fn for_language(&self, language: Language) -> Option<&dyn Frontend> {
        self.frontends
            .iter()
            .find(|frontend| frontend.language() == language)
            .map(|frontend| frontend.as_ref())
    }

    pub fn for_path(&self, path: &Path) -> Option<&dyn Frontend> {
        let ext = path.extension()?.to_str()?;
        self.for_language(Language::from_extension(ext)?)
    }
}
