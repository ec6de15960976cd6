//! Line-oriented `fn` declaration matcher.

use regex::Regex;
use std::collections::BTreeMap;
use trisynk_core::Frontend;
use trisynk_ir::{
    AbiDescriptor, CapabilityFlag, Effect, ExtractionError, FunctionRecord, IrDocument, Language,
    MEMORY_DIMENSION, Module, ResourceClass,
};

/// Marker API: its presence anywhere in the module tags every extracted
/// function with the io effect. Whole-module granularity is the contract,
/// not per-function precision.
const IO_MARKER: &str = "print";

/// Ownership-mutation marker, matched as a raw substring of the whole
/// module. Known imprecision: identifiers that merely contain these letters
/// also trigger the flag.
const MUTATION_MARKER: &str = "mut";

pub struct RustFrontend {
    fn_decl: Regex,
}

impl Default for RustFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl RustFrontend {
    pub fn new() -> Self {
        Self {
            fn_decl: Regex::new(r"^\s*fn\s+([A-Za-z0-9_]+)").expect("valid regex"),
        }
    }

    fn parse_functions(&self, text: &str) -> Vec<String> {
        let mut names = Vec::new();
        for line in text.lines() {
            if line.trim_start().starts_with("//") {
                continue;
            }
            // at most one declaration per line; never emit a line twice
            if let Some(captures) = self.fn_decl.captures(line) {
                names.push(captures[1].to_string());
            }
        }
        names
    }
}

impl Frontend for RustFrontend {
    fn language(&self) -> Language {
        Language::Rust
    }

    fn extract(&self, module: &Module) -> Result<IrDocument, ExtractionError> {
        let text = module.text()?;

        let effects = if text.contains(IO_MARKER) {
            vec![Effect::Io]
        } else {
            vec![]
        };
        let ownership = if text.contains(MUTATION_MARKER) {
            CapabilityFlag::Mut
        } else {
            CapabilityFlag::Immut
        };

        let functions = self
            .parse_functions(text)
            .into_iter()
            .map(|name| {
                FunctionRecord::new(
                    name,
                    effects.clone(),
                    BTreeMap::from([(MEMORY_DIMENSION.to_string(), ResourceClass::Affine)]),
                )
            })
            .collect();

        let abi = AbiDescriptor::generate(module)
            .with_capabilities(vec![CapabilityFlag::Borrow, ownership]);
        Ok(IrDocument::new(module, functions, abi))
    }
}
