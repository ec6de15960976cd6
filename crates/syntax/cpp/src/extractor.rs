//! Line-oriented C++ declaration matcher.

use regex::Regex;
use std::collections::BTreeMap;
use trisynk_core::Frontend;
use trisynk_ir::{
    AbiDescriptor, Effect, ExtractionError, FunctionRecord, IrDocument, Language,
    MEMORY_DIMENSION, Module, ResourceClass,
};

/// Marker API: a console write anywhere in the module tags every extracted
/// function with the io effect.
const IO_MARKER: &str = "std::cout";

pub struct CppFrontend {
    fn_decl: Regex,
}

impl Default for CppFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl CppFrontend {
    pub fn new() -> Self {
        // return type (possibly qualified/templated), then the identifier,
        // then the opening parenthesis
        Self {
            fn_decl: Regex::new(
                r"^(?:template<.*>)?\s*(?:inline\s+)?(?:constexpr\s+)?([A-Za-z0-9_:<>]+)\s+([A-Za-z0-9_]+)\s*\(",
            )
            .expect("valid regex"),
        }
    }

    fn parse_functions(&self, text: &str) -> Vec<String> {
        let mut names = Vec::new();
        for line in text.lines() {
            let line = line.trim();
            if line.starts_with("//") {
                continue;
            }
            // at most one declaration per line; never emit a line twice
            if let Some(captures) = self.fn_decl.captures(line) {
                names.push(captures[2].to_string());
            }
        }
        names
    }
}

impl Frontend for CppFrontend {
    fn language(&self) -> Language {
        Language::Cpp
    }

    fn extract(&self, module: &Module) -> Result<IrDocument, ExtractionError> {
        let text = module.text()?;

        let effects = if text.contains(IO_MARKER) {
            vec![Effect::Io]
        } else {
            vec![]
        };

        let functions = self
            .parse_functions(text)
            .into_iter()
            .map(|name| {
                FunctionRecord::new(
                    name,
                    effects.clone(),
                    BTreeMap::from([(MEMORY_DIMENSION.to_string(), ResourceClass::Capability)]),
                )
            })
            .collect();

        Ok(IrDocument::new(
            module,
            functions,
            AbiDescriptor::generate(module),
        ))
    }
}
