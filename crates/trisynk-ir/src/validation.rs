//! IR document validation.
//!
//! The harness judges documents in their wire form (`serde_json::Value`) so
//! that output from any frontend, in-process or external, is held to the
//! same contract. All five checks run on every document; one failing check
//! never short-circuits the others.

use crate::abi::CALLING_CONVENTION;
use crate::document::IrDocument;
use crate::schema::SchemaDefinition;
use serde_json::Value;
use thiserror::Error;

/// A single violated check.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    #[error("missing required key: {0}")]
    MissingKey(String),

    #[error("language tag must be a string, got {0}")]
    MalformedLanguage(String),

    #[error("language '{0}' is not in the schema's closed set")]
    UnknownLanguage(String),

    #[error("functions must be a sequence, got {0}")]
    MalformedFunctions(String),

    #[error("functions must be non-empty")]
    EmptyFunctions,

    #[error("function {index}: missing field '{field}'")]
    MissingFunctionField { index: usize, field: String },

    #[error("function {index}: name must be a non-empty string")]
    EmptyName { index: usize },

    #[error("function {index}: effects must be a sequence")]
    MalformedEffects { index: usize },

    #[error("function {index}: resources must be a non-empty mapping")]
    EmptyResources { index: usize },

    #[error("abi.calling_convention is '{got}', expected '{CALLING_CONVENTION}'")]
    CallingConventionMismatch { got: String },
}

/// Pass/fail outcome for one document, with every violated check.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Validate a wire-form IR document against the schema.
pub fn validate_document(doc: &Value, schema: &SchemaDefinition) -> ValidationReport {
    let mut violations = Vec::new();

    // Check 1: required top-level keys.
    for key in &schema.required {
        if doc.get(key).is_none() {
            violations.push(Violation::MissingKey(key.clone()));
        }
    }

    // Check 2: language tag in the closed set.
    if let Some(language) = doc.get("language") {
        match language.as_str() {
            Some(tag) if schema.allows_language(tag) => {}
            Some(tag) => violations.push(Violation::UnknownLanguage(tag.to_string())),
            None => violations.push(Violation::MalformedLanguage(language.to_string())),
        }
    }

    // Checks 3 and 4: functions shape and per-function fields.
    if let Some(functions) = doc.get("functions") {
        match functions.as_array() {
            Some(records) if records.is_empty() => violations.push(Violation::EmptyFunctions),
            Some(records) => {
                for (index, record) in records.iter().enumerate() {
                    check_function(index, record, schema, &mut violations);
                }
            }
            None => violations.push(Violation::MalformedFunctions(functions.to_string())),
        }
    }

    // Check 5: the cross-language calling convention.
    if let Some(abi) = doc.get("abi") {
        let got = abi.get("calling_convention").and_then(Value::as_str);
        if got != Some(CALLING_CONVENTION) {
            violations.push(Violation::CallingConventionMismatch {
                got: got.unwrap_or("<missing>").to_string(),
            });
        }
    }

    ValidationReport { violations }
}

fn check_function(
    index: usize,
    record: &Value,
    schema: &SchemaDefinition,
    violations: &mut Vec<Violation>,
) {
    for field in &schema.function_required {
        if record.get(field).is_none() {
            violations.push(Violation::MissingFunctionField {
                index,
                field: field.clone(),
            });
        }
    }

    if let Some(name) = record.get("name")
        && name.as_str().is_none_or(str::is_empty)
    {
        violations.push(Violation::EmptyName { index });
    }

    // effects may be empty, but must be a sequence
    if let Some(effects) = record.get("effects")
        && !effects.is_array()
    {
        violations.push(Violation::MalformedEffects { index });
    }

    if let Some(resources) = record.get("resources")
        && resources.as_object().is_none_or(|map| map.is_empty())
    {
        violations.push(Violation::EmptyResources { index });
    }
}

/// Serialize a typed document and validate its wire form.
pub fn validate_ir(
    doc: &IrDocument,
    schema: &SchemaDefinition,
) -> Result<ValidationReport, serde_json::Error> {
    let value = serde_json::to_value(doc)?;
    Ok(validate_document(&value, schema))
}
