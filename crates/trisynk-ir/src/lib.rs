//! IR document model, schema, and validation for trisynk frontends.

pub mod abi;
pub mod document;
pub mod schema;
pub mod taxonomy;
pub mod validation;

pub use abi::{AbiDescriptor, CALLING_CONVENTION, layout_hash};
pub use document::{ExtractionError, FunctionRecord, IrDocument, Module};
pub use schema::{SchemaDefinition, SchemaError};
pub use taxonomy::{CapabilityFlag, Effect, Language, MEMORY_DIMENSION, ResourceClass};
pub use validation::{ValidationReport, Violation, validate_document, validate_ir};
