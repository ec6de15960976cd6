//! Batch pipeline driver: extract, validate, emit, per input file.
//!
//! Extraction is a pure function of each file's own content, so files are
//! processed in parallel with no shared mutable state. The schema is loaded
//! once by the caller and shared by immutable reference. One file's failure
//! never cancels sibling work; the batch report carries every outcome.

use crate::frontend::FrontendRegistry;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use trisynk_ir::{
    ExtractionError, IrDocument, Module, SchemaDefinition, Violation, validate_ir,
};

/// Why one file failed. Caught at the driver boundary and recorded per
/// file; never aborts the batch.
#[derive(Debug, Error)]
pub enum FileFailure {
    #[error("input error: {0}")]
    Input(#[from] std::io::Error),

    #[error("no frontend registered for '{0}'")]
    UnknownLanguage(String),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("schema violations: {}", join_violations(.0))]
    Validation(Vec<Violation>),

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Outcome for one input file.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<IrDocument, FileFailure>,
}

/// Every per-file outcome of one batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn processed(&self) -> usize {
        self.outcomes.len()
    }

    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.result.is_err())
            .count()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = (&Path, &FileFailure)> {
        self.outcomes.iter().filter_map(|outcome| {
            outcome
                .result
                .as_ref()
                .err()
                .map(|failure| (outcome.path.as_path(), failure))
        })
    }
}

#[derive(Debug, Default)]
pub struct BatchOptions {
    /// Directory for emitted IR documents. When absent, each document is
    /// written next to its input with a `.json` extension.
    pub out_dir: Option<PathBuf>,
}

/// Run the full batch: per file, dispatch to the matching frontend,
/// extract, validate, and emit the IR document as indented JSON.
pub fn run_batch(
    files: &[PathBuf],
    registry: &FrontendRegistry,
    schema: &SchemaDefinition,
    options: &BatchOptions,
) -> BatchReport {
    let outcomes = files
        .par_iter()
        .map(|path| FileOutcome {
            path: path.clone(),
            result: process_file(path, registry, schema, options),
        })
        .collect();

    let report = BatchReport { outcomes };
    info!(
        processed = report.processed(),
        failed = report.failed(),
        "batch complete"
    );
    report
}

fn process_file(
    path: &Path,
    registry: &FrontendRegistry,
    schema: &SchemaDefinition,
    options: &BatchOptions,
) -> Result<IrDocument, FileFailure> {
    let frontend = registry
        .for_path(path)
        .ok_or_else(|| FileFailure::UnknownLanguage(path.display().to_string()))?;

    let module = Module::read(path, frontend.language())?;
    let doc = frontend.extract(&module)?;

    let report = validate_ir(&doc, schema)?;
    if !report.passed() {
        return Err(FileFailure::Validation(report.violations));
    }

    let out_path = output_path(path, options);
    std::fs::write(&out_path, serde_json::to_string_pretty(&doc)?)?;
    debug!(
        input = %path.display(),
        output = %out_path.display(),
        functions = doc.functions.len(),
        "emitted IR document"
    );
    Ok(doc)
}

fn output_path(input: &Path, options: &BatchOptions) -> PathBuf {
    match &options.out_dir {
        Some(dir) => {
            let stem = input.file_stem().unwrap_or_default().to_string_lossy();
            dir.join(format!("{stem}.json"))
        }
        None => input.with_extension("json"),
    }
}
