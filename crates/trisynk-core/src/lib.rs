//! Frontend capability and batch pipeline driver for trisynk.

pub mod frontend;
pub mod pipeline;

pub use frontend::{Frontend, FrontendRegistry};
pub use pipeline::{BatchOptions, BatchReport, FileFailure, FileOutcome, run_batch};
