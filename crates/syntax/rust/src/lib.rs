//! Rust source frontend.
//!
//! Shallow lexical extraction of `fn` declarations into IR documents.
//! Deliberately not a grammar: unusually formatted declarations may be
//! missed, and effect/mutation inference is whole-module.

mod extractor;

pub use extractor::RustFrontend;

#[cfg(test)]
mod tests;
