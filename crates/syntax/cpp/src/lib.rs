//! C++ source frontend.
//!
//! Shallow lexical extraction of function declarations into IR documents,
//! matching the language's qualifier vocabulary (template/inline/constexpr
//! prefixes). Not a grammar; unusual formatting may be missed.

mod extractor;

pub use extractor::CppFrontend;
