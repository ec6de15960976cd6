//! Tests for the Rust frontend.

use super::*;
use trisynk_core::Frontend;
use trisynk_ir::{CapabilityFlag, Effect, IrDocument, Language, Module, ResourceClass};

fn extract(source: &str) -> IrDocument {
    let module = Module::from_source("sample.rs", Language::Rust, source);
    RustFrontend::new()
        .extract(&module)
        .expect("extract failed")
}

fn names(doc: &IrDocument) -> Vec<&str> {
    doc.functions.iter().map(|f| f.name.as_str()).collect()
}

const SAMPLE: &str = r#"
fn increment(mut value: i64) -> i64 {
    value += 1;
    value
}

fn consume_slice(slice: &[u8]) -> usize {
    slice.len()
}

fn main() {
    let value = 41i64;
    let _ = increment(value);
}
"#;

#[test]
fn test_declarations_extracted() {
    let doc = extract(SAMPLE);
    assert_eq!(names(&doc), ["increment", "consume_slice", "main"]);
    assert_eq!(doc.language, Language::Rust);
}

#[test]
fn test_comment_lines_skipped() {
    let doc = extract("// fn hidden() {}\nfn visible() {}\n");
    assert_eq!(names(&doc), ["visible"]);
}

#[test]
fn test_indented_declarations_matched() {
    let doc = extract("impl Widget {\n    fn area(&self) -> u32 { 0 }\n}\n");
    assert_eq!(names(&doc), ["area"]);
}

#[test]
fn test_determinism() {
    let first = extract(SAMPLE);
    let second = extract(SAMPLE);
    assert_eq!(first, second);
    assert_eq!(first.abi.layout_hash, second.abi.layout_hash);
}

#[test]
fn test_effect_propagates_to_every_function() {
    let doc = extract("fn a() { println!(\"hi\"); }\nfn b() {}\n");
    for record in &doc.functions {
        assert_eq!(record.effects, vec![Effect::Io]);
    }
}

#[test]
fn test_no_marker_means_no_effects() {
    let doc = extract("fn silent() {}\n");
    assert!(doc.functions[0].effects.is_empty());
}

#[test]
fn test_memory_is_affine() {
    let doc = extract("fn a() {}\n");
    assert_eq!(
        doc.functions[0].resources.get("memory"),
        Some(&ResourceClass::Affine)
    );
}

#[test]
fn test_mutation_marker_sets_mut_flag() {
    let doc = extract("fn bump(mut n: u32) -> u32 { n + 1 }\n");
    assert_eq!(
        doc.abi.capabilities,
        Some(vec![CapabilityFlag::Borrow, CapabilityFlag::Mut])
    );
}

#[test]
fn test_absent_marker_reports_immut() {
    let doc = extract("fn read(n: u32) -> u32 { n }\n");
    assert_eq!(
        doc.abi.capabilities,
        Some(vec![CapabilityFlag::Borrow, CapabilityFlag::Immut])
    );
}

#[test]
fn test_mutation_marker_is_a_raw_substring() {
    // substring scan, so an identifier containing the letters triggers it
    let doc = extract("fn permute(n: u32) -> u32 { n }\n");
    assert_eq!(
        doc.abi.capabilities,
        Some(vec![CapabilityFlag::Borrow, CapabilityFlag::Mut])
    );
}

#[test]
fn test_zero_matches_yields_empty_document() {
    let doc = extract("const X: u32 = 1;\n");
    assert!(doc.functions.is_empty());
}

#[test]
fn test_non_utf8_is_unreadable() {
    let module = Module::new("bad.rs", Language::Rust, vec![0xff, 0xfe]);
    assert!(RustFrontend::new().extract(&module).is_err());
}
