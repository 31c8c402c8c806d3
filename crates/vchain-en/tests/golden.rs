//! Golden tests: label whole verb chains and compare against JSON files.
//!
//! Golden files live in tests/golden/. Chains are written as
//! whitespace-separated `word/lemma/TAG` tokens.
//!
//! Run: cargo test -p vchain-en --test golden

use std::path::PathBuf;

use serde_json::Value;
use vchain_core::{Token, VerbChain};
use vchain_en::{AnalyzerKind, VChainLabeler, VChainLabels};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_golden(filename: &str) -> Value {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/golden")
        .join(filename);
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

fn parse_chain(tagged: &str) -> VerbChain {
    let tokens = tagged
        .split_whitespace()
        .map(|t| {
            t.parse::<Token>()
                .unwrap_or_else(|e| panic!("bad token in {tagged:?}: {e}"))
        })
        .collect();
    VerbChain::new(tokens)
}

fn labels_from_json(value: &Value) -> VChainLabels {
    let pair = value.as_array().expect("labels should be a two-element array");
    assert_eq!(pair.len(), 2, "labels should be a two-element array: {value}");
    VChainLabels::new(
        pair[0].as_str().expect("aspect should be a string"),
        pair[1].as_str().expect("person/number should be a string"),
    )
}

fn strings(value: &Value) -> Vec<&str> {
    value
        .as_array()
        .expect("expected an array")
        .iter()
        .map(|v| v.as_str().expect("expected a string"))
        .collect()
}

/// Panic with every mismatch at once rather than stopping at the first.
fn report(name: &str, total: usize, mismatches: &[String]) {
    if !mismatches.is_empty() {
        panic!(
            "{name}: {} of {total} cases differ:\n{}",
            mismatches.len(),
            mismatches.join("\n")
        );
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[test]
fn golden_labels() {
    let labeler = VChainLabeler::new();
    let golden = load_golden("labels.json");
    let cases = golden.as_object().expect("labels.json should be an object");

    let mut mismatches = Vec::new();
    for (tagged, expected) in cases {
        let actual = labeler.labels(&parse_chain(tagged));
        let expected = labels_from_json(expected);
        if actual != expected {
            mismatches.push(format!("  [{tagged}] expected {expected:?}, got {actual:?}"));
        }
    }
    report("labels.json", cases.len(), &mismatches);
}

#[test]
fn golden_aspects() {
    let labeler = VChainLabeler::new();
    let golden = load_golden("aspects.json");
    let cases = golden.as_object().expect("aspects.json should be an object");

    let mut mismatches = Vec::new();
    for (tagged, expected) in cases {
        let chain = parse_chain(tagged);
        for kind in [AnalyzerKind::Strict, AnalyzerKind::Forgiving] {
            let want = expected[kind.name()]
                .as_str()
                .unwrap_or_else(|| panic!("[{tagged}] missing {kind} aspect"));
            let got = labeler.aspect_with(&chain, kind);
            if got != want {
                mismatches.push(format!("  [{tagged}] {kind}: expected {want}, got {got}"));
            }
        }
    }
    report("aspects.json", cases.len(), &mismatches);
}

#[test]
fn golden_generator() {
    let labeler = VChainLabeler::new();
    let golden = load_golden("generator.json");
    let cases = golden.as_array().expect("generator.json should be an array");

    let mut mismatches = Vec::new();
    for case in cases {
        let properties = strings(&case["properties"]);
        let phrase = case["phrase"].as_str().expect("phrase should be a string");

        let got = labeler.generate_phrase(&properties);
        if got != phrase {
            mismatches.push(format!("  {properties:?}: expected phrase {phrase:?}, got {got:?}"));
        }

        let regenerated = labeler.regenerate(&properties).ok();
        let expected = match &case["labels"] {
            Value::Null => None,
            v => Some(labels_from_json(v)),
        };
        if regenerated != expected {
            mismatches.push(format!(
                "  {properties:?}: expected labels {expected:?}, got {regenerated:?}"
            ));
        }
    }
    report("generator.json", cases.len(), &mismatches);
}

#[test]
fn every_golden_aspect_agrees_with_labels() {
    // The strict aspect of a chain is the aspect half of its label pair
    // without the SING marker, which only the pair keeps.
    let labeler = VChainLabeler::new();
    let golden = load_golden("labels.json");
    for tagged in golden.as_object().expect("labels.json should be an object").keys() {
        let chain = parse_chain(tagged);
        let pair_aspect = labeler.labels(&chain).aspect;
        let without_singular: Vec<&str> =
            pair_aspect.split('_').filter(|l| *l != "SING").collect();
        assert_eq!(
            labeler.aspect_with(&chain, AnalyzerKind::Strict),
            without_singular.join("_"),
            "{tagged}"
        );
    }
}

#[cfg(feature = "serde")]
#[test]
fn labels_serialize_as_object() {
    let labels = VChainLabels::new("PR_PROG", "3RD");
    let json = serde_json::to_value(&labels).unwrap();
    assert_eq!(json, serde_json::json!({ "aspect": "PR_PROG", "person_number": "3RD" }));
}
