// Criterion benchmarks for vchain-en.
//
// Chains come from the golden label file, so the benchmarks cover the same
// mix of shortcut, accepted and rejected chains as the golden tests.
//
// Run:
//   cargo bench -p vchain-en

use criterion::{Criterion, criterion_group, criterion_main};
use vchain_core::{Sentence, Token, VerbChain};
use vchain_en::symbolizer::symbolize;
use vchain_en::tables::{forgiving_analyzer, generator, strict_analyzer};
use vchain_en::{AnalyzerKind, VChainLabeler};

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

fn load_chains() -> Vec<VerbChain> {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden/labels.json");
    let contents = std::fs::read_to_string(&path).expect("failed to read labels.json");
    let golden: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(&contents).expect("failed to parse labels.json");
    golden
        .keys()
        .map(|tagged| {
            let tokens = tagged
                .split_whitespace()
                .map(|t| t.parse::<Token>().expect("bad token"))
                .collect();
            VerbChain::new(tokens)
        })
        .collect()
}

const SENTENCE: &str = "The/the/DT reports/report/NNS had/have/VBD been/be/VBN \
    circulating/circulate/VBG for/for/IN weeks/week/NNS ,/,/, but/but/CC nobody/nobody/NN \
    has/have/VBZ really/really/RB read/read/VBN them/they/PRP and/and/CC nobody/nobody/NN \
    wants/want/VBZ to/to/TO start/start/VB ././.";

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Build all three tables from scratch.
fn bench_build_tables(c: &mut Criterion) {
    c.bench_function("build_tables", |b| {
        b.iter(|| {
            std::hint::black_box(strict_analyzer());
            std::hint::black_box(forgiving_analyzer());
            std::hint::black_box(generator());
        });
    });
}

fn bench_symbolize(c: &mut Criterion) {
    let chains = load_chains();
    c.bench_function("symbolize_golden_chains", |b| {
        b.iter(|| {
            for chain in &chains {
                std::hint::black_box(symbolize(chain));
            }
        });
    });
}

fn bench_labels(c: &mut Criterion) {
    let labeler = VChainLabeler::new();
    let chains = load_chains();
    c.bench_function("labels_golden_chains", |b| {
        b.iter(|| {
            for chain in &chains {
                std::hint::black_box(labeler.labels(chain));
            }
        });
    });
    c.bench_function("forgiving_aspect_golden_chains", |b| {
        b.iter(|| {
            for chain in &chains {
                std::hint::black_box(labeler.aspect_with(chain, AnalyzerKind::Forgiving));
            }
        });
    });
}

fn bench_sentence(c: &mut Criterion) {
    let labeler = VChainLabeler::new();
    let sentence = Sentence::from_tagged(SENTENCE).expect("bad benchmark sentence");
    c.bench_function("sentence_labels", |b| {
        b.iter(|| std::hint::black_box(labeler.sentence_labels(&sentence)));
    });
}

fn bench_generate(c: &mut Criterion) {
    let labeler = VChainLabeler::new();
    let properties = ["3RD", "", "PERFECT PROGRESSIVE"];
    c.bench_function("regenerate_perfect_progressive", |b| {
        b.iter(|| std::hint::black_box(labeler.regenerate(&properties)));
    });
}

criterion_group!(
    benches,
    bench_build_tables,
    bench_symbolize,
    bench_labels,
    bench_sentence,
    bench_generate,
);
criterion_main!(benches);
