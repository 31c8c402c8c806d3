//! English verb-chain labelling.
//!
//! A verb chain ("has been working", "to go", "could have gone") is turned
//! into a symbol sequence of auxiliary words and POS tags, run through one
//! of the hand-written transducers in [`tables`], and the transducer output
//! is folded into two labels: tense/aspect (`PR_PROG`, `PA_PER`, ...) and
//! person/number (`3RD`, `1ST_PL`, ...).
//!
//! - [`tables`] -- Strict analyzer, forgiving analyzer and generator tables
//! - [`symbolizer`] -- Verb chain to transducer input
//! - [`labels`] -- Transducer output to labels
//! - [`handle`] -- [`VChainLabeler`], owning all three tables

pub mod handle;
pub mod labels;
pub mod symbolizer;
pub mod tables;

pub use handle::{LabelerError, LabelerOptions, VChainLabeler};
pub use labels::VChainLabels;
pub use tables::{AnalyzerKind, GrammaticalProperty};
