// Hand-written transition tables for English verb chains.
//
// Two analyzers read a symbolized chain (auxiliary surface words and POS
// tags) and emit tense/aspect and person/number labels. The generator runs
// the other way: a sequence of grammatical properties in, auxiliary words
// and tag placeholders out.
//
// The analyzers share one alphabet layout; the forgiving analyzer appends
// `do did does` after the strict columns. State numbers are shared as far
// as the strict analyzer goes.

mod forgiving;
mod generator;
mod strict;

use std::fmt;
use std::str::FromStr;

use vchain_core::labels::{FIRST_PERSON, PLURAL, SINGULAR, THIRD_PERSON};

pub use forgiving::forgiving_analyzer;
pub use generator::generator;
pub use strict::strict_analyzer;

// ---------------------------------------------------------------------------
// Analyzer alphabet
// ---------------------------------------------------------------------------

/// Analyzer input symbols in column order.
pub const ANALYZER_SYMBOLS: [&str; 19] = [
    "VB", "VBD", "VBG", "VBN", "VBP", "VBZ", "RB", "had", "have", "has", "is", "am", "are", "was",
    "were", "been", "do", "did", "does",
];

/// The strict analyzer reads the first 16 analyzer symbols.
pub const STRICT_SYMBOL_COUNT: usize = 16;

/// Analyzer alphabet columns.
pub mod column {
    pub const VB: usize = 0;
    pub const VBD: usize = 1;
    pub const VBG: usize = 2;
    pub const VBN: usize = 3;
    pub const VBP: usize = 4;
    pub const VBZ: usize = 5;
    pub const RB: usize = 6;
    pub const HAD: usize = 7;
    pub const HAVE: usize = 8;
    pub const HAS: usize = 9;
    pub const IS: usize = 10;
    pub const AM: usize = 11;
    pub const ARE: usize = 12;
    pub const WAS: usize = 13;
    pub const WERE: usize = 14;
    pub const BEEN: usize = 15;
    pub const DO: usize = 16;
    pub const DID: usize = 17;
    pub const DOES: usize = 18;

    /// Every verb POS tag column.
    pub const VERB_TAGS: [usize; 6] = [VB, VBD, VBG, VBN, VBP, VBZ];
}

/// Analyzer states. 0..=16 are shared; 17..=20 exist only in the forgiving
/// analyzer.
pub mod state {
    use vchain_fst::StateId;

    pub const DEAD: StateId = vchain_fst::DEAD_STATE;
    pub const START: StateId = vchain_fst::START_STATE;
    pub const SIMPLE: StateId = 2;
    pub const HAD: StateId = 3;
    pub const HAVE: StateId = 4;
    pub const HAS: StateId = 5;
    pub const AM: StateId = 6;
    pub const IS: StateId = 7;
    pub const ARE: StateId = 8;
    pub const PRESENT: StateId = 9;
    pub const WAS: StateId = 10;
    pub const WERE: StateId = 11;
    pub const PAST: StateId = 12;
    pub const PERFECT: StateId = 13;
    pub const BEEN: StateId = 14;
    pub const PERFECT_PROGRESSIVE: StateId = 15;
    pub const PROGRESSIVE: StateId = 16;
    pub const DO: StateId = 17;
    pub const DID: StateId = 18;
    pub const DOES: StateId = 19;
    pub const DO_SUPPORT: StateId = 20;
}

// ---------------------------------------------------------------------------
// Analyzer output labels
// ---------------------------------------------------------------------------

/// Tense/aspect labels. Person/number labels live in `vchain_core::labels`.
pub mod label {
    pub const SIMPLE: &str = "SIMPLE";
    pub const PAST: &str = "PA";
    pub const PRESENT: &str = "PR";
    pub const PERFECT: &str = "PER";
    pub const PERFECT_PROGRESSIVE: &str = "PERPROG";
    pub const PROGRESSIVE: &str = "PROG";
    /// Emitted after `do`/`did`/`does` followed by a verb.
    pub const DO_SUPPORT: &str = "DID";
}

// ---------------------------------------------------------------------------
// AnalyzerKind
// ---------------------------------------------------------------------------

/// Which analyzer table to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnalyzerKind {
    /// Accepts only well-formed chains.
    Strict,
    /// Accepts any verb tag where the strict analyzer wants a specific one,
    /// and knows about do-support.
    #[default]
    Forgiving,
}

impl AnalyzerKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Forgiving => "forgiving",
        }
    }
}

impl fmt::Display for AnalyzerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An analyzer name other than `strict` or `forgiving`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown analyzer {0:?} (expected \"strict\" or \"forgiving\")")]
pub struct UnknownAnalyzer(pub String);

impl FromStr for AnalyzerKind {
    type Err = UnknownAnalyzer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "forgiving" => Ok(Self::Forgiving),
            _ => Err(UnknownAnalyzer(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// GrammaticalProperty
// ---------------------------------------------------------------------------

/// One generator input symbol.
///
/// The generator spells properties out in full (`PRESENT`, `PERFECT
/// PROGRESSIVE`); the analyzers emit the short labels (`PR`, `PERPROG`).
/// `Unspecified` is the empty symbol, used where a slot (person, tense) is
/// left open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammaticalProperty {
    FirstPerson,
    ThirdPerson,
    Singular,
    Plural,
    Past,
    Present,
    Perfect,
    PerfectProgressive,
    Progressive,
    Unspecified,
}

impl GrammaticalProperty {
    /// All properties in generator column order.
    pub const ALL: [Self; 10] = [
        Self::FirstPerson,
        Self::ThirdPerson,
        Self::Singular,
        Self::Plural,
        Self::Past,
        Self::Present,
        Self::Perfect,
        Self::PerfectProgressive,
        Self::Progressive,
        Self::Unspecified,
    ];

    /// Generator column of this property.
    pub fn column(self) -> usize {
        self as usize
    }

    /// The generator's name for this property.
    pub fn generator_symbol(self) -> &'static str {
        match self {
            Self::FirstPerson => "1ST",
            Self::ThirdPerson => "3RD",
            Self::Singular => "SINGULAR",
            Self::Plural => "PLURAL",
            Self::Past => "PAST",
            Self::Present => "PRESENT",
            Self::Perfect => "PERFECT",
            Self::PerfectProgressive => "PERFECT PROGRESSIVE",
            Self::Progressive => "PROGRESSIVE",
            Self::Unspecified => "",
        }
    }

    /// The label an analyzer emits for this property, if it has one.
    pub fn analyzer_label(self) -> Option<&'static str> {
        match self {
            Self::FirstPerson => Some(FIRST_PERSON),
            Self::ThirdPerson => Some(THIRD_PERSON),
            Self::Singular => Some(SINGULAR),
            Self::Plural => Some(PLURAL),
            Self::Past => Some(label::PAST),
            Self::Present => Some(label::PRESENT),
            Self::Perfect => Some(label::PERFECT),
            Self::PerfectProgressive => Some(label::PERFECT_PROGRESSIVE),
            Self::Progressive => Some(label::PROGRESSIVE),
            Self::Unspecified => None,
        }
    }

    /// Look a property up by its generator name or its analyzer label.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| {
            p.generator_symbol() == symbol || p.analyzer_label() == Some(symbol)
        })
    }
}

impl fmt::Display for GrammaticalProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.generator_symbol())
    }
}
