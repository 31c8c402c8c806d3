// VChainLabeler: top-level integration point for verb-chain labelling.
//
// Owns the three transition tables and the options that choose between the
// analyzers. Tables are built once at construction and only read afterwards,
// so a labeler can be shared across threads behind a plain reference.
//
// Design notes:
// - Aspect labels default to the forgiving analyzer. Label pairs always use
//   the strict one.
// - Every rejection is reported as the ERROR label. Callers that need the
//   reason use `generate` or run the tables directly.

use vchain_core::labels::ERROR_LABEL;
use vchain_core::{Sentence, VerbChain};
use vchain_fst::{Configuration, FstError};

use crate::labels::{self, VChainLabels};
use crate::tables::{
    AnalyzerKind, GrammaticalProperty, UnknownAnalyzer, forgiving_analyzer, generator,
    strict_analyzer,
};

/// Error type for labeler operations that report why they failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LabelerError {
    /// A transducer rejected its input.
    #[error("transducer rejected input: {0}")]
    Fst(#[from] FstError),

    /// A built-in table failed validation.
    #[error("{table} table is malformed: {source}")]
    InvalidTable {
        table: &'static str,
        #[source]
        source: FstError,
    },

    /// An analyzer name that is neither `strict` nor `forgiving`.
    #[error(transparent)]
    UnknownAnalyzer(#[from] UnknownAnalyzer),
}

/// Labeler options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LabelerOptions {
    /// Analyzer used by [`VChainLabeler::aspect`].
    pub aspect_analyzer: AnalyzerKind,
}

/// Owns the analyzer and generator tables.
#[derive(Debug, Clone)]
pub struct VChainLabeler {
    strict: Configuration,
    forgiving: Configuration,
    generator: Configuration,
    options: LabelerOptions,
}

impl Default for VChainLabeler {
    fn default() -> Self {
        Self::new()
    }
}

impl VChainLabeler {
    /// Create a labeler with default options.
    pub fn new() -> Self {
        Self::with_options(LabelerOptions::default())
    }

    pub fn with_options(options: LabelerOptions) -> Self {
        Self {
            strict: strict_analyzer(),
            forgiving: forgiving_analyzer(),
            generator: generator(),
            options,
        }
    }

    pub fn options(&self) -> LabelerOptions {
        self.options
    }

    pub fn set_aspect_analyzer(&mut self, kind: AnalyzerKind) {
        self.options.aspect_analyzer = kind;
    }

    /// Check all three tables for structural defects.
    pub fn validate(&self) -> Result<(), LabelerError> {
        let tables = [
            ("strict analyzer", &self.strict),
            ("forgiving analyzer", &self.forgiving),
            ("generator", &self.generator),
        ];
        for (table, config) in tables {
            config
                .validate()
                .map_err(|source| LabelerError::InvalidTable { table, source })?;
        }
        Ok(())
    }

    pub fn analyzer(&self, kind: AnalyzerKind) -> &Configuration {
        match kind {
            AnalyzerKind::Strict => &self.strict,
            AnalyzerKind::Forgiving => &self.forgiving,
        }
    }

    pub fn generator(&self) -> &Configuration {
        &self.generator
    }

    // -- Analysis --

    /// Aspect label of a chain, using the configured aspect analyzer.
    pub fn aspect(&self, chain: &VerbChain) -> String {
        self.aspect_with(chain, self.options.aspect_analyzer)
    }

    /// Aspect label of a chain under a specific analyzer.
    pub fn aspect_with(&self, chain: &VerbChain, kind: AnalyzerKind) -> String {
        labels::derive_aspect(chain, self.analyzer(kind))
    }

    /// Aspect and person/number labels of a chain (strict analyzer).
    pub fn labels(&self, chain: &VerbChain) -> VChainLabels {
        labels::derive_labels(chain, &self.strict)
    }

    /// Labels for analyzer symbols given directly (strict analyzer).
    pub fn labels_for_symbols<S: AsRef<str>>(&self, symbols: &[S]) -> VChainLabels {
        labels::labels_for_symbols(symbols, &self.strict)
    }

    /// Every verb chain of a sentence with its labels.
    pub fn sentence_labels(&self, sentence: &Sentence) -> Vec<(VerbChain, VChainLabels)> {
        sentence
            .verb_chains()
            .into_iter()
            .map(|chain| {
                let labels = self.labels(&chain);
                (chain, labels)
            })
            .collect()
    }

    // -- Generation --

    /// Auxiliary words and tag placeholders for a property sequence.
    ///
    /// Properties are generator names (`3RD`, `PRESENT`, `PERFECT
    /// PROGRESSIVE`, `""`).
    pub fn generate<S: AsRef<str>>(&self, properties: &[S]) -> Result<Vec<&str>, LabelerError> {
        Ok(self.generator.run(properties)?)
    }

    /// Like [`generate`](Self::generate), over typed properties.
    pub fn generate_properties(
        &self,
        properties: &[GrammaticalProperty],
    ) -> Result<Vec<&str>, LabelerError> {
        let symbols: Vec<&str> = properties.iter().map(|p| p.generator_symbol()).collect();
        self.generate(&symbols)
    }

    /// Generator output joined with single spaces, `ERROR` on failure.
    pub fn generate_phrase<S: AsRef<str>>(&self, properties: &[S]) -> String {
        match self.generate(properties) {
            Ok(words) => words.join(" "),
            Err(err) => {
                log::debug!("generation failed: {err}");
                ERROR_LABEL.to_string()
            }
        }
    }

    /// Generate a phrase skeleton and analyze it again with the strict
    /// analyzer.
    ///
    /// Multi-word outputs (`been VBG`) are split into separate symbols.
    pub fn regenerate<S: AsRef<str>>(
        &self,
        properties: &[S],
    ) -> Result<VChainLabels, LabelerError> {
        let symbols: Vec<&str> = self
            .generate(properties)?
            .into_iter()
            .flat_map(str::split_whitespace)
            .collect();
        Ok(self.labels_for_symbols(&symbols))
    }
}
