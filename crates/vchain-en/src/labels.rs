// Label interpreter: folds analyzer output into an aspect label and a
// person/number label.

use std::fmt;

use vchain_core::labels::{
    ERROR_LABEL, FIRST_PERSON, INFINITIVE, LABEL_SEPARATOR, PAST_SIMPLE, PRESENT_SIMPLE,
    THIRD_PERSON, is_agreement_label, is_number_label, is_person_label, is_valid_label,
};
use vchain_core::{VerbChain, VerbForm};
use vchain_fst::Configuration;

use crate::symbolizer::symbolize;

/// Tense/aspect and person/number labels of one verb chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VChainLabels {
    /// Tense/aspect, e.g. `PR_PROG`, `PA_PER`, `INF`.
    pub aspect: String,

    /// Person then number, e.g. `3RD`, `PL`. Empty when the chain does not
    /// mark either.
    pub person_number: String,
}

impl VChainLabels {
    pub fn new(aspect: impl Into<String>, person_number: impl Into<String>) -> Self {
        Self {
            aspect: aspect.into(),
            person_number: person_number.into(),
        }
    }

    /// The pair reported for a chain the analyzer rejects.
    pub fn error() -> Self {
        Self::new(ERROR_LABEL, ERROR_LABEL)
    }

    pub fn is_error(&self) -> bool {
        self.aspect == ERROR_LABEL && self.person_number == ERROR_LABEL
    }

    /// True if both labels are usable.
    pub fn is_valid(&self) -> bool {
        is_valid_label(&self.aspect) && is_valid_label(&self.person_number)
    }
}

impl fmt::Display for VChainLabels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.aspect, self.person_number)
    }
}

// ---------------------------------------------------------------------------
// Chains that never reach an analyzer
// ---------------------------------------------------------------------------

/// Labels for chains decided without running an analyzer: `to`-infinitives
/// and chains with exactly one non-modal verb.
pub fn shortcut_labels(chain: &VerbChain) -> Option<VChainLabels> {
    if chain.is_infinitive() {
        return Some(VChainLabels::new(INFINITIVE, ERROR_LABEL));
    }
    let mut verbs = chain.non_modal_verbs();
    let (Some(only), None) = (verbs.next(), verbs.next()) else {
        return None;
    };
    let form = only.verb_form()?;
    let labels = if form.is_past() {
        VChainLabels::new(PAST_SIMPLE, ERROR_LABEL)
    } else if form == VerbForm::ThirdPresent {
        VChainLabels::new(PRESENT_SIMPLE, THIRD_PERSON)
    } else {
        VChainLabels::new(PRESENT_SIMPLE, FIRST_PERSON)
    };
    Some(labels)
}

// ---------------------------------------------------------------------------
// Analyzer output
// ---------------------------------------------------------------------------

/// Aspect label from analyzer output: agreement labels and skipped symbols
/// are dropped, the rest is joined with `_`.
pub fn aspect_from_outputs(outputs: &[&str]) -> String {
    if outputs.contains(&ERROR_LABEL) {
        return ERROR_LABEL.to_string();
    }
    outputs
        .iter()
        .copied()
        .filter(|label| !label.is_empty() && !is_agreement_label(label))
        .collect::<Vec<_>>()
        .join(LABEL_SEPARATOR)
}

/// Both labels from analyzer output.
///
/// Person labels come before number labels in `person_number`. Only `PL` is
/// a number label; `SING` stays in the aspect (`was VBG` gives `SING_PA_PROG`).
pub fn labels_from_outputs(outputs: &[&str]) -> VChainLabels {
    if outputs.contains(&ERROR_LABEL) {
        return VChainLabels::error();
    }
    let mut aspect = Vec::new();
    let mut person = Vec::new();
    let mut number = Vec::new();
    for &label in outputs {
        if label.is_empty() {
            continue;
        }
        if is_person_label(label) {
            person.push(label);
        } else if is_number_label(label) {
            number.push(label);
        } else {
            aspect.push(label);
        }
    }
    person.append(&mut number);
    VChainLabels::new(aspect.join(LABEL_SEPARATOR), person.join(LABEL_SEPARATOR))
}

// ---------------------------------------------------------------------------
// Whole chains
// ---------------------------------------------------------------------------

/// Aspect label of a chain under `analyzer`.
pub fn derive_aspect(chain: &VerbChain, analyzer: &Configuration) -> String {
    if let Some(labels) = shortcut_labels(chain) {
        return labels.aspect;
    }
    let symbols = symbolize(chain);
    match analyzer.run(&symbols) {
        Ok(outputs) => aspect_from_outputs(&outputs),
        Err(err) => {
            log::debug!("no aspect for \"{chain}\" ({symbols:?}): {err}");
            ERROR_LABEL.to_string()
        }
    }
}

/// Aspect and person/number labels of a chain under `analyzer`.
pub fn derive_labels(chain: &VerbChain, analyzer: &Configuration) -> VChainLabels {
    if let Some(labels) = shortcut_labels(chain) {
        return labels;
    }
    labels_for_symbols(&symbolize(chain), analyzer)
}

/// Labels for an already symbolized chain. No shortcuts apply.
pub fn labels_for_symbols<S: AsRef<str>>(symbols: &[S], analyzer: &Configuration) -> VChainLabels {
    match analyzer.run(symbols) {
        Ok(outputs) => labels_from_outputs(&outputs),
        Err(err) => {
            log::debug!("no labels for symbols: {err}");
            VChainLabels::error()
        }
    }
}
