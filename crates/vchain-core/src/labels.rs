// Label vocabulary shared by the analyzers and their callers.

/// The out-of-band label meaning "no valid label could be derived".
pub const ERROR_LABEL: &str = "ERROR";

/// Aspect label for `to`-infinitive chains.
pub const INFINITIVE: &str = "INF";

/// Aspect label for a lone past-tense or past-participle verb.
pub const PAST_SIMPLE: &str = "PA_SIMPLE";

/// Aspect label for a lone present-tense verb.
pub const PRESENT_SIMPLE: &str = "PR_SIMPLE";

/// Separator used when joining label parts.
pub const LABEL_SEPARATOR: &str = "_";

// ---------------------------------------------------------------------------
// Agreement labels emitted by the analyzers
// ---------------------------------------------------------------------------

pub const FIRST_PERSON: &str = "1ST";
pub const THIRD_PERSON: &str = "3RD";
pub const PLURAL: &str = "PL";
pub const SINGULAR: &str = "SING";

/// Person labels, in the order they are reported.
pub const PERSON_LABELS: [&str; 2] = [FIRST_PERSON, THIRD_PERSON];

/// Number labels. Singular is the implicit default and is never reported.
pub const NUMBER_LABELS: [&str; 1] = [PLURAL];

/// Every person/number label an analyzer can emit.
pub const AGREEMENT_LABELS: [&str; 4] = [PLURAL, SINGULAR, FIRST_PERSON, THIRD_PERSON];

pub fn is_person_label(label: &str) -> bool {
    PERSON_LABELS.contains(&label)
}

pub fn is_number_label(label: &str) -> bool {
    NUMBER_LABELS.contains(&label)
}

pub fn is_agreement_label(label: &str) -> bool {
    AGREEMENT_LABELS.contains(&label)
}

/// A label is valid if it is non-empty, not all whitespace and not [`ERROR_LABEL`].
pub fn is_valid_label(label: &str) -> bool {
    !label.trim().is_empty() && label != ERROR_LABEL
}
