// Strict analyzer: only well-formed auxiliary + verb-form combinations.

use vchain_core::labels::{ERROR_LABEL, FIRST_PERSON, PLURAL, SINGULAR, THIRD_PERSON};
use vchain_fst::{Alphabet, Configuration};

use super::column::{self, VERB_TAGS};
use super::state::*;
use super::{ANALYZER_SYMBOLS, STRICT_SYMBOL_COUNT, label};

/// Output emitted on entering each state, indexed by state.
const OUTPUTS: [Option<&str>; 17] = [
    Some(ERROR_LABEL),                // DEAD
    None,                             // START
    Some(label::SIMPLE),              // SIMPLE
    Some(label::PAST),                // HAD
    Some(FIRST_PERSON),               // HAVE
    Some(THIRD_PERSON),               // HAS
    Some(FIRST_PERSON),               // AM
    Some(THIRD_PERSON),               // IS
    Some(PLURAL),                     // ARE
    Some(label::PRESENT),             // PRESENT
    Some(SINGULAR),                   // WAS
    Some(PLURAL),                     // WERE
    Some(label::PAST),                // PAST
    Some(label::PERFECT),             // PERFECT
    None,                             // BEEN
    Some(label::PERFECT_PROGRESSIVE), // PERFECT_PROGRESSIVE
    Some(label::PROGRESSIVE),         // PROGRESSIVE
];

/// Build the strict analyzer.
///
/// A lone verb tag is `SIMPLE`; `have`/`has`/`had` need a `VBN` or `been
/// VBG`; a form of `be` needs a `VBG`. Adverbs are skipped once the chain has
/// left the start state. Only complete chains accept, so a bare auxiliary
/// (`is`, `has`) is rejected.
pub fn strict_analyzer() -> Configuration {
    let alphabet = Alphabet::new(ANALYZER_SYMBOLS[..STRICT_SYMBOL_COUNT].iter().copied());
    Configuration::builder(alphabet, OUTPUTS)
        .on_each(START, &VERB_TAGS, SIMPLE)
        .on(START, column::RB, START)
        .on(START, column::HAD, HAD)
        .on(START, column::HAVE, HAVE)
        .on(START, column::HAS, HAS)
        .on(START, column::IS, IS)
        .on(START, column::AM, AM)
        .on(START, column::ARE, ARE)
        .on(START, column::WAS, WAS)
        .on(START, column::WERE, WERE)
        .skip(SIMPLE, column::RB)
        // had
        .on(HAD, column::VBN, PERFECT)
        .on(HAD, column::RB, HAD)
        .on(HAD, column::BEEN, BEEN)
        // have, has
        .on(HAVE, column::VBN, PERFECT)
        .on(HAVE, column::BEEN, BEEN)
        .on(HAS, column::VBN, PERFECT)
        .on(HAS, column::BEEN, BEEN)
        // am, is, are: person/number first, then tense
        .epsilon(AM, PRESENT)
        .epsilon(IS, PRESENT)
        .epsilon(ARE, PRESENT)
        .on(PRESENT, column::VBG, PROGRESSIVE)
        .skip(PRESENT, column::RB)
        // was, were
        .epsilon(WAS, PAST)
        .epsilon(WERE, PAST)
        .on(PAST, column::VBG, PROGRESSIVE)
        .skip(PAST, column::RB)
        // been
        .on(BEEN, column::VBG, PERFECT_PROGRESSIVE)
        .skip(BEEN, column::RB)
        .skip(PERFECT, column::RB)
        .skip(PERFECT_PROGRESSIVE, column::RB)
        .skip(PROGRESSIVE, column::RB)
        .accepting([SIMPLE, PERFECT, PERFECT_PROGRESSIVE, PROGRESSIVE])
        .build()
}
