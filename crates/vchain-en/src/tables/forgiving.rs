// Forgiving analyzer: any verb tag after an auxiliary, plus do-support.
//
// Taggers often mislabel the main verb of an auxiliary chain (`is/VBZ
// gone/VBD`), so wherever the strict analyzer insists on `VBN` or `VBG` this
// table takes any verb tag. It also reads `do`/`did`/`does` + verb, which
// the strict analyzer has no symbols for.

use vchain_core::labels::{ERROR_LABEL, FIRST_PERSON, PLURAL, SINGULAR, THIRD_PERSON};
use vchain_fst::{Alphabet, Configuration};

use super::column::{self, VERB_TAGS};
use super::state::*;
use super::{ANALYZER_SYMBOLS, label};

const OUTPUTS: [Option<&str>; 21] = [
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
    Some(label::PRESENT),             // DO
    Some(label::PAST),                // DID
    Some(label::PROGRESSIVE),         // DOES
    Some(label::DO_SUPPORT),          // DO_SUPPORT
];

/// Build the forgiving analyzer.
///
/// Note that `does` enters a state labelled `PROG`, not `PR`. Aspect labels
/// for `does` + verb therefore read `PROG_DID`.
pub fn forgiving_analyzer() -> Configuration {
    let alphabet = Alphabet::new(ANALYZER_SYMBOLS.iter().copied());
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
        .on(START, column::DO, DO)
        .on(START, column::DID, DID)
        .on(START, column::DOES, DOES)
        .skip(SIMPLE, column::RB)
        .on_each(HAD, &VERB_TAGS, PERFECT)
        .on(HAD, column::RB, HAD)
        .on(HAD, column::BEEN, BEEN)
        .on_each(HAVE, &VERB_TAGS, PERFECT)
        .on(HAVE, column::BEEN, BEEN)
        .on_each(HAS, &VERB_TAGS, PERFECT)
        .on(HAS, column::BEEN, BEEN)
        .epsilon(AM, PRESENT)
        .epsilon(IS, PRESENT)
        .epsilon(ARE, PRESENT)
        .on_each(PRESENT, &VERB_TAGS, PROGRESSIVE)
        .skip(PRESENT, column::RB)
        .epsilon(WAS, PAST)
        .epsilon(WERE, PAST)
        .on_each(PAST, &VERB_TAGS, PROGRESSIVE)
        .skip(PAST, column::RB)
        .skip(PERFECT, column::RB)
        .on_each(BEEN, &VERB_TAGS, PERFECT_PROGRESSIVE)
        .skip(BEEN, column::RB)
        .skip(PERFECT_PROGRESSIVE, column::RB)
        .skip(PROGRESSIVE, column::RB)
        // do, did, does
        .on_each(DO, &VERB_TAGS, DO_SUPPORT)
        .skip(DO, column::RB)
        .on_each(DID, &VERB_TAGS, DO_SUPPORT)
        .skip(DID, column::RB)
        .on_each(DOES, &VERB_TAGS, DO_SUPPORT)
        .skip(DOES, column::RB)
        .skip(DO_SUPPORT, column::RB)
        .accepting([SIMPLE, PERFECT, PERFECT_PROGRESSIVE, PROGRESSIVE, DO_SUPPORT])
        .build()
}
