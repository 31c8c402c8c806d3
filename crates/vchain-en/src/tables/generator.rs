// Generator: grammatical properties in, auxiliary words and tag placeholders
// out. Feeding ["3RD", "PRESENT", "PROGRESSIVE"] yields ["is", "VBG"].
//
// Person or number comes first, then tense (or "" when the tense is carried
// by the perfect auxiliary), then aspect.

use vchain_fst::{Alphabet, Configuration, StateId};

use super::GrammaticalProperty;

/// Placeholder for a past participle.
pub const PARTICIPLE: &str = "VBN";
/// Placeholder for a present participle.
pub const GERUND: &str = "VBG";

const FIRST: StateId = 2;
const FIRST_HAVE: StateId = 3;
const PERFECT: StateId = 4;
const PERFECT_PROGRESSIVE: StateId = 5;
const AM: StateId = 6;
const PROGRESSIVE: StateId = 7;
const THIRD: StateId = 8;
const HAS: StateId = 9;
const IS: StateId = 10;
const SINGULAR: StateId = 11;
const WAS: StateId = 12;
const PLURAL: StateId = 13;
const ARE: StateId = 14;
const WERE: StateId = 15;
const UNSPECIFIED: StateId = 16;
const HAD: StateId = 17;

const OUTPUTS: [Option<&str>; 18] = [
    Some(vchain_core::labels::ERROR_LABEL),
    None,
    None,
    Some("have"),
    Some(PARTICIPLE),
    Some("been VBG"),
    Some("am"),
    Some(GERUND),
    None,
    Some("has"),
    Some("is"),
    None,
    Some("was"),
    None,
    Some("are"),
    Some("were"),
    None,
    Some("had"),
];

/// Build the generator.
///
/// Every live state accepts, so a partial property sequence yields the
/// auxiliaries generated so far.
pub fn generator() -> Configuration {
    use GrammaticalProperty as P;

    let alphabet = Alphabet::new(GrammaticalProperty::ALL.map(P::generator_symbol));
    let start = vchain_fst::START_STATE;
    Configuration::builder(alphabet, OUTPUTS)
        .on(start, P::FirstPerson.column(), FIRST)
        .on(start, P::ThirdPerson.column(), THIRD)
        .on(start, P::Singular.column(), SINGULAR)
        .on(start, P::Plural.column(), PLURAL)
        .on(start, P::Unspecified.column(), UNSPECIFIED)
        // 1ST: am / have
        .on(FIRST, P::Present.column(), AM)
        .on(FIRST, P::Unspecified.column(), FIRST_HAVE)
        .on(FIRST_HAVE, P::Perfect.column(), PERFECT)
        .on(FIRST_HAVE, P::PerfectProgressive.column(), PERFECT_PROGRESSIVE)
        .on(AM, P::Progressive.column(), PROGRESSIVE)
        // 3RD: is / has
        .on(THIRD, P::Present.column(), IS)
        .on(THIRD, P::Unspecified.column(), HAS)
        .on(HAS, P::Perfect.column(), PERFECT)
        .on(HAS, P::PerfectProgressive.column(), PERFECT_PROGRESSIVE)
        .on(IS, P::Progressive.column(), PROGRESSIVE)
        // SINGULAR: was
        .on(SINGULAR, P::Past.column(), WAS)
        .on(WAS, P::Progressive.column(), PROGRESSIVE)
        // PLURAL: are / were
        .on(PLURAL, P::Past.column(), WERE)
        .on(PLURAL, P::Present.column(), ARE)
        .on(ARE, P::Progressive.column(), PROGRESSIVE)
        .on(WERE, P::Progressive.column(), PROGRESSIVE)
        // no person or number: had
        .on(UNSPECIFIED, P::Past.column(), HAD)
        .on(HAD, P::Perfect.column(), PERFECT)
        .on(HAD, P::PerfectProgressive.column(), PERFECT_PROGRESSIVE)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vchain_fst::FstError;

    fn generate(properties: &[&str]) -> Result<Vec<String>, FstError> {
        generator()
            .run(properties)
            .map(|out| out.into_iter().map(str::to_string).collect())
    }

    #[test]
    fn table_is_well_formed() {
        let c = generator();
        assert_eq!(c.validate(), Ok(()));
        assert_eq!(c.state_count(), 18);
        assert_eq!(c.alphabet().len(), 10);
        assert_eq!(c.alphabet().index_of("PERFECT PROGRESSIVE"), Some(7));
        assert_eq!(c.alphabet().index_of(""), Some(9));
    }

    #[test]
    fn progressive() {
        assert_eq!(generate(&["3RD", "PRESENT", "PROGRESSIVE"]).unwrap(), ["is", "VBG"]);
        assert_eq!(generate(&["1ST", "PRESENT", "PROGRESSIVE"]).unwrap(), ["am", "VBG"]);
        assert_eq!(generate(&["PLURAL", "PAST", "PROGRESSIVE"]).unwrap(), ["were", "VBG"]);
        assert_eq!(generate(&["PLURAL", "PRESENT", "PROGRESSIVE"]).unwrap(), ["are", "VBG"]);
        assert_eq!(generate(&["SINGULAR", "PAST", "PROGRESSIVE"]).unwrap(), ["was", "VBG"]);
    }

    #[test]
    fn perfect() {
        assert_eq!(generate(&["1ST", "", "PERFECT"]).unwrap(), ["have", "VBN"]);
        assert_eq!(generate(&["3RD", "", "PERFECT"]).unwrap(), ["has", "VBN"]);
        assert_eq!(generate(&["", "PAST", "PERFECT"]).unwrap(), ["had", "VBN"]);
        assert_eq!(
            generate(&["3RD", "", "PERFECT PROGRESSIVE"]).unwrap(),
            ["has", "been VBG"]
        );
    }

    #[test]
    fn partial_sequences_accept() {
        assert_eq!(generate(&[]).unwrap(), Vec::<String>::new());
        assert_eq!(generate(&["3RD", "PRESENT"]).unwrap(), ["is"]);
        assert_eq!(generate(&["1ST"]).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn impossible_combinations_die() {
        assert_eq!(generate(&["PAST"]), Err(FstError::DeadState { position: 0 }));
        assert_eq!(
            generate(&["SINGULAR", "PRESENT"]),
            Err(FstError::DeadState { position: 1 })
        );
        assert_eq!(
            generate(&["1ST", "PAST", "PROGRESSIVE"]),
            Err(FstError::DeadState { position: 1 })
        );
    }

    #[test]
    fn unknown_property() {
        assert!(matches!(
            generate(&["FUTURE"]),
            Err(FstError::InvalidSymbol { position: 0, .. })
        ));
    }
}
