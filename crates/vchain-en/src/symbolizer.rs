// Verb chain to analyzer input.
//
// Finite auxiliaries are kept as (expanded) words because their person,
// number and tense matter; everything else is reduced to its POS tag.
// Modals and non-head adverbs carry no tense/aspect information and are
// dropped.

use vchain_core::{Token, VerbChain};

/// Auxiliary surface forms that are symbolized by tag rather than by word.
pub const NON_FINITE_AUXILIARIES: [&str; 4] = ["be", "being", "having", "doing"];

/// Turn a verb chain into analyzer input symbols.
///
/// Symbols borrow from the chain: auxiliary words and POS tags are never
/// copied.
pub fn symbolize(chain: &VerbChain) -> Vec<&str> {
    let head = chain.head_index();
    let symbols: Vec<&str> = chain
        .tokens()
        .iter()
        .enumerate()
        .filter_map(|(i, token)| symbol_for(token, head == Some(i)))
        .collect();
    log::trace!("symbolized \"{chain}\" as {symbols:?}");
    symbols
}

/// The symbol for one token, `None` if the token is dropped.
pub fn symbol_for(token: &Token, is_head: bool) -> Option<&str> {
    if token.is_modal() {
        return None;
    }
    let non_finite = NON_FINITE_AUXILIARIES.contains(&token.word.as_str());
    if token.is_auxiliary() && !non_finite {
        return Some(token.expanded_word());
    }
    if !token.is_adverb() || non_finite || is_head {
        return Some(&token.tag);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(tagged: &str) -> VerbChain {
        VerbChain::new(tagged.split_whitespace().map(|t| t.parse().unwrap()).collect())
    }

    #[test]
    fn auxiliaries_become_words() {
        assert_eq!(symbolize(&chain("has/have/VBZ been/be/VBN working/work/VBG")), [
            "has", "been", "VBG"
        ]);
        assert_eq!(symbolize(&chain("Was/be/VBD running/run/VBG")), ["was", "VBG"]);
    }

    #[test]
    fn contractions_are_expanded() {
        assert_eq!(symbolize(&chain("'s/be/VBZ going/go/VBG")), ["is", "VBG"]);
        assert_eq!(symbolize(&chain("'ve/have/VBP been/be/VBN")), ["have", "been"]);
        assert_eq!(symbolize(&chain("'m/be/VBP going/go/VBG")), ["am", "VBG"]);
    }

    #[test]
    fn modals_and_adverbs_are_dropped() {
        assert_eq!(symbolize(&chain("could/could/MD have/have/VB gone/go/VBN")), [
            "have", "VBN"
        ]);
        assert_eq!(symbolize(&chain("has/have/VBZ never/never/RB left/leave/VBN")), [
            "has", "VBN"
        ]);
    }

    #[test]
    fn head_adverb_is_kept() {
        // No verb in the chain, so the last token is the head.
        assert_eq!(symbolize(&chain("not/not/RB")), ["RB"]);
    }

    #[test]
    fn non_finite_auxiliaries_become_tags() {
        assert_eq!(symbolize(&chain("will/will/MD be/be/VB going/go/VBG")), ["VB", "VBG"]);
        assert_eq!(symbolize(&chain("having/have/VBG seen/see/VBN")), ["VBG", "VBN"]);
    }

    #[test]
    fn main_verbs_become_tags() {
        assert_eq!(symbolize(&chain("went/go/VBD")), ["VBD"]);
        assert_eq!(symbolize(&chain("to/to/TO go/go/VB")), ["TO", "VB"]);
    }

    #[test]
    fn empty_chain() {
        assert!(symbolize(&VerbChain::default()).is_empty());
    }
}
