// Token, VerbChain and Sentence types

use std::fmt;
use std::str::FromStr;

use crate::enums::{Category, VerbForm};

/// Lemmas whose verb forms count as auxiliaries.
pub const AUXILIARY_LEMMAS: [&str; 3] = ["be", "have", "do"];

/// Error type for parsing tagged token text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token {0:?} is not of the form word/lemma/TAG")]
    MissingField(String),
    #[error("token {0:?} has an empty field")]
    EmptyField(String),
}

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// A single tagged token of a parsed sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface form, lowercased.
    pub word: String,

    /// Lemma as produced by the tagger.
    pub lemma: String,

    /// Penn Treebank tag as produced by the tagger.
    pub tag: String,

    /// Category derived from `tag` when the token was built.
    pub category: Category,

    /// Position of this token within its sentence (0-based).
    pub index: usize,
}

impl Token {
    /// Create a new token at index 0.
    pub fn new(word: &str, lemma: impl Into<String>, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            word: word.to_lowercase(),
            lemma: lemma.into(),
            category: Category::from_tag(&tag),
            tag,
            index: 0,
        }
    }

    /// Set the sentence position.
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    pub fn is_verb(&self) -> bool {
        self.category.is_verb()
    }

    pub fn is_modal(&self) -> bool {
        self.category.is_modal()
    }

    pub fn is_adverb(&self) -> bool {
        self.category.is_adverb()
    }

    pub fn verb_form(&self) -> Option<VerbForm> {
        self.category.verb_form()
    }

    /// A form of be/have/do, or any modal.
    pub fn is_auxiliary(&self) -> bool {
        self.is_verb() && (self.is_modal() || AUXILIARY_LEMMAS.contains(&self.lemma.as_str()))
    }

    /// The surface form with clitic contractions spelled out.
    pub fn expanded_word(&self) -> &str {
        match self.word.as_str() {
            "'m" => "am",
            "'ve" => "have",
            "'s" => "is",
            "'re" => "are",
            "'d" => "would",
            w => w,
        }
    }
}

impl FromStr for Token {
    type Err = TokenError;

    /// Parse `word/lemma/TAG`. Fields are split from the right, so the word
    /// itself may contain slashes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.rsplitn(3, '/');
        let (Some(tag), Some(lemma), Some(word)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(TokenError::MissingField(s.to_string()));
        };
        if tag.is_empty() || lemma.is_empty() || word.is_empty() {
            return Err(TokenError::EmptyField(s.to_string()));
        }
        Ok(Token::new(word, lemma, tag))
    }
}

// ---------------------------------------------------------------------------
// VerbChain
// ---------------------------------------------------------------------------

/// A contiguous run of verb, adverb and infinitive-marker tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VerbChain {
    tokens: Vec<Token>,
}

impl VerbChain {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn first(&self) -> Option<&Token> {
        self.tokens.first()
    }

    /// Position of the head within the chain: the last verb (modals
    /// included), or the last token if the chain holds no verb at all.
    pub fn head_index(&self) -> Option<usize> {
        self.tokens
            .iter()
            .rposition(Token::is_verb)
            .or_else(|| self.tokens.len().checked_sub(1))
    }

    pub fn head(&self) -> Option<&Token> {
        self.head_index().map(|i| &self.tokens[i])
    }

    /// Verbs other than modals, in chain order.
    pub fn non_modal_verbs(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.verb_form().is_some())
    }

    /// True for `to` + verb chains ("to go", "to have gone").
    pub fn is_infinitive(&self) -> bool {
        self.tokens.len() > 1
            && self
                .first()
                .is_some_and(|t| t.category == Category::InfinitiveMarker)
    }
}

impl fmt::Display for VerbChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(&token.word)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Sentence
// ---------------------------------------------------------------------------

/// A tagged sentence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sentence {
    tokens: Vec<Token>,
}

impl Sentence {
    /// Build a sentence, renumbering token indices by position.
    pub fn new(tokens: Vec<Token>) -> Self {
        let tokens = tokens
            .into_iter()
            .enumerate()
            .map(|(i, t)| t.with_index(i))
            .collect();
        Self { tokens }
    }

    /// Parse whitespace-separated `word/lemma/TAG` tokens.
    pub fn from_tagged(text: &str) -> Result<Self, TokenError> {
        let tokens = text
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Token>, _>>()?;
        Ok(Self::new(tokens))
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    fn next_is_verb(&self, index: usize) -> bool {
        self.tokens.get(index + 1).is_some_and(Token::is_verb)
    }

    /// Split the sentence into verb chains.
    ///
    /// A chain is a maximal run of verbs, modals and adverbs, optionally
    /// opened by `to` when a verb follows it. Runs consisting of a single
    /// adverb, `to` or modal are not chains. A run still open after the last
    /// token is emitted as the final chain, so a sentence does not need
    /// closing punctuation for its last chain to count.
    pub fn verb_chains(&self) -> Vec<VerbChain> {
        let mut chains = Vec::new();
        let mut pending: Vec<Token> = Vec::new();
        let mut started = false;

        for (i, token) in self.tokens.iter().enumerate() {
            if !started {
                pending.clear();
            }
            let opens_infinitive = !started && token.word == "to" && self.next_is_verb(i);
            if token.is_verb() || token.is_adverb() || opens_infinitive {
                started = true;
                pending.push(token.clone());
                continue;
            }

            started = false;
            flush_chain(&mut pending, &mut chains);
            if token.category == Category::InfinitiveMarker && self.next_is_verb(i) {
                pending.push(token.clone());
                started = true;
            }
        }

        if started {
            flush_chain(&mut pending, &mut chains);
        }
        chains
    }
}

fn flush_chain(pending: &mut Vec<Token>, chains: &mut Vec<VerbChain>) {
    let trivial = match pending.as_slice() {
        [] => true,
        [only] => {
            only.is_adverb() || only.is_modal() || only.category == Category::InfinitiveMarker
        }
        _ => false,
    };
    let tokens = std::mem::take(pending);
    if !trivial {
        chains.push(VerbChain::new(tokens));
    }
}
