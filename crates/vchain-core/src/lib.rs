//! Shared types for verb-chain labelling.
//!
//! - [`enums`] -- Closed grammatical categories derived from Penn Treebank tags
//! - [`token`] -- Tagged tokens, verb chains and sentence segmentation
//! - [`labels`] -- Label vocabulary shared by the analyzers and their callers

pub mod enums;
pub mod labels;
pub mod token;

pub use enums::{Category, VerbForm};
pub use token::{Sentence, Token, TokenError, VerbChain};
