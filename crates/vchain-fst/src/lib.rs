//! Table-driven deterministic finite state transducer.
//!
//! A transducer emits an output label whenever it *enters* a state, and may
//! chase epsilon transitions immediately after entering one that has an
//! output. The tables are small hand-authored grids, so the engine favours
//! clarity over speed.
//!
//! # Architecture
//!
//! - [`symbols`] -- Ordered input alphabet (symbol position = table column)
//! - [`transition`] -- Transition cells (`Goto`, `SelfLoop`, `Dead`)
//! - [`config`] -- Immutable transducer configuration and its builder
//! - [`run`] -- Per-input run state and the stepping algorithm

pub mod config;
pub mod run;
pub mod symbols;
pub mod transition;

pub use config::{Accepting, Configuration, ConfigurationBuilder};
pub use run::Run;
pub use symbols::Alphabet;
pub use transition::Transition;

/// Index of a state in a configuration's tables.
pub type StateId = usize;

/// The dead (error) state. Entering it rejects the run.
pub const DEAD_STATE: StateId = 0;

/// Every run starts here.
pub const START_STATE: StateId = 1;

/// Sentinel output used by the legacy [`Configuration::transduce`] wrapper.
pub const ERROR_SENTINEL: &str = "ERROR";

/// Output produced by a `SelfLoop` transition.
pub const SELF_LOOP_OUTPUT: &str = "";

/// Error type for transducer runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FstError {
    #[error("symbol {symbol:?} at position {position} is not in the input alphabet")]
    InvalidSymbol { symbol: String, position: usize },
    #[error("entered the dead state at input position {position}")]
    DeadState { position: usize },
    #[error("input ended in non-accepting state {state}")]
    NotAccepting { state: StateId },
    #[error("epsilon transitions from state {state} do not terminate")]
    EpsilonCycle { state: StateId },
    #[error("malformed transition table: {0}")]
    MalformedTable(String),
}

impl FstError {
    /// True for failures caused by the input rather than by the table.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidSymbol { .. } | Self::DeadState { .. } | Self::NotAccepting { .. }
        )
    }
}
