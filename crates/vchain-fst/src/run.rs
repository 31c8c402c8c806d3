// Run state and the stepping algorithm.

use crate::config::Configuration;
use crate::transition::Transition;
use crate::{DEAD_STATE, FstError, SELF_LOOP_OUTPUT, START_STATE, StateId};

/// One pass of input through a [`Configuration`].
///
/// A run borrows its configuration read-only and owns nothing but the
/// current state, so it is cheap to create and should not outlive a single
/// input sequence.
#[derive(Debug, Clone)]
pub struct Run<'a> {
    config: &'a Configuration,
    state: StateId,
    consumed: usize,
}

impl<'a> Run<'a> {
    pub fn new(config: &'a Configuration) -> Self {
        Self {
            config,
            state: START_STATE,
            consumed: 0,
        }
    }

    pub fn state(&self) -> StateId {
        self.state
    }

    pub fn is_dead(&self) -> bool {
        self.state == DEAD_STATE
    }

    /// Number of input symbols consumed so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Take the transition in `column` from the current state.
    ///
    /// A `SelfLoop` yields `[""]` and leaves the state alone. Any other cell
    /// moves to its destination and emits that state's output. Epsilon
    /// transitions are then followed depth-first, but only out of states
    /// that emitted something: entering a silent state ends the step.
    pub fn step(&mut self, column: usize) -> Result<Vec<&'a str>, FstError> {
        let config = self.config;
        let state_count = config.state_count();
        let epsilon = config.alphabet().epsilon_index();

        let mut out = Vec::new();
        let mut column = column;
        let mut hops = 0usize;
        loop {
            let dest = match config.cell(self.state, column)? {
                Transition::SelfLoop => {
                    out.push(SELF_LOOP_OUTPUT);
                    return Ok(out);
                }
                Transition::Dead => DEAD_STATE,
                Transition::Goto(dest) => dest,
            };
            if dest >= state_count {
                log::warn!("state {} column {column} targets missing state {dest}", self.state);
                return Err(FstError::MalformedTable(format!(
                    "state {} column {column} targets missing state {dest}",
                    self.state
                )));
            }

            log::trace!("{} --[{column}]--> {dest}", self.state);
            self.state = dest;
            let Some(label) = config.output(dest) else {
                return Ok(out);
            };
            out.push(label);
            if dest == DEAD_STATE || !config.has_epsilon(dest) {
                return Ok(out);
            }

            hops += 1;
            if hops > state_count {
                log::warn!("epsilon chain through state {dest} does not terminate");
                return Err(FstError::EpsilonCycle { state: dest });
            }
            column = epsilon;
        }
    }

    /// Consume one input symbol by name.
    pub fn feed(&mut self, symbol: &str) -> Result<Vec<&'a str>, FstError> {
        let position = self.consumed;
        if self.is_dead() {
            return Err(FstError::DeadState { position });
        }
        let Some(column) = self.config.alphabet().index_of(symbol) else {
            log::debug!("rejecting unknown symbol {symbol:?} at position {position}");
            return Err(FstError::InvalidSymbol {
                symbol: symbol.to_string(),
                position,
            });
        };

        let out = self.step(column)?;
        self.consumed += 1;
        if self.is_dead() {
            log::debug!("symbol {symbol:?} at position {position} led to the dead state");
            return Err(FstError::DeadState { position });
        }
        Ok(out)
    }

    /// Check the final state once the input is exhausted.
    pub fn finish(&self) -> Result<(), FstError> {
        if self.is_dead() {
            return Err(FstError::DeadState {
                position: self.consumed.saturating_sub(1),
            });
        }
        if self.config.is_accepting(self.state) {
            Ok(())
        } else {
            log::debug!("input ended in non-accepting state {}", self.state);
            Err(FstError::NotAccepting { state: self.state })
        }
    }
}
