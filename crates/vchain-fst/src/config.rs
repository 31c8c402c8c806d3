// Transducer configuration: the immutable tables a run reads from.
//
// A configuration never holds run state. Every run gets its own `Run`
// value, so a single configuration can serve any number of runs, including
// runs on other threads.

use hashbrown::HashSet;

use crate::run::Run;
use crate::symbols::Alphabet;
use crate::transition::Transition;
use crate::{DEAD_STATE, ERROR_SENTINEL, FstError, START_STATE, StateId};

/// Which states accept when the input is exhausted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Accepting {
    /// Every state except the dead state.
    #[default]
    AllLive,
    /// Only the listed states.
    Only(HashSet<StateId>),
}

impl Accepting {
    pub fn only<I: IntoIterator<Item = StateId>>(states: I) -> Self {
        Self::Only(states.into_iter().collect())
    }

    pub fn contains(&self, state: StateId) -> bool {
        match self {
            Self::AllLive => state != DEAD_STATE,
            Self::Only(states) => states.contains(&state),
        }
    }
}

/// Immutable transducer tables.
///
/// - `outputs[s]` is emitted each time state `s` is entered.
/// - `transitions[s][c]` is the cell for state `s` and alphabet column `c`;
///   the last column of every row is the epsilon column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    alphabet: Alphabet,
    outputs: Vec<Option<String>>,
    transitions: Vec<Vec<Transition>>,
    accepting: Accepting,
}

impl Configuration {
    /// Assemble a configuration from complete tables.
    ///
    /// The tables are taken as given; call [`validate`](Self::validate) to
    /// check them. A run over malformed tables fails with
    /// [`FstError::MalformedTable`] or [`FstError::EpsilonCycle`] instead of
    /// panicking.
    pub fn new(
        alphabet: Alphabet,
        outputs: Vec<Option<String>>,
        transitions: Vec<Vec<Transition>>,
        accepting: Accepting,
    ) -> Self {
        Self {
            alphabet,
            outputs,
            transitions,
            accepting,
        }
    }

    /// Start building a configuration with one all-`Dead` row per output.
    pub fn builder<I, S>(alphabet: Alphabet, outputs: I) -> ConfigurationBuilder
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        ConfigurationBuilder::new(alphabet, outputs)
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn state_count(&self) -> usize {
        self.transitions.len()
    }

    pub fn accepting(&self) -> &Accepting {
        &self.accepting
    }

    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting.contains(state)
    }

    /// Output emitted on entering `state`, if any.
    pub fn output(&self, state: StateId) -> Option<&str> {
        self.outputs.get(state).and_then(|o| o.as_deref())
    }

    /// The cell for `state` and `column`.
    pub fn cell(&self, state: StateId, column: usize) -> Result<Transition, FstError> {
        self.transitions
            .get(state)
            .and_then(|row| row.get(column))
            .copied()
            .ok_or_else(|| {
                FstError::MalformedTable(format!("no cell for state {state}, column {column}"))
            })
    }

    /// True if entering `state` triggers an epsilon transition.
    pub fn has_epsilon(&self, state: StateId) -> bool {
        self.cell(state, self.alphabet.epsilon_index())
            .is_ok_and(|t| !t.is_dead())
    }

    /// Start a fresh run at the start state.
    pub fn start(&self) -> Run<'_> {
        Run::new(self)
    }

    /// Run a whole symbol sequence from the start state.
    ///
    /// Returns the outputs in order. `SelfLoop` steps contribute an empty
    /// string each.
    pub fn run<S: AsRef<str>>(&self, symbols: &[S]) -> Result<Vec<&str>, FstError> {
        let mut run = self.start();
        let mut out = Vec::new();
        for symbol in symbols {
            out.extend(run.feed(symbol.as_ref())?);
        }
        run.finish()?;
        Ok(out)
    }

    /// Like [`run`](Self::run), but every failure is reported as the single
    /// output `"ERROR"`.
    pub fn transduce<S: AsRef<str>>(&self, symbols: &[S]) -> Vec<String> {
        match self.run(symbols) {
            Ok(out) => out.into_iter().map(str::to_string).collect(),
            Err(err) => {
                log::debug!("transduce rejected input: {err}");
                vec![ERROR_SENTINEL.to_string()]
            }
        }
    }

    /// Check the tables for structural defects.
    ///
    /// Verifies table dimensions, destination ranges, the accepting set,
    /// alphabet uniqueness, and that no epsilon chain loops.
    pub fn validate(&self) -> Result<(), FstError> {
        let state_count = self.transitions.len();
        if state_count <= START_STATE {
            return Err(FstError::MalformedTable(format!(
                "need at least {} states, found {state_count}",
                START_STATE + 1
            )));
        }
        if self.outputs.len() != state_count {
            return Err(FstError::MalformedTable(format!(
                "{} outputs for {state_count} states",
                self.outputs.len()
            )));
        }
        if self.alphabet.has_duplicates() {
            return Err(FstError::MalformedTable(
                "alphabet repeats a symbol".to_string(),
            ));
        }

        let width = self.alphabet.row_width();
        for (state, row) in self.transitions.iter().enumerate() {
            if row.len() != width {
                return Err(FstError::MalformedTable(format!(
                    "row {state} has {} cells, expected {width}",
                    row.len()
                )));
            }
            for (column, cell) in row.iter().enumerate() {
                if let Transition::Goto(dest) = *cell {
                    if dest >= state_count {
                        return Err(FstError::MalformedTable(format!(
                            "state {state}, column {column} targets missing state {dest}"
                        )));
                    }
                }
            }
        }

        if let Accepting::Only(states) = &self.accepting {
            if let Some(bad) = states.iter().find(|&&s| s >= state_count) {
                return Err(FstError::MalformedTable(format!(
                    "accepting state {bad} does not exist"
                )));
            }
        }

        for state in 0..state_count {
            self.check_epsilon_chain(state)?;
        }
        Ok(())
    }

    fn check_epsilon_chain(&self, start: StateId) -> Result<(), FstError> {
        let eps = self.alphabet.epsilon_index();
        let mut seen = HashSet::new();
        let mut state = start;
        while let Transition::Goto(next) = self.cell(state, eps)? {
            if next == DEAD_STATE {
                break;
            }
            if !seen.insert(state) {
                return Err(FstError::EpsilonCycle { state: start });
            }
            state = next;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ConfigurationBuilder
// ---------------------------------------------------------------------------

/// Fills a transition table cell by cell.
///
/// Every cell starts out `Dead`, so only the live transitions need to be
/// written down.
#[derive(Debug, Clone)]
pub struct ConfigurationBuilder {
    alphabet: Alphabet,
    outputs: Vec<Option<String>>,
    rows: Vec<Vec<Transition>>,
    accepting: Accepting,
}

impl ConfigurationBuilder {
    pub fn new<I, S>(alphabet: Alphabet, outputs: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        let outputs: Vec<Option<String>> =
            outputs.into_iter().map(|o| o.map(Into::into)).collect();
        let rows = vec![vec![Transition::Dead; alphabet.row_width()]; outputs.len()];
        Self {
            alphabet,
            outputs,
            rows,
            accepting: Accepting::AllLive,
        }
    }

    /// Set one cell.
    ///
    /// Writing outside the table is a programming error in the table
    /// definition; it is logged and ignored in release builds.
    pub fn set(mut self, state: StateId, column: usize, transition: Transition) -> Self {
        match self.rows.get_mut(state).and_then(|row| row.get_mut(column)) {
            Some(cell) => *cell = transition,
            None => {
                log::warn!("ignoring transition outside the table: state {state}, column {column}");
                debug_assert!(false, "cell ({state}, {column}) outside the table");
            }
        }
        self
    }

    /// `state` --`column`--> `dest`.
    pub fn on(self, state: StateId, column: usize, dest: StateId) -> Self {
        self.set(state, column, Transition::Goto(dest))
    }

    /// The same destination for several columns.
    pub fn on_each(mut self, state: StateId, columns: &[usize], dest: StateId) -> Self {
        for &column in columns {
            self = self.on(state, column, dest);
        }
        self
    }

    /// Consume `column` in `state` without moving or emitting.
    pub fn skip(self, state: StateId, column: usize) -> Self {
        self.set(state, column, Transition::SelfLoop)
    }

    /// Epsilon transition taken right after entering `state`.
    pub fn epsilon(self, state: StateId, dest: StateId) -> Self {
        let eps = self.alphabet.epsilon_index();
        self.on(state, eps, dest)
    }

    /// Restrict the accepting states. Without this call every live state accepts.
    pub fn accepting<I: IntoIterator<Item = StateId>>(mut self, states: I) -> Self {
        self.accepting = Accepting::only(states);
        self
    }

    pub fn build(self) -> Configuration {
        Configuration::new(self.alphabet, self.outputs, self.rows, self.accepting)
    }
}
