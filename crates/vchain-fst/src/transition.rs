// Transition cells.

use crate::{DEAD_STATE, StateId};

/// One cell of a transition table.
///
/// Hand-written tables traditionally encode cells as signed integers: `0`
/// for the dead state, `-1` for "stay here and emit nothing", and any
/// positive value for a destination state. [`Transition::from_raw`] and
/// [`Transition::to_raw`] convert to and from that encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Transition {
    /// Go to the dead state. In the epsilon column: no epsilon transition.
    #[default]
    Dead,
    /// Consume the symbol without moving and without output.
    SelfLoop,
    /// Move to the given state, emitting its output.
    Goto(StateId),
}

impl Transition {
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            -1 => Self::SelfLoop,
            r if r <= 0 => Self::Dead,
            r => Self::Goto(r as StateId),
        }
    }

    pub fn to_raw(self) -> i64 {
        match self {
            Self::Dead => 0,
            Self::SelfLoop => -1,
            Self::Goto(s) => s as i64,
        }
    }

    /// The state entered by this transition, `None` for a self-loop.
    ///
    /// `Goto(0)` and `Dead` both enter the dead state.
    pub fn destination(self) -> Option<StateId> {
        match self {
            Self::Dead => Some(DEAD_STATE),
            Self::SelfLoop => None,
            Self::Goto(s) => Some(s),
        }
    }

    pub fn is_dead(self) -> bool {
        self.destination() == Some(DEAD_STATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_encoding() {
        assert_eq!(Transition::from_raw(0), Transition::Dead);
        assert_eq!(Transition::from_raw(-1), Transition::SelfLoop);
        assert_eq!(Transition::from_raw(13), Transition::Goto(13));
        assert_eq!(Transition::Goto(13).to_raw(), 13);
        assert_eq!(Transition::SelfLoop.to_raw(), -1);
        assert_eq!(Transition::Dead.to_raw(), 0);
    }

    #[test]
    fn destination() {
        assert_eq!(Transition::Dead.destination(), Some(DEAD_STATE));
        assert_eq!(Transition::Goto(0).destination(), Some(DEAD_STATE));
        assert_eq!(Transition::SelfLoop.destination(), None);
        assert_eq!(Transition::Goto(4).destination(), Some(4));
        assert!(Transition::Goto(0).is_dead());
        assert!(!Transition::SelfLoop.is_dead());
    }

    #[test]
    fn default_is_dead() {
        assert_eq!(Transition::default(), Transition::Dead);
    }
}
