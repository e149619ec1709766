//! Game phase controller
//!
//! Menu -> Playing -> Terminal -> Playing. The controller never decides that
//! play has ended; the game's collision step hands it an outcome.

use serde::{Deserialize, Serialize};

/// Current phase of a game, generic over what a finished session reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase<O> {
    /// Title screen, waiting for confirm
    Menu,
    /// Active gameplay
    Playing,
    /// Session over; carries the outcome (winner, final score, ...)
    Terminal(O),
}

/// What the host loop must do after evaluating the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition<O> {
    /// Phase unchanged
    Stay,
    /// Enter Playing with a freshly reinitialised session
    Start,
    /// Playing ended with this outcome
    Finish(O),
}

/// Phase tag without payload, for render snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseTag {
    Menu,
    Playing,
    Terminal,
}

impl<O: Copy> Phase<O> {
    /// Pure transition function: (phase, confirm edge, outcome) -> transition.
    ///
    /// Confirm is only recognised in Menu and Terminal; an outcome is only
    /// recognised while Playing. Anything else is a no-op.
    pub fn transition(&self, confirm: bool, outcome: Option<O>) -> Transition<O> {
        match (self, outcome) {
            (Phase::Menu | Phase::Terminal(_), _) if confirm => Transition::Start,
            (Phase::Playing, Some(outcome)) => Transition::Finish(outcome),
            _ => Transition::Stay,
        }
    }

    /// Phase after applying a transition
    pub fn apply(&self, transition: Transition<O>) -> Self {
        match transition {
            Transition::Stay => *self,
            Transition::Start => Phase::Playing,
            Transition::Finish(outcome) => Phase::Terminal(outcome),
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, Phase::Playing)
    }

    /// Outcome of the finished session, if any
    pub fn outcome(&self) -> Option<O> {
        match self {
            Phase::Terminal(outcome) => Some(*outcome),
            _ => None,
        }
    }

    pub fn tag(&self) -> PhaseTag {
        match self {
            Phase::Menu => PhaseTag::Menu,
            Phase::Playing => PhaseTag::Playing,
            Phase::Terminal(_) => PhaseTag::Terminal,
        }
    }
}
