//! Recoverable engine errors.
//!
//! Only bad player input, out-of-range pile indices in serialized data
//! and misuse of a finished game are errors. Empty piles and escaping
//! animatronics are ordinary game events, and contract violations in code
//! (bad pile index, bad config) panic.

use super::card::Outcome;

/// A rejected reaction selection. The game state is untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("at most {max} reactions allowed per round, got {got}")]
    TooMany { max: usize, got: usize },

    #[error("card #{} cannot be reacted to", .0 + 1)]
    NotReactable(usize),

    #[error("card #{} selected more than once", .0 + 1)]
    Duplicate(usize),

    #[error("card #{} is not part of this round's draw", .0 + 1)]
    UnknownCard(usize),

    #[error("a finished selection cannot also pick cards")]
    MixedTerminator,

    #[error("could not read {0:?} as a card number")]
    Unparseable(String),
}

/// Errors from driving the round pipeline.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("game already finished: {0:?}")]
    GameFinished(Outcome),
}

/// A pile index read from outside the engine was not `0..PILE_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("pile index {0} out of range")]
pub struct InvalidPileId(pub u8);
