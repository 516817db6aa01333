//! Resolution events.
//!
//! Events are a write-only record of what happened during a round. The
//! engine emits them for the presentation layer and the log; it never
//! reads them back.

use serde::{Deserialize, Serialize};

use crate::core::{Card, PileId};

/// Why the game was lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossCause {
    /// An animatronic was resolved from the last pile.
    Escaped,
    /// An arrow pushed an animatronic off the board.
    PushedOff,
}

/// Something observable that happened while a round was played.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionEvent {
    /// A reacted animatronic went back into its pile, which was reshuffled.
    AnimatronicReshuffled { pile: PileId },

    /// A reacted arrow was discarded without effect.
    ReactionDiscarded { card: Card, pile: PileId },

    /// An unreacted animatronic crept into the next pile.
    AnimatronicMoved { from: PileId, to: PileId, position: usize },

    /// A down arrow drew a replacement card that will resolve in its place.
    ReplacementDrawn { card: Card, pile: PileId },

    /// An arrow pointed at a pile with no cards.
    PileEmpty { pile: PileId },

    /// An arrow moved a pile's top card onto another pile, face down.
    CardPushed { from: PileId, to: PileId },

    /// An arrow pushed a card off the board, revealing it.
    CardRevealed { card: Card, pile: PileId },

    /// The game is lost; the rest of the round is abandoned.
    LossTriggered { pile: PileId, cause: LossCause },
}

impl ResolutionEvent {
    /// Whether this event ended the game.
    #[must_use]
    pub fn is_loss(&self) -> bool {
        matches!(self, ResolutionEvent::LossTriggered { .. })
    }
}

impl std::fmt::Display for ResolutionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolutionEvent::AnimatronicReshuffled { pile } => {
                write!(f, "An animatronic was sent back into {}", pile)
            }
            ResolutionEvent::ReactionDiscarded { card, pile } => {
                write!(f, "Dealt with the {} from {}", card, pile)
            }
            ResolutionEvent::AnimatronicMoved { from, to, .. } => {
                write!(f, "An animatronic moved from {} to {}", from, to)
            }
            ResolutionEvent::ReplacementDrawn { card, pile } => {
                write!(f, "Drew a {} from {}", card, pile)
            }
            ResolutionEvent::PileEmpty { pile } => write!(f, "{} is empty", pile),
            ResolutionEvent::CardPushed { from, to } => {
                write!(f, "A card slid from {} onto {}", from, to)
            }
            ResolutionEvent::CardRevealed { card, pile } => {
                write!(f, "A {} was pushed out of {}", card, pile)
            }
            ResolutionEvent::LossTriggered { pile, cause } => match cause {
                LossCause::Escaped => write!(f, "An animatronic got through from {}", pile),
                LossCause::PushedOff => write!(f, "An animatronic was pushed out of {}", pile),
            },
        }
    }
}
