//! Card kinds, pile identifiers, and per-round drawn cards.
//!
//! ## Card
//!
//! An immutable tag. Only animatronics and arrows are reactable;
//! empty rooms and power drains resolve as plain discards.
//!
//! ## PileId
//!
//! Type-safe index into the four piles. Effects always move cards
//! toward higher indices, so the only way to leave the board is
//! `PileId::offset` returning `None`.

use serde::{Deserialize, Serialize};

use super::error::InvalidPileId;

/// Number of piles on the board.
pub const PILE_COUNT: usize = 4;

/// A card kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Card {
    /// Moves toward the last pile; escaping it loses the game.
    Animatronic,
    /// Nothing happens.
    EmptyRoom,
    /// Surcharges reactions made in the same round.
    PowerDrain,
    /// Draws a replacement card from its own pile.
    ArrowDown,
    /// Pushes the top card of its pile one pile to the right.
    ArrowRight,
    /// Pushes the top card of its pile two piles to the right.
    ArrowDoubleRight,
}

impl Card {
    /// Every card kind, in declaration order.
    pub const ALL: [Card; 6] = [
        Card::Animatronic,
        Card::EmptyRoom,
        Card::PowerDrain,
        Card::ArrowDown,
        Card::ArrowRight,
        Card::ArrowDoubleRight,
    ];

    /// Whether the player may react to this card.
    #[must_use]
    pub const fn is_reactable(self) -> bool {
        matches!(
            self,
            Card::Animatronic | Card::ArrowDown | Card::ArrowRight | Card::ArrowDoubleRight
        )
    }

    /// How many piles to the right an arrow pushes its pile's top card.
    ///
    /// `None` for every card that is not a pushing arrow.
    #[must_use]
    pub const fn push_distance(self) -> Option<u8> {
        match self {
            Card::ArrowRight => Some(1),
            Card::ArrowDoubleRight => Some(2),
            _ => None,
        }
    }

    /// Short label for column displays.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Card::Animatronic => "ANIMATRONIC",
            Card::EmptyRoom => "empty room",
            Card::PowerDrain => "power drain",
            Card::ArrowDown => "arrow v",
            Card::ArrowRight => "arrow >",
            Card::ArrowDoubleRight => "arrow >>",
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Pile identifier, `0..PILE_COUNT`.
///
/// Displayed 1-based ("Pile 1".."Pile 4"). Only valid indices can be
/// constructed, deserialization included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PileId(u8);

impl PileId {
    /// The last pile. Animatronics resolved here escape.
    pub const LAST: PileId = PileId(PILE_COUNT as u8 - 1);

    /// Create a new pile ID.
    ///
    /// Panics if `id` is not a valid pile index.
    #[must_use]
    pub fn new(id: u8) -> Self {
        assert!((id as usize) < PILE_COUNT, "Pile index {} out of range", id);
        Self(id)
    }

    /// Get the raw pile index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The pile `distance` steps to the right, or `None` past the last pile.
    #[must_use]
    pub fn offset(self, distance: u8) -> Option<PileId> {
        let target = self.0.checked_add(distance)?;
        ((target as usize) < PILE_COUNT).then_some(PileId(target))
    }

    /// Iterate over all piles in index order.
    pub fn all() -> impl DoubleEndedIterator<Item = PileId> {
        (0..PILE_COUNT as u8).map(PileId)
    }
}

impl TryFrom<u8> for PileId {
    type Error = InvalidPileId;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        if (id as usize) < PILE_COUNT {
            Ok(Self(id))
        } else {
            Err(InvalidPileId(id))
        }
    }
}

impl From<PileId> for u8 {
    fn from(pile: PileId) -> u8 {
        pile.0
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pile {}", self.0 + 1)
    }
}

/// A card drawn this round, tagged with the pile it came from.
///
/// Only lives for one round. Reactions address drawn cards by their
/// position in the round's draw list, never by kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnCard {
    pub card: Card,
    pub pile: PileId,
}

impl DrawnCard {
    #[must_use]
    pub const fn new(card: Card, pile: PileId) -> Self {
        Self { card, pile }
    }
}

/// Terminal state of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    /// Whether the game has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}
