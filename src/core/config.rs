//! Game configuration.
//!
//! `GameConfig::default()` is the standard game: 48 cards, four piles,
//! twelve rounds, 100 power. Every number the engine uses lives here so
//! variants can be simulated without touching engine code.

use serde::{Deserialize, Serialize};

use super::card::{Card, PILE_COUNT};

/// How many copies of each card kind the deck holds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckComposition {
    pub animatronic: usize,
    pub empty_room: usize,
    pub power_drain: usize,
    pub arrow_down: usize,
    pub arrow_right: usize,
    pub arrow_double_right: usize,
}

impl Default for DeckComposition {
    fn default() -> Self {
        Self {
            animatronic: 4,
            empty_room: 16,
            power_drain: 8,
            arrow_down: 8,
            arrow_right: 6,
            arrow_double_right: 6,
        }
    }
}

impl DeckComposition {
    /// Number of copies of `card`.
    #[must_use]
    pub fn count(&self, card: Card) -> usize {
        match card {
            Card::Animatronic => self.animatronic,
            Card::EmptyRoom => self.empty_room,
            Card::PowerDrain => self.power_drain,
            Card::ArrowDown => self.arrow_down,
            Card::ArrowRight => self.arrow_right,
            Card::ArrowDoubleRight => self.arrow_double_right,
        }
    }

    /// Total deck size.
    #[must_use]
    pub fn total(&self) -> usize {
        Card::ALL.iter().map(|&card| self.count(card)).sum()
    }

    /// Every non-animatronic card, grouped by kind in `Card::ALL` order.
    #[must_use]
    pub fn non_animatronics(&self) -> Vec<Card> {
        Card::ALL
            .iter()
            .filter(|&&card| card != Card::Animatronic)
            .flat_map(|&card| std::iter::repeat(card).take(self.count(card)))
            .collect()
    }
}

/// Game configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Power at the start of the game.
    pub starting_power: i64,

    /// Rounds to survive for a win.
    pub rounds: u32,

    /// Maximum reactions per round.
    pub max_reactions: usize,

    /// Faces of the reaction cost die.
    pub die_faces: [i64; 6],

    /// Extra cost per power drain drawn in a round with at least one reaction.
    pub power_drain_surcharge: i64,

    /// Deck contents.
    pub deck: DeckComposition,

    /// Non-animatronic cards dealt to each pile.
    pub deal_sizes: [usize; PILE_COUNT],

    /// Animatronics shuffled into each pile after the deal.
    pub animatronic_seeding: [usize; PILE_COUNT],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_power: 100,
            rounds: 12,
            max_reactions: 2,
            die_faces: [0, 0, 5, 5, 10, 10],
            power_drain_surcharge: 5,
            deck: DeckComposition::default(),
            deal_sizes: [10, 11, 11, 12],
            animatronic_seeding: [2, 1, 1, 0],
        }
    }
}

impl GameConfig {
    /// Set the starting power.
    pub fn with_starting_power(mut self, power: i64) -> Self {
        self.starting_power = power;
        self
    }

    /// Set the number of rounds to survive.
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Set the per-round reaction limit.
    pub fn with_max_reactions(mut self, max: usize) -> Self {
        self.max_reactions = max;
        self
    }

    /// Set the deck composition and matching deal sizes.
    pub fn with_deck(mut self, deck: DeckComposition, deal_sizes: [usize; PILE_COUNT]) -> Self {
        self.deck = deck;
        self.deal_sizes = deal_sizes;
        self
    }

    /// Total number of cards in play.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.total()
    }

    /// Panics if the configuration cannot describe a playable game.
    ///
    /// A bad configuration is a programming error, not a recoverable one.
    pub fn validate(&self) {
        let dealt: usize = self.deal_sizes.iter().sum();
        let seeded: usize = self.animatronic_seeding.iter().sum();

        assert!(self.rounds > 0, "Game must last at least one round");
        assert!(
            i32::try_from(self.rounds).is_ok(),
            "Round count {} does not fit the round counter",
            self.rounds
        );
        assert_eq!(
            self.deck.animatronic, seeded,
            "Animatronic count must match the seeding total"
        );
        assert_eq!(
            self.deck.total() - self.deck.animatronic,
            dealt,
            "Deal sizes must cover every non-animatronic card"
        );
        assert_eq!(
            self.animatronic_seeding[PILE_COUNT - 1], 0,
            "The last pile must not be seeded with animatronics"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        config.validate();

        assert_eq!(config.deck_size(), 48);
        assert_eq!(config.starting_power, 100);
        assert_eq!(config.rounds, 12);
        assert_eq!(config.max_reactions, 2);
        assert_eq!(config.deck.non_animatronics().len(), 44);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_starting_power(10)
            .with_rounds(3)
            .with_max_reactions(1);

        assert_eq!(config.starting_power, 10);
        assert_eq!(config.rounds, 3);
        assert_eq!(config.max_reactions, 1);
    }

    #[test]
    #[should_panic(expected = "Deal sizes")]
    fn test_mismatched_deal_panics() {
        GameConfig::default()
            .with_deck(DeckComposition::default(), [10, 10, 10, 10])
            .validate();
    }

    #[test]
    #[should_panic(expected = "round counter")]
    fn test_oversized_round_count_panics() {
        GameConfig::default().with_rounds(u32::MAX).validate();
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_starting_power(50);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
