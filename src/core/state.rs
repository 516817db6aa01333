//! Game state.
//!
//! `GameState` is the single owner of every card on the board, the power
//! level, the round counter and the outcome. Engine functions borrow it
//! mutably for the duration of one step; nothing else keeps pile contents.
//!
//! ## Round counter
//!
//! `-1` before the first round, `0..rounds` while playing, `rounds` once
//! the game was survived.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{Card, Outcome, PILE_COUNT};
use super::config::GameConfig;
use super::rng::{GameRng, RandomSource};
use crate::piles::{self, PileSet};

/// Full game state, generic over the randomness source.
#[derive(Clone, Debug)]
pub struct GameState<R = GameRng> {
    /// The four piles.
    pub piles: PileSet,

    /// Deterministic RNG.
    pub rng: R,

    config: GameConfig,
    power: i64,
    round: i32,
    outcome: Outcome,

    /// Cards permanently removed from play.
    discarded: usize,

    /// Cards on the board when the game was set up.
    card_total: usize,

    /// Animatronics on the board when the game was set up.
    animatronic_total: usize,
}

impl GameState<GameRng> {
    /// Deal a standard game from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::new_game(GameConfig::default(), GameRng::new(seed))
    }

    /// Clone the game for what-if analysis.
    ///
    /// The clone gets a forked RNG, so the two games diverge from here.
    /// Takes `&mut self` because forking advances the fork counter.
    #[must_use]
    pub fn clone_state(&mut self) -> Self {
        let rng = self.rng.fork();
        Self {
            piles: self.piles.clone(),
            rng,
            config: self.config.clone(),
            power: self.power,
            round: self.round,
            outcome: self.outcome,
            discarded: self.discarded,
            card_total: self.card_total,
            animatronic_total: self.animatronic_total,
        }
    }
}

impl<R: RandomSource> GameState<R> {
    /// Build the deck, deal it, and return a game before its first round.
    #[must_use]
    pub fn new_game(config: GameConfig, mut rng: R) -> Self {
        let piles = piles::deal(&config, &mut rng);
        Self::from_piles(config, piles, rng)
    }

    /// Start a game from an explicit arrangement.
    ///
    /// Conservation is tracked against the cards given here, so scenario
    /// setups with a handful of cards behave like a full deal.
    #[must_use]
    pub fn from_piles(config: GameConfig, piles: PileSet, rng: R) -> Self {
        Self {
            card_total: piles.total_cards(),
            animatronic_total: piles.count(Card::Animatronic),
            power: config.starting_power,
            round: -1,
            outcome: Outcome::InProgress,
            discarded: 0,
            piles,
            rng,
            config,
        }
    }
}

impl<R> GameState<R> {
    /// The configuration this game was dealt with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current power level. May be negative.
    #[must_use]
    pub fn power(&self) -> i64 {
        self.power
    }

    /// Current round (`-1` before the first).
    #[must_use]
    pub fn round(&self) -> i32 {
        self.round
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Whether the game is still running.
    #[must_use]
    pub fn in_progress(&self) -> bool {
        !self.outcome.is_terminal()
    }

    /// Cards permanently removed from play.
    #[must_use]
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    /// Whether the player may react this round.
    #[must_use]
    pub fn can_react(&self) -> bool {
        self.power > 0
    }

    // === Mutation (engine only) ===

    /// Subtract a reaction cost. Power is never floored.
    pub(crate) fn spend_power(&mut self, cost: i64) {
        debug_assert!(self.in_progress(), "Spending power after the game ended");
        self.power -= cost;
    }

    /// Record a card leaving play for good.
    pub(crate) fn discard(&mut self, card: Card) {
        debug_assert_ne!(card, Card::Animatronic, "Animatronics are never discarded");
        self.discarded += 1;
    }

    pub(crate) fn mark_lost(&mut self) {
        self.outcome = Outcome::Lost;
    }

    /// Move to the next round, winning once the last round is behind us.
    pub(crate) fn step_round(&mut self) -> Outcome {
        if self.outcome.is_terminal() {
            return self.outcome;
        }
        self.round += 1;
        if i64::from(self.round) >= i64::from(self.config.rounds) {
            self.outcome = Outcome::Won;
        }
        self.outcome
    }

    // === Invariants ===

    /// Check card and animatronic conservation.
    ///
    /// Only meaningful between rounds of a game that is not lost; drawn
    /// cards are off the board while a round is being played.
    #[must_use]
    pub fn check_invariants(&self) -> bool {
        self.piles.total_cards() + self.discarded == self.card_total
            && self.piles.count(Card::Animatronic) == self.animatronic_total
    }

    /// Cards on the board by kind.
    #[must_use]
    pub fn census(&self) -> FxHashMap<Card, usize> {
        self.piles.census()
    }

    /// Capture the observable state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            piles: self.piles.to_vecs(),
            power: self.power,
            round: self.round,
            outcome: self.outcome,
            discarded: self.discarded,
        }
    }
}

/// Serializable view of a game between steps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Pile contents, top card first.
    pub piles: [Vec<Card>; PILE_COUNT],
    pub power: i64,
    pub round: i32,
    pub outcome: Outcome,
    pub discarded: usize,
}
