//! Core engine types: cards, piles ids, configuration, errors, RNG, state.
//!
//! Everything here is independent of the round pipeline. The engine and
//! rules modules build on these types.

pub mod card;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use card::{Card, DrawnCard, Outcome, PileId, PILE_COUNT};
pub use config::{DeckComposition, GameConfig};
pub use error::{EngineError, InvalidPileId, SelectionError};
pub use rng::{GameRng, GameRngState, RandomSource};
pub use state::{GameSnapshot, GameState};
