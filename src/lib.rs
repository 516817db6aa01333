//! # night-shift
//!
//! A deterministic single-player card-elimination engine.
//!
//! Forty-eight cards sit in four ordered piles. Each round one card is
//! drawn per pile (animatronics keep the pile drawing), the player may
//! react to up to two of them at a power cost, and everything else
//! resolves: arrows shove cards to the right, animatronics creep toward
//! the last pile. An animatronic leaving the board loses the game;
//! surviving twelve rounds wins it.
//!
//! ## Design Principles
//!
//! 1. **Single owner**: `GameState` owns every pile, the power level and
//!    the outcome. Engine steps borrow it for one call and keep nothing.
//!
//! 2. **Injected randomness**: shuffles, dice and insert positions all go
//!    through one `RandomSource`, seeded `GameRng` by default.
//!
//! 3. **Explicit ordering**: chained card resolution is a work queue,
//!    not recursion, so the resolution order can be tested on its own.
//!
//! ## Modules
//!
//! - `core`: Cards, pile ids, configuration, errors, RNG, game state
//! - `piles`: The four piles, consolidation, the opening deal
//! - `engine`: Draw, reaction, cost and resolution steps
//! - `events`: Observability events emitted by the engine
//! - `rules`: Round controller and reaction deciders

pub mod core;
pub mod engine;
pub mod events;
pub mod piles;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Card, DrawnCard, Outcome, PileId, PILE_COUNT,
    DeckComposition, GameConfig,
    EngineError, InvalidPileId, SelectionError,
    GameRng, GameRngState, RandomSource,
    GameSnapshot, GameState,
};

pub use crate::piles::{deal, PileSet};

pub use crate::engine::{
    apply_cost, apply_reactions, consolidate, draw_for_round, resolve_remaining,
    ReactionPick, ReactionSelection, ResolutionQueue,
};

pub use crate::events::{LossCause, ResolutionEvent};

pub use crate::rules::{
    advance_round, parse_reaction_input,
    GameSummary, RoundController, RoundReport,
    CautiousDecider, PassiveDecider, ReactionDecider, ScriptedDecider,
};
