//! Game flow: round sequencing and the player's side of it.
//!
//! The core engine never decides anything on the player's behalf. It
//! calls into a `ReactionDecider` once per round and validates whatever
//! comes back, re-asking on a bad response.

pub mod controller;
pub mod decision;
pub mod input;

pub use controller::{advance_round, GameSummary, RoundController, RoundReport};
pub use decision::{CautiousDecider, PassiveDecider, ReactionDecider, ScriptedDecider};
pub use input::parse_reaction_input;
