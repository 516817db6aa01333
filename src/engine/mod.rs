//! The per-round card pipeline.
//!
//! ## Steps
//!
//! 1. **Draw** (`draw_for_round`): one card per pile, animatronics chain
//! 2. **React** (`ReactionSelection`, `apply_reactions`): up to two
//!    reactable cards are dealt with early
//! 3. **Cost** (`apply_cost`): dice plus power-drain surcharge
//! 4. **Resolve** (`resolve_remaining`): everything else, last pile first
//!
//! Each step borrows `GameState` mutably and returns what it produced;
//! none of them keep pile contents between calls. `consolidate` is step
//! zero, run before the draw from the second round on. Sequencing lives in
//! `rules::RoundController`.
//!
//! ## Example
//!
//! ```
//! use night_shift::core::GameState;
//! use night_shift::engine::{apply_cost, draw_for_round, resolve_remaining, ReactionSelection};
//!
//! let mut state = GameState::new(42);
//! let drawn = draw_for_round(&mut state);
//! let selection = ReactionSelection::none();
//! assert_eq!(apply_cost(&mut state, &selection, &drawn), 0);
//! let _events = resolve_remaining(&mut state, selection.remaining(&drawn));
//! ```

mod draw;
mod reaction;
mod resolution;

pub use draw::{consolidate, draw_for_round};
pub use reaction::{apply_cost, apply_reactions, roll_die, ReactionPick, ReactionSelection};
pub use resolution::{resolve_remaining, ResolutionQueue};
