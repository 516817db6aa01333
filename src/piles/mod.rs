//! Pile storage: the four ordered piles and the opening deal.
//!
//! ## Key Types
//!
//! - `PileSet`: four `im::Vector` piles, top card at position 0
//! - `deal`: shuffle, deal 10/11/11/12, seed animatronics 2/1/1/0
//!
//! Consolidation lives on `PileSet` because it only rearranges whole
//! piles and never looks at card kinds.

pub mod deck;
pub mod pile_set;

pub use deck::deal;
pub use pile_set::PileSet;
