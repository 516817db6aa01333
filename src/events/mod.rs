//! Observability events emitted while a round is played.

pub mod event;

pub use event::{LossCause, ResolutionEvent};
