//! The player: whoever decides which drawn cards to react to.
//!
//! The engine asks once per round (only while power is positive) and
//! re-asks until the response validates. Deciders never touch the game
//! state; they see the round's draw and the current power level.

use std::collections::VecDeque;

use crate::core::{Card, DrawnCard, SelectionError};
use crate::engine::ReactionPick;

/// Source of reaction decisions.
pub trait ReactionDecider {
    /// Pick up to the round's limit of drawn cards to react to.
    ///
    /// Picks are positions in `drawn`. An empty response reacts to nothing.
    fn choose(&mut self, drawn: &[DrawnCard], power: i64) -> Vec<ReactionPick>;

    /// Called when the last response was rejected, before asking again.
    fn rejected(&mut self, _error: &SelectionError) {}
}

impl<D: ReactionDecider + ?Sized> ReactionDecider for &mut D {
    fn choose(&mut self, drawn: &[DrawnCard], power: i64) -> Vec<ReactionPick> {
        (**self).choose(drawn, power)
    }

    fn rejected(&mut self, error: &SelectionError) {
        (**self).rejected(error);
    }
}

impl<D: ReactionDecider + ?Sized> ReactionDecider for Box<D> {
    fn choose(&mut self, drawn: &[DrawnCard], power: i64) -> Vec<ReactionPick> {
        (**self).choose(drawn, power)
    }

    fn rejected(&mut self, error: &SelectionError) {
        (**self).rejected(error);
    }
}

/// Never reacts.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassiveDecider;

impl ReactionDecider for PassiveDecider {
    fn choose(&mut self, _drawn: &[DrawnCard], _power: i64) -> Vec<ReactionPick> {
        Vec::new()
    }
}

/// Spends power only on cards that can end the game.
///
/// Priority: animatronics about to reach or leave the last pile (highest
/// pile first), then arrows that would push a card off the board. Holds
/// back entirely once power falls to `reserve`.
#[derive(Clone, Copy, Debug)]
pub struct CautiousDecider {
    /// Power kept in hand; no reactions at or below it.
    pub reserve: i64,
    /// Reactions to ask for per round.
    pub max_reactions: usize,
}

impl Default for CautiousDecider {
    fn default() -> Self {
        Self {
            reserve: 0,
            max_reactions: 2,
        }
    }
}

impl CautiousDecider {
    pub fn new(reserve: i64) -> Self {
        Self {
            reserve,
            ..Self::default()
        }
    }

    fn threat(drawn: &DrawnCard) -> Option<usize> {
        match drawn.card {
            Card::Animatronic if drawn.pile.index() >= 2 => Some(10 + drawn.pile.index()),
            Card::ArrowRight | Card::ArrowDoubleRight => {
                let distance = drawn.card.push_distance()?;
                drawn.pile.offset(distance).is_none().then_some(drawn.pile.index())
            }
            _ => None,
        }
    }
}

impl ReactionDecider for CautiousDecider {
    fn choose(&mut self, drawn: &[DrawnCard], power: i64) -> Vec<ReactionPick> {
        if power <= self.reserve {
            return Vec::new();
        }

        let mut threats: Vec<(usize, usize)> = drawn
            .iter()
            .enumerate()
            .filter_map(|(index, d)| Self::threat(d).map(|level| (level, index)))
            .collect();
        threats.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

        threats
            .into_iter()
            .take(self.max_reactions)
            .map(|(_, index)| ReactionPick::Card(index))
            .collect()
    }
}

/// Replays queued responses, then stops reacting.
///
/// Rejections are recorded so tests can assert on them.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDecider {
    responses: VecDeque<Vec<ReactionPick>>,
    /// Every rejection reported by the engine, in order.
    pub rejections: Vec<SelectionError>,
    /// How many times the engine asked.
    pub requests: usize,
}

impl ScriptedDecider {
    pub fn new(responses: impl IntoIterator<Item = Vec<ReactionPick>>) -> Self {
        Self {
            responses: responses.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Responses not yet handed out.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.responses.len()
    }
}

impl ReactionDecider for ScriptedDecider {
    fn choose(&mut self, _drawn: &[DrawnCard], _power: i64) -> Vec<ReactionPick> {
        self.requests += 1;
        self.responses.pop_front().unwrap_or_default()
    }

    fn rejected(&mut self, error: &SelectionError) {
        self.rejections.push(error.clone());
    }
}
