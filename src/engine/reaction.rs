//! Reactions: validating the player's picks, applying them, charging power.
//!
//! A selection is validated completely before anything is mutated, so a
//! rejected response leaves the game exactly as it was.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Card, DrawnCard, GameState, RandomSource, SelectionError};
use crate::events::ResolutionEvent;

/// One element of a player's reaction response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReactionPick {
    /// React to the drawn card at this position in the round's draw list.
    Card(usize),
    /// Finish selecting.
    Done,
}

/// A validated set of reactions for one round.
///
/// Picks are positions in the round's draw list, so two drawn cards of
/// the same kind are distinct picks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionSelection {
    picks: SmallVec<[usize; 2]>,
}

impl ReactionSelection {
    /// React to nothing.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Validate a response against this round's draw.
    ///
    /// An empty response, or one consisting only of `Done`, selects nothing.
    /// `Done` mixed with card picks is rejected outright.
    pub fn validate(
        drawn: &[DrawnCard],
        response: &[ReactionPick],
        max_reactions: usize,
    ) -> Result<Self, SelectionError> {
        let finished = response.contains(&ReactionPick::Done);
        let cards: SmallVec<[usize; 2]> = response
            .iter()
            .filter_map(|pick| match pick {
                ReactionPick::Card(index) => Some(*index),
                ReactionPick::Done => None,
            })
            .collect();

        if finished && !cards.is_empty() {
            return Err(SelectionError::MixedTerminator);
        }
        if cards.len() > max_reactions {
            return Err(SelectionError::TooMany {
                max: max_reactions,
                got: cards.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for &index in &cards {
            let drawn_card = drawn.get(index).ok_or(SelectionError::UnknownCard(index))?;
            if !drawn_card.card.is_reactable() {
                return Err(SelectionError::NotReactable(index));
            }
            if !seen.insert(index) {
                return Err(SelectionError::Duplicate(index));
            }
        }

        Ok(Self { picks: cards })
    }

    /// Selected positions, in pick order.
    #[must_use]
    pub fn picks(&self) -> &[usize] {
        &self.picks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// Whether the drawn card at `index` was reacted to.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.picks.contains(&index)
    }

    /// The drawn cards that were not reacted to, in draw order.
    #[must_use]
    pub fn remaining(&self, drawn: &[DrawnCard]) -> Vec<DrawnCard> {
        drawn
            .iter()
            .enumerate()
            .filter(|(index, _)| !self.contains(*index))
            .map(|(_, drawn_card)| *drawn_card)
            .collect()
    }
}

/// Apply validated reactions.
///
/// A reacted animatronic goes back into its pile and the pile is
/// reshuffled. A reacted arrow is discarded without effect.
pub fn apply_reactions<R: RandomSource>(
    state: &mut GameState<R>,
    drawn: &[DrawnCard],
    selection: &ReactionSelection,
) -> Vec<ResolutionEvent> {
    let mut events = Vec::with_capacity(selection.len());

    for &index in selection.picks() {
        let DrawnCard { card, pile } = drawn[index];
        let event = match card {
            Card::Animatronic => {
                state.piles.push_top(pile, card);
                state.piles.shuffle(pile, &mut state.rng);
                ResolutionEvent::AnimatronicReshuffled { pile }
            }
            _ => {
                state.discard(card);
                ResolutionEvent::ReactionDiscarded { card, pile }
            }
        };
        log::debug!("reaction: {}", event);
        events.push(event);
    }

    events
}

/// Roll the reaction cost die once.
pub fn roll_die<R: RandomSource>(faces: &[i64; 6], rng: &mut R) -> i64 {
    faces[rng.index(faces.len())]
}

/// Charge power for this round's reactions and return the total cost.
///
/// Free when nothing was reacted to, whatever was drawn. Otherwise one
/// die per reaction plus a surcharge for every power drain in the whole
/// draw, reacted or not.
pub fn apply_cost<R: RandomSource>(
    state: &mut GameState<R>,
    selection: &ReactionSelection,
    drawn: &[DrawnCard],
) -> i64 {
    if selection.is_empty() {
        return 0;
    }

    let faces = state.config().die_faces;
    let surcharge = state.config().power_drain_surcharge;

    let rolled: i64 = (0..selection.len())
        .map(|_| roll_die(&faces, &mut state.rng))
        .sum();
    let drains = drawn.iter().filter(|d| d.card == Card::PowerDrain).count() as i64;
    let cost = rolled + drains * surcharge;

    state.spend_power(cost);
    log::debug!(
        "reaction cost {} (dice {}, {} drains), power now {}",
        cost,
        rolled,
        drains,
        state.power()
    );
    cost
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, GameRng, PileId};
    use crate::piles::PileSet;

    fn drawn() -> Vec<DrawnCard> {
        vec![
            DrawnCard::new(Card::Animatronic, PileId::new(0)),
            DrawnCard::new(Card::EmptyRoom, PileId::new(0)),
            DrawnCard::new(Card::ArrowRight, PileId::new(1)),
            DrawnCard::new(Card::PowerDrain, PileId::new(2)),
            DrawnCard::new(Card::ArrowRight, PileId::new(3)),
        ]
    }

    #[test]
    fn test_validate_accepts_reactable_picks() {
        let selection =
            ReactionSelection::validate(&drawn(), &[ReactionPick::Card(2), ReactionPick::Card(4)], 2)
                .unwrap();

        assert_eq!(selection.picks(), &[2, 4]);
        let remaining = selection.remaining(&drawn());
        assert_eq!(remaining.len(), 3);
        assert_eq!(remaining[2], DrawnCard::new(Card::PowerDrain, PileId::new(2)));
    }

    #[test]
    fn test_validate_empty_and_done() {
        assert!(ReactionSelection::validate(&drawn(), &[], 2).unwrap().is_empty());
        assert!(ReactionSelection::validate(&drawn(), &[ReactionPick::Done], 2)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_validate_rejections() {
        let d = drawn();
        use ReactionPick::{Card as C, Done};

        assert_eq!(
            ReactionSelection::validate(&d, &[C(0), C(2), C(4)], 2),
            Err(SelectionError::TooMany { max: 2, got: 3 })
        );
        assert_eq!(
            ReactionSelection::validate(&d, &[C(1)], 2),
            Err(SelectionError::NotReactable(1))
        );
        assert_eq!(
            ReactionSelection::validate(&d, &[C(3)], 2),
            Err(SelectionError::NotReactable(3))
        );
        assert_eq!(
            ReactionSelection::validate(&d, &[C(2), C(2)], 2),
            Err(SelectionError::Duplicate(2))
        );
        assert_eq!(
            ReactionSelection::validate(&d, &[C(5)], 2),
            Err(SelectionError::UnknownCard(5))
        );
        assert_eq!(
            ReactionSelection::validate(&d, &[C(0), Done], 2),
            Err(SelectionError::MixedTerminator)
        );
    }

    #[test]
    fn test_same_kind_picks_are_distinct() {
        let selection =
            ReactionSelection::validate(&drawn(), &[ReactionPick::Card(4), ReactionPick::Card(2)], 2)
                .unwrap();

        let remaining = selection.remaining(&drawn());
        assert!(remaining.iter().all(|d| d.card != Card::ArrowRight));
    }

    #[test]
    fn test_apply_reactions() {
        let piles = PileSet::from_cards([vec![Card::EmptyRoom; 3], vec![], vec![], vec![]]);
        let mut state = GameState::from_piles(GameConfig::default(), piles, GameRng::new(1));
        let d = drawn();
        let selection =
            ReactionSelection::validate(&d, &[ReactionPick::Card(0), ReactionPick::Card(2)], 2).unwrap();

        let events = apply_reactions(&mut state, &d, &selection);

        assert_eq!(
            events,
            vec![
                ResolutionEvent::AnimatronicReshuffled { pile: PileId::new(0) },
                ResolutionEvent::ReactionDiscarded {
                    card: Card::ArrowRight,
                    pile: PileId::new(1)
                },
            ]
        );
        assert_eq!(state.piles.len(PileId::new(0)), 4);
        assert_eq!(state.piles.count(Card::Animatronic), 1);
        assert_eq!(state.discarded(), 1);
    }

    #[test]
    fn test_no_reaction_is_free() {
        let mut state = GameState::new(3);
        let cost = apply_cost(&mut state, &ReactionSelection::none(), &drawn());

        assert_eq!(cost, 0);
        assert_eq!(state.power(), 100);
    }

    #[test]
    fn test_cost_includes_every_drain() {
        let mut state = GameState::new(3);
        let d = drawn();
        let selection = ReactionSelection::validate(&d, &[ReactionPick::Card(2)], 2).unwrap();

        let cost = apply_cost(&mut state, &selection, &d);

        // One die in {0, 5, 10} plus one drain at 5
        assert!([5, 10, 15].contains(&cost));
        assert_eq!(state.power(), 100 - cost);
    }

    #[test]
    fn test_die_faces() {
        let faces = GameConfig::default().die_faces;
        let mut rng = GameRng::new(11);
        let mut counts = [0usize; 3];

        for _ in 0..6000 {
            match roll_die(&faces, &mut rng) {
                0 => counts[0] += 1,
                5 => counts[1] += 1,
                10 => counts[2] += 1,
                other => panic!("unexpected face {}", other),
            }
        }

        for count in counts {
            assert!((1700..2300).contains(&count), "skewed die: {:?}", counts);
        }
    }
}
