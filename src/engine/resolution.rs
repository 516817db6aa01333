//! Resolution of unreacted cards.
//!
//! Cards resolve from the last pile toward the first. A down arrow's
//! replacement card joins the queue instead of recursing, slotted ahead
//! of every queued card from a lower pile, so the order stays explicit.
//! Resolution stops for good the moment the game is lost.

use std::collections::VecDeque;

use crate::core::{Card, DrawnCard, GameState, PileId, RandomSource};
use crate::events::{LossCause, ResolutionEvent};

/// Pending cards, ordered by origin pile, highest first.
///
/// Cards from the same pile keep their draw order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolutionQueue {
    pending: VecDeque<DrawnCard>,
}

impl ResolutionQueue {
    /// Order a round's remaining cards for resolution.
    #[must_use]
    pub fn new(mut remaining: Vec<DrawnCard>) -> Self {
        remaining.sort_by(|a, b| b.pile.cmp(&a.pile));
        Self {
            pending: remaining.into(),
        }
    }

    /// Queue a card ahead of every pending card from a lower pile.
    pub fn enqueue(&mut self, drawn: DrawnCard) {
        let position = self
            .pending
            .iter()
            .position(|queued| queued.pile < drawn.pile)
            .unwrap_or(self.pending.len());
        self.pending.insert(position, drawn);
    }

    /// Take the next card to resolve.
    pub fn pop(&mut self) -> Option<DrawnCard> {
        self.pending.pop_front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pending cards in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = &DrawnCard> {
        self.pending.iter()
    }
}

/// Resolve every card that was not reacted to.
///
/// Returns the events in the order they happened. If the game is lost,
/// the loss event is the last one and the remaining queue is dropped.
pub fn resolve_remaining<R: RandomSource>(
    state: &mut GameState<R>,
    remaining: Vec<DrawnCard>,
) -> Vec<ResolutionEvent> {
    let mut queue = ResolutionQueue::new(remaining);
    let mut events = Vec::new();

    while let Some(drawn) = queue.pop() {
        resolve_card(state, drawn, &mut queue, &mut events);
        if !state.in_progress() {
            log::info!("round abandoned with {} cards unresolved", queue.len());
            break;
        }
    }

    events
}

fn resolve_card<R: RandomSource>(
    state: &mut GameState<R>,
    drawn: DrawnCard,
    queue: &mut ResolutionQueue,
    events: &mut Vec<ResolutionEvent>,
) {
    let DrawnCard { card, pile } = drawn;

    match card {
        Card::EmptyRoom | Card::PowerDrain => state.discard(card),

        Card::Animatronic => match pile.offset(1) {
            Some(to) => {
                let position = state.piles.insert_random(to, card, &mut state.rng);
                emit(events, ResolutionEvent::AnimatronicMoved { from: pile, to, position });
            }
            None => lose(state, events, pile, LossCause::Escaped),
        },

        Card::ArrowDown => {
            match state.piles.pop_top(pile) {
                Some(replacement) => {
                    emit(events, ResolutionEvent::ReplacementDrawn { card: replacement, pile });
                    queue.enqueue(DrawnCard::new(replacement, pile));
                }
                None => emit(events, ResolutionEvent::PileEmpty { pile }),
            }
            state.discard(card);
        }

        Card::ArrowRight | Card::ArrowDoubleRight => {
            let distance = card.push_distance().unwrap_or(1);
            push_top_card(state, events, pile, distance);
            state.discard(card);
        }
    }
}

/// Move a pile's top card `distance` piles to the right, face down.
///
/// Past the last pile the card is revealed and leaves play instead;
/// an animatronic revealed this way loses the game.
fn push_top_card<R: RandomSource>(
    state: &mut GameState<R>,
    events: &mut Vec<ResolutionEvent>,
    pile: PileId,
    distance: u8,
) {
    let Some(top) = state.piles.pop_top(pile) else {
        emit(events, ResolutionEvent::PileEmpty { pile });
        return;
    };

    match pile.offset(distance) {
        Some(to) => {
            state.piles.push_top(to, top);
            emit(events, ResolutionEvent::CardPushed { from: pile, to });
        }
        None => {
            emit(events, ResolutionEvent::CardRevealed { card: top, pile });
            if top == Card::Animatronic {
                lose(state, events, pile, LossCause::PushedOff);
            } else {
                state.discard(top);
            }
        }
    }
}

fn lose<R>(state: &mut GameState<R>, events: &mut Vec<ResolutionEvent>, pile: PileId, cause: LossCause) {
    state.mark_lost();
    emit(events, ResolutionEvent::LossTriggered { pile, cause });
}

fn emit(events: &mut Vec<ResolutionEvent>, event: ResolutionEvent) {
    log::debug!("{}", event);
    events.push(event);
}
