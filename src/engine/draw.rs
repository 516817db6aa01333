//! Per-round card acquisition.

use crate::core::{Card, DrawnCard, GameState, PileId};

/// Step zero of every round after the first: compact the piles.
///
/// Returns whether anything moved.
pub fn consolidate<R>(state: &mut GameState<R>) -> bool {
    let changed = state.piles.consolidate();
    if changed {
        log::debug!("piles consolidated");
    }
    changed
}

/// Draw this round's cards.
///
/// Piles are visited in index order. Each non-empty pile gives up its top
/// card; an animatronic keeps the pile drawing until a non-animatronic
/// comes up or the pile runs out. Every popped card is returned, tagged
/// with its pile, in the order it was drawn.
pub fn draw_for_round<R>(state: &mut GameState<R>) -> Vec<DrawnCard> {
    let mut drawn = Vec::new();

    for pile in PileId::all() {
        while let Some(card) = state.piles.pop_top(pile) {
            drawn.push(DrawnCard::new(card, pile));
            if card != Card::Animatronic {
                break;
            }
        }
    }

    log::debug!(
        "drew {} cards: {:?}",
        drawn.len(),
        drawn.iter().map(|d| d.card).collect::<Vec<_>>()
    );
    drawn
}
