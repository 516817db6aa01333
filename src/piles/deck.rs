//! Deck construction and the opening deal.

use crate::core::card::{Card, PileId, PILE_COUNT};
use crate::core::config::GameConfig;
use crate::core::rng::RandomSource;

use super::PileSet;

/// Build the opening piles.
///
/// The non-animatronic cards are shuffled and dealt in contiguous runs
/// of `deal_sizes`. Animatronics are then added per `animatronic_seeding`
/// and every pile that received one is shuffled again. Piles without
/// animatronics keep their dealt order.
pub fn deal<R: RandomSource>(config: &GameConfig, rng: &mut R) -> PileSet {
    config.validate();

    let mut deck = config.deck.non_animatronics();
    rng.shuffle(&mut deck);

    let mut runs = deck.into_iter();
    let mut piles: [Vec<Card>; PILE_COUNT] = Default::default();
    for (pile, &size) in piles.iter_mut().zip(config.deal_sizes.iter()) {
        pile.extend(runs.by_ref().take(size));
    }

    let mut piles = PileSet::from_cards(piles);
    for pile in PileId::all() {
        let seeded = config.animatronic_seeding[pile.index()];
        if seeded == 0 {
            continue;
        }
        for _ in 0..seeded {
            piles.push_top(pile, Card::Animatronic);
        }
        piles.shuffle(pile, rng);
    }

    log::debug!(
        "dealt piles of {:?} cards",
        PileId::all().map(|pile| piles.len(pile)).collect::<Vec<_>>()
    );
    piles
}
