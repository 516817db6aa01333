//! The four ordered piles.
//!
//! Position 0 of each pile is its top: the next card drawn. Piles are
//! `im::Vector`s so a whole `PileSet` clones in O(1).

use im::Vector;
use rustc_hash::FxHashMap;
use std::ops::Index;

use crate::core::card::{Card, PileId, PILE_COUNT};
use crate::core::rng::RandomSource;

/// Owns the cards of all four piles.
///
/// ## Usage
///
/// ```
/// use night_shift::core::{Card, PileId};
/// use night_shift::piles::PileSet;
///
/// let mut piles = PileSet::from_cards([
///     vec![],
///     vec![Card::EmptyRoom],
///     vec![],
///     vec![Card::ArrowDown],
/// ]);
///
/// // Compaction pushes non-empty piles to the right.
/// assert!(piles.consolidate());
/// assert_eq!(piles.top(PileId::new(2)), Some(Card::EmptyRoom));
/// assert!(piles.is_empty(PileId::new(0)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PileSet {
    piles: [Vector<Card>; PILE_COUNT],
}

impl PileSet {
    /// Create four empty piles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build piles from explicit card lists, top card first.
    #[must_use]
    pub fn from_cards(piles: [Vec<Card>; PILE_COUNT]) -> Self {
        Self {
            piles: piles.map(Vector::from),
        }
    }

    /// Copy the piles out as plain vectors, top card first.
    #[must_use]
    pub fn to_vecs(&self) -> [Vec<Card>; PILE_COUNT] {
        std::array::from_fn(|i| self.piles[i].iter().copied().collect())
    }

    /// Number of cards in a pile.
    #[must_use]
    pub fn len(&self, pile: PileId) -> usize {
        self.piles[pile.index()].len()
    }

    /// Check if a pile has no cards.
    #[must_use]
    pub fn is_empty(&self, pile: PileId) -> bool {
        self.piles[pile.index()].is_empty()
    }

    /// The next card to be drawn from a pile.
    #[must_use]
    pub fn top(&self, pile: PileId) -> Option<Card> {
        self.piles[pile.index()].front().copied()
    }

    /// Remove and return the top card of a pile.
    pub fn pop_top(&mut self, pile: PileId) -> Option<Card> {
        self.piles[pile.index()].pop_front()
    }

    /// Place a card on top of a pile; it becomes the next card drawn.
    pub fn push_top(&mut self, pile: PileId, card: Card) {
        self.piles[pile.index()].push_front(card);
    }

    /// Insert a card at a position (0 = top).
    ///
    /// Panics if `position` is past the bottom of the pile.
    pub fn insert_at(&mut self, pile: PileId, position: usize, card: Card) {
        let cards = &mut self.piles[pile.index()];
        assert!(
            position <= cards.len(),
            "Position {} past the bottom of {} ({} cards)",
            position,
            pile,
            cards.len()
        );
        cards.insert(position, card);
    }

    /// Insert a card at a uniformly random position, bottom included.
    ///
    /// Returns the chosen position.
    pub fn insert_random<R: RandomSource>(&mut self, pile: PileId, card: Card, rng: &mut R) -> usize {
        let position = rng.index(self.len(pile) + 1);
        self.insert_at(pile, position, card);
        position
    }

    /// Shuffle one pile in place.
    pub fn shuffle<R: RandomSource>(&mut self, pile: PileId, rng: &mut R) {
        let cards = &mut self.piles[pile.index()];
        let mut shuffled: Vec<Card> = cards.iter().copied().collect();
        rng.shuffle(&mut shuffled);
        *cards = Vector::from(shuffled);
    }

    /// Compact the piles toward the last one.
    ///
    /// Non-empty piles keep their relative order and their internal card
    /// order; the rightmost non-empty pile lands in the last slot, the
    /// next one to its left, and so on. Leftover low slots end up empty.
    ///
    /// Returns whether anything moved.
    pub fn consolidate(&mut self) -> bool {
        let occupied: Vec<Vector<Card>> = self
            .piles
            .iter()
            .filter(|pile| !pile.is_empty())
            .cloned()
            .collect();
        let first = PILE_COUNT - occupied.len();

        let mut compacted: [Vector<Card>; PILE_COUNT] = Default::default();
        for (slot, pile) in compacted.iter_mut().skip(first).zip(occupied) {
            *slot = pile;
        }

        let changed = compacted != self.piles;
        self.piles = compacted;
        changed
    }

    /// Check that no empty pile sits to the right of a non-empty one.
    #[must_use]
    pub fn is_compact(&self) -> bool {
        self.piles
            .iter()
            .skip_while(|pile| pile.is_empty())
            .all(|pile| !pile.is_empty())
    }

    /// Total cards across all piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.piles.iter().map(Vector::len).sum()
    }

    /// Copies of `card` across all piles.
    #[must_use]
    pub fn count(&self, card: Card) -> usize {
        self.piles
            .iter()
            .flat_map(|pile| pile.iter())
            .filter(|&&c| c == card)
            .count()
    }

    /// Count cards by kind across all piles.
    #[must_use]
    pub fn census(&self) -> FxHashMap<Card, usize> {
        let mut counts = FxHashMap::default();
        for &card in self.piles.iter().flat_map(|pile| pile.iter()) {
            *counts.entry(card).or_insert(0) += 1;
        }
        counts
    }
}

impl Index<PileId> for PileSet {
    type Output = Vector<Card>;

    fn index(&self, pile: PileId) -> &Self::Output {
        &self.piles[pile.index()]
    }
}
