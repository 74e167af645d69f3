//! RNG module - 7-bag random piece generation
//!
//! Each bag holds one of each piece (I, O, T, S, Z, J, L), shuffled with
//! Fisher-Yates. Draws walk the bag; once it is exhausted a fresh permutation
//! is generated and the cursor starts over.
//!
//! The random source is a trait so callers can inject a seeded or scripted
//! generator. [`SimpleRng`] is the default, a small LCG.

use log::trace;

use crate::types::PieceKind;

/// Source of uniform integers used for shuffling.
pub trait RandomSource {
    /// Random value in `[0, max)`. `max` is never zero.
    fn next_range(&mut self, max: u32) -> u32;

    /// Shuffle a slice using Fisher-Yates
    fn shuffle<T>(&mut self, slice: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current internal state; feeding it to `new` resumes the same sequence.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_range(&mut self, max: u32) -> u32 {
        // Low bits of a power-of-two LCG have short periods.
        (self.next_u32() >> 16) % max
    }
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct PieceBag<R = SimpleRng> {
    /// Current bag of pieces
    bag: [PieceKind; 7],
    /// Index into current bag
    cursor: usize,
    rng: R,
}

impl<R: RandomSource> PieceBag<R> {
    pub fn new(rng: R) -> Self {
        let mut bag = Self {
            bag: PieceKind::ALL,
            cursor: 0,
            rng,
        };
        bag.refill();
        bag
    }

    /// Generate a new shuffled bag
    fn refill(&mut self) {
        self.bag = PieceKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.cursor = 0;
        trace!("bag refilled: {:?}", self.bag);
    }

    /// Draw the next piece, reshuffling first if the bag is spent.
    pub fn draw(&mut self) -> PieceKind {
        if self.cursor >= self.bag.len() {
            self.refill();
        }

        let piece = self.bag[self.cursor];
        self.cursor += 1;
        piece
    }

    /// Throw away the rest of the current bag and start a fresh one.
    pub fn reset(&mut self) {
        self.refill();
    }

    /// Pieces still waiting in the current bag.
    pub fn remaining(&self) -> &[PieceKind] {
        &self.bag[self.cursor..]
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }
}

impl<R: RandomSource + Clone> PieceBag<R> {
    /// Peek at the next piece without consuming it.
    ///
    /// When the bag is spent, the next bag is previewed on a clone of the
    /// RNG so the following `draw()` yields the same kind.
    pub fn peek(&self) -> PieceKind {
        if let Some(&kind) = self.bag.get(self.cursor) {
            return kind;
        }

        let mut preview_rng = self.rng.clone();
        let mut next_bag = PieceKind::ALL;
        preview_rng.shuffle(&mut next_bag);
        next_bag[0]
    }
}

impl Default for PieceBag<SimpleRng> {
    fn default() -> Self {
        Self::new(SimpleRng::new(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Always picks the top index, which leaves a bag in catalogue order.
    #[derive(Debug, Clone)]
    struct NoShuffle;

    impl RandomSource for NoShuffle {
        fn next_range(&mut self, max: u32) -> u32 {
            max - 1
        }
    }

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_remapped() {
        assert_eq!(SimpleRng::new(0).state(), 1);
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for max in 1..50 {
            assert!(rng.next_range(max) < max);
        }
    }

    #[test]
    fn test_scripted_source_keeps_catalogue_order() {
        let mut bag = PieceBag::new(NoShuffle);
        let drawn: Vec<_> = (0..14).map(|_| bag.draw()).collect();
        assert_eq!(&drawn[..7], &PieceKind::ALL);
        assert_eq!(&drawn[7..], &PieceKind::ALL);
    }

    #[test]
    fn test_borrowed_source_drives_bag() {
        let mut source = NoShuffle;
        let mut bag = PieceBag::new(&mut source);
        assert_eq!(bag.draw(), PieceKind::I);
    }

    #[test]
    fn test_peek_matches_draw_across_refill() {
        let mut bag = PieceBag::new(SimpleRng::new(1));
        for _ in 0..20 {
            let peeked = bag.peek();
            assert_eq!(peeked, bag.draw());
        }
    }

    #[test]
    fn test_remaining_shrinks_then_refills() {
        let mut bag = PieceBag::new(SimpleRng::new(3));
        assert_eq!(bag.remaining().len(), 7);
        for _ in 0..7 {
            bag.draw();
        }
        assert!(bag.remaining().is_empty());
        bag.draw();
        assert_eq!(bag.remaining().len(), 6);
    }

    #[test]
    fn test_reset_starts_full_bag() {
        let mut bag = PieceBag::new(SimpleRng::new(3));
        bag.draw();
        bag.draw();
        bag.reset();
        assert_eq!(bag.remaining().len(), 7);
    }

    proptest! {
        #[test]
        fn every_bag_holds_each_kind_once(seed in any::<u32>(), bags in 1usize..8) {
            let mut bag = PieceBag::new(SimpleRng::new(seed));
            for _ in 0..bags {
                let mut drawn: Vec<_> = (0..7).map(|_| bag.draw()).collect();
                drawn.sort_by_key(|k| PieceKind::ALL.iter().position(|a| a == k));
                prop_assert_eq!(drawn.as_slice(), &PieceKind::ALL[..]);
            }
        }
    }
}
