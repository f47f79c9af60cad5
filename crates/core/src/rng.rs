//! RNG module - where the next piece comes from
//!
//! Pieces are drawn uniformly from the seven-entry catalog, one draw per spawn.
//! [`SimpleRng`] is a seedable LCG so that a seed fully determines a game;
//! [`FixedSequence`] replays a scripted list of kinds.

use crate::types::{PieceKind, PIECE_COUNT};

/// Supplies catalog indices for spawns.
pub trait PieceSource {
    /// Next catalog index, always in `[0, 7)`.
    fn next_index(&mut self) -> usize;

    /// Next piece kind.
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_index() % PIECE_COUNT]
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
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of a power-of-two LCG cycle quickly; draw from the high half.
        ((self.next_u32() >> 16) * max) >> 16
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for SimpleRng {
    fn next_index(&mut self) -> usize {
        self.next_range(PIECE_COUNT as u32) as usize
    }
}

/// Cycles through a fixed list of kinds.
#[derive(Debug, Clone)]
pub struct FixedSequence {
    kinds: Vec<PieceKind>,
    cursor: usize,
}

impl FixedSequence {
    /// # Panics
    ///
    /// Panics if `kinds` is empty.
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        let kinds = kinds.into();
        assert!(!kinds.is_empty(), "FixedSequence needs at least one kind");
        Self { kinds, cursor: 0 }
    }

    /// The same kind forever.
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(vec![kind])
    }
}

impl PieceSource for FixedSequence {
    fn next_index(&mut self) -> usize {
        let kind = self.kinds[self.cursor];
        self.cursor = (self.cursor + 1) % self.kinds.len();
        kind.index()
    }
}
