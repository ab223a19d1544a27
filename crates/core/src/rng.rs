//! RNG module - piece type generation
//!
//! New pieces are drawn uniformly from the seven shapes. The randomness comes
//! from a small seeded LCG so that a given seed always replays the same game.
//! A fixed-sequence source is provided for deterministic tests and benches.

use crate::types::ShapeType;

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
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Where new pieces come from.
pub trait PieceSource {
    /// Shape type of the next piece to create.
    fn next_kind(&mut self) -> ShapeType;
}

/// Uniform random choice among the seven shapes.
#[derive(Debug, Clone)]
pub struct RandomPieces {
    rng: SimpleRng,
}

impl RandomPieces {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl Default for RandomPieces {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for RandomPieces {
    fn next_kind(&mut self) -> ShapeType {
        let idx = self.rng.next_range(ShapeType::ALL.len() as u32) as usize;
        ShapeType::ALL[idx]
    }
}

/// Cycles through a fixed list of shapes.
#[derive(Debug, Clone)]
pub struct SequencePieces {
    kinds: Vec<ShapeType>,
    index: usize,
}

impl SequencePieces {
    /// `kinds` must not be empty.
    pub fn new(kinds: Vec<ShapeType>) -> Self {
        assert!(!kinds.is_empty(), "piece sequence must not be empty");
        Self { kinds, index: 0 }
    }

    /// The same shape, forever.
    pub fn repeat(kind: ShapeType) -> Self {
        Self::new(vec![kind])
    }
}

impl PieceSource for SequencePieces {
    fn next_kind(&mut self) -> ShapeType {
        let kind = self.kinds[self.index % self.kinds.len()];
        self.index = self.index.wrapping_add(1);
        kind
    }
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_kind(&mut self) -> ShapeType {
        (**self).next_kind()
    }
}
