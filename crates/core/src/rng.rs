//! RNG module - uniform random piece generation
//!
//! Pieces are drawn uniformly and independently from the seven-shape
//! catalog (no bag). A small seedable LCG keeps sequences reproducible for
//! tests; the binary seeds it from the clock.

use crate::piece::{random_piece, Shape};

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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle with a
    /// short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Where new falling pieces come from.
pub trait PieceSource {
    fn next_piece(&mut self) -> Shape;
}

/// Scripted sources: any closure producing shapes.
impl<F> PieceSource for F
where
    F: FnMut() -> Shape,
{
    fn next_piece(&mut self) -> Shape {
        self()
    }
}

/// Uniform random draw from the catalog
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

impl PieceSource for RandomPieces {
    fn next_piece(&mut self) -> Shape {
        random_piece(&mut self.rng)
    }
}
