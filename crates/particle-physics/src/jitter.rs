//! Randomness source for the collision nudge
//!
//! Collisions add a tiny symmetric velocity perturbation in a random direction
//! so stacked bodies do not settle into a perfectly stable state. The direction
//! comes from a [`Jitter`] so tests can inject exact angles.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

/// Supplies one angle in `[0, 2π)` per collision impulse
pub trait Jitter {
    fn next_angle(&mut self) -> f32;
}

impl<J: Jitter + ?Sized> Jitter for &mut J {
    fn next_angle(&mut self) -> f32 {
        (**self).next_angle()
    }
}

/// Uniform angles drawn from any `rand` generator
#[derive(Debug, Clone)]
pub struct RandomJitter<R> {
    rng: R,
}

impl<R: Rng> RandomJitter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomJitter<StdRng> {
    /// Reproducible stream
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Fresh stream seeded from the operating system
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> Jitter for RandomJitter<R> {
    fn next_angle(&mut self) -> f32 {
        self.rng.random::<f32>() * TAU
    }
}

/// Replays a fixed list of angles, wrapping around at the end
#[derive(Debug, Clone)]
pub struct FixedJitter {
    angles: Vec<f32>,
    cursor: usize,
    drawn: usize,
}

impl FixedJitter {
    pub fn new(angles: impl Into<Vec<f32>>) -> Self {
        let angles = angles.into();
        assert!(!angles.is_empty(), "FixedJitter needs at least one angle");
        Self {
            angles,
            cursor: 0,
            drawn: 0,
        }
    }

    /// Always the same angle
    pub fn constant(angle: f32) -> Self {
        Self::new(vec![angle])
    }

    /// Number of angles handed out so far
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl Jitter for FixedJitter {
    fn next_angle(&mut self) -> f32 {
        let angle = self.angles[self.cursor];
        self.cursor = (self.cursor + 1) % self.angles.len();
        self.drawn += 1;
        angle
    }
}
