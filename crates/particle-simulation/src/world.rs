//! World state: the fixed population of bodies and the arena they live in

use crate::params::{Arena, SpawnParams};
use glam::Vec2;
use particle_physics::{push_apart, Body, ColorTag};
use rand::Rng;
use std::f32::consts::TAU;

/// Ordered collection of bodies plus arena bounds.
///
/// The body count never changes after construction and the order is stable,
/// which keeps the pair scan deterministic.
#[derive(Debug, Clone)]
pub struct World {
    bodies: Vec<Body>,
    arena: Arena,
}

impl World {
    /// Wrap a hand-built population
    pub fn from_bodies(arena: Arena, bodies: Vec<Body>) -> Self {
        Self { bodies, arena }
    }

    /// Spawn `spawn.count` random bodies, then run one separation pass over
    /// overlapping pairs.
    pub fn spawn<R: Rng + ?Sized>(arena: Arena, spawn: &SpawnParams, rng: &mut R) -> Self {
        debug_assert!(spawn.min_radius > 0 && spawn.min_radius <= spawn.max_radius);
        debug_assert!(spawn.min_speed < spawn.max_speed);

        let bodies = (0..spawn.count)
            .map(|_| {
                let angle = rng.random::<f32>() * TAU;
                let speed = rng.random_range(spawn.min_speed..spawn.max_speed);
                let color: ColorTag = rng.random();
                let radius = rng.random_range(spawn.min_radius..=spawn.max_radius) as f32;

                let x = radius + rng.random::<f32>() * (arena.width - 2.0 * radius);
                let y = radius + rng.random::<f32>() * (arena.height - 2.0 * radius);

                Body::new(Vec2::new(x, y), Vec2::from_angle(angle) * speed, radius, color)
            })
            .collect();

        let mut world = Self::from_bodies(arena, bodies);
        let separated = world.separate_overlaps(spawn.separation_margin);
        log::debug!(
            "Spawned {} bodies, separated {} overlapping pairs",
            world.len(),
            separated
        );
        world
    }

    /// Single relaxation pass over every unordered pair `(i, j)`, `j < i`.
    ///
    /// Each overlapping pair is pushed apart evenly by half of
    /// `overlap + margin`. Not iterated: later pushes can reintroduce
    /// overlaps, which the first ticks resolve. Returns the number of pairs
    /// moved.
    pub fn separate_overlaps(&mut self, margin: f32) -> usize {
        let mut separated = 0;
        for i in 0..self.bodies.len() {
            for j in 0..i {
                let (b_j, b_i) = pair_mut(&mut self.bodies, j, i);
                if push_apart(b_i, b_j, margin) {
                    separated += 1;
                }
            }
        }
        separated
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn total_kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    pub fn total_momentum(&self) -> Vec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    /// Every body fully inside the arena
    pub fn all_within_arena(&self) -> bool {
        self.bodies
            .iter()
            .all(|b| b.is_within(self.arena.width, self.arena.height))
    }
}

/// Two distinct mutable bodies, `lo < hi`
#[inline]
pub(crate) fn pair_mut(bodies: &mut [Body], lo: usize, hi: usize) -> (&mut Body, &mut Body) {
    debug_assert!(lo < hi);
    let (head, tail) = bodies.split_at_mut(hi);
    (&mut head[lo], &mut tail[0])
}
