//! Physics step driver
//!
//! One [`Simulation::step`] runs three phases over the world in order:
//!
//! 1. integration: damping, gravity and position advance for every body;
//! 2. pair scan: every unordered pair `(i, j)`, `i < j`, in lexicographic
//!    order, either resolves an overlap or applies the color interaction kick;
//! 3. boundary: every body is clamped back inside the arena.
//!
//! The pair scan mutates bodies in place, so a pair visited later sees the
//! velocities and positions already changed by earlier pairs in the same tick.
//! That ordering is part of the observable behaviour and is kept by both
//! [`PairScan`] strategies.

use crate::grid::UniformGrid;
use crate::params::PhysicsParams;
use crate::world::{pair_mut, World};
use glam::Vec2;
use particle_physics::{
    apply_kick, attraction_kick, clamp_to_arena, integrate, resolve_collision, Body, ColorTag,
    InteractionTable, Jitter, PairGeometry,
};

/// How often step statistics are logged at debug level
const STATS_LOG_INTERVAL: u64 = 300;

/// Broad phase used by the pair scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PairScan {
    /// Naive scan over all `n(n-1)/2` pairs
    #[default]
    AllPairs,
    /// Candidate pairs from a [`UniformGrid`], visited in the same order.
    ///
    /// A pair that is out of reach when the grid is built but gets pushed into
    /// range by an earlier collision in the same tick is not visited until the
    /// next tick.
    UniformGrid,
}

/// Counters for one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Overlapping pairs resolved
    pub collisions: usize,
    /// Collisions that exchanged an impulse (approaching pairs)
    pub impulses: usize,
    /// Pairs that received an interaction kick
    pub interactions: usize,
    /// Bodies clamped on at least one axis
    pub clamps: usize,
}

/// World state plus everything a step needs
pub struct Simulation<J> {
    world: World,
    params: PhysicsParams,
    table: InteractionTable,
    jitter: J,
    scan: PairScan,
    grid: UniformGrid,
    max_radius: f32,
    tick: u64,
}

impl<J: Jitter> Simulation<J> {
    pub fn new(world: World, params: PhysicsParams, table: InteractionTable, jitter: J) -> Self {
        let max_radius = world
            .bodies()
            .iter()
            .map(Body::radius)
            .fold(0.0f32, f32::max);

        log::info!(
            "✓ Simulation ready: {} bodies in a {}x{} arena",
            world.len(),
            world.arena().width,
            world.arena().height
        );

        Self {
            world,
            params,
            table,
            jitter,
            scan: PairScan::default(),
            grid: UniformGrid::new(),
            max_radius,
            tick: 0,
        }
    }

    pub fn with_pair_scan(mut self, scan: PairScan) -> Self {
        self.scan = scan;
        self
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn bodies(&self) -> &[Body] {
        self.world.bodies()
    }

    pub fn params(&self) -> &PhysicsParams {
        &self.params
    }

    pub fn table(&self) -> &InteractionTable {
        &self.table
    }

    pub fn pair_scan(&self) -> PairScan {
        self.scan
    }

    pub fn jitter(&self) -> &J {
        &self.jitter
    }

    /// Read-only `(position, radius, color)` view of every body, in scan order
    pub fn snapshot(&self) -> impl ExactSizeIterator<Item = (Vec2, f32, ColorTag)> + '_ {
        self.world
            .bodies()
            .iter()
            .map(|b| (b.position, b.radius(), b.color()))
    }

    /// Number of completed steps
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Advance the world by one tick
    pub fn step(&mut self) -> StepStats {
        let mut stats = StepStats::default();
        let params = self.params;

        for body in self.world.bodies_mut() {
            integrate(body, params.drag, params.gravity, params.speed_scale);
        }

        match self.scan {
            PairScan::AllPairs => {
                let bodies = self.world.bodies_mut();
                for i in 0..bodies.len() {
                    for j in i + 1..bodies.len() {
                        let (a, b) = pair_mut(bodies, i, j);
                        interact(a, b, &params, &self.table, &mut self.jitter, &mut stats);
                    }
                }
            }
            PairScan::UniformGrid => {
                let reach = params.attraction_threshold.max(2.0 * self.max_radius);
                let arena = self.world.arena();
                let pairs = self
                    .grid
                    .candidate_pairs(self.world.bodies(), arena, reach);
                let bodies = self.world.bodies_mut();
                for &(i, j) in pairs {
                    let (a, b) = pair_mut(bodies, i as usize, j as usize);
                    interact(a, b, &params, &self.table, &mut self.jitter, &mut stats);
                }
            }
        }

        let arena = self.world.arena();
        for body in self.world.bodies_mut() {
            if clamp_to_arena(body, arena.width, arena.height, params.restitution) {
                stats.clamps += 1;
            }
        }

        self.tick += 1;
        log::trace!("tick {}: {:?}", self.tick, stats);
        if self.tick % STATS_LOG_INTERVAL == 0 {
            log::debug!(
                "tick {}: {} collisions ({} impulses), {} interactions, {} clamps, KE {:.1}",
                self.tick,
                stats.collisions,
                stats.impulses,
                stats.interactions,
                stats.clamps,
                self.world.total_kinetic_energy()
            );
        }

        stats
    }

    /// Run `ticks` steps, returning the summed statistics
    pub fn run(&mut self, ticks: u64) -> StepStats {
        let mut total = StepStats::default();
        for _ in 0..ticks {
            let stats = self.step();
            total.collisions += stats.collisions;
            total.impulses += stats.impulses;
            total.interactions += stats.interactions;
            total.clamps += stats.clamps;
        }
        total
    }
}

/// Resolve one pair: overlap takes precedence over the color interaction,
/// which only acts inside the attraction threshold.
fn interact<J: Jitter + ?Sized>(
    a: &mut Body,
    b: &mut Body,
    params: &PhysicsParams,
    table: &InteractionTable,
    jitter: &mut J,
    stats: &mut StepStats,
) {
    let geometry = PairGeometry::between(a, b);

    if geometry.overlapping(a, b) {
        let contact = resolve_collision(a, b, params.restitution, params.perturbation, jitter);
        stats.collisions += 1;
        if contact.impulse.is_some() {
            stats.impulses += 1;
        }
    } else if geometry.distance < params.attraction_threshold {
        let strength = table.get(a.color(), b.color());
        let kick = attraction_kick(
            strength,
            params.attraction_force,
            geometry.distance,
            params.attraction_threshold,
        );
        apply_kick(a, b, geometry.normal, kick);
        stats.interactions += 1;
    }
}
