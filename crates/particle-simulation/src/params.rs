//! Physics, spawn and arena parameters
//!
//! Defaults are built from the compile-time constants in `particle_physics`.

use particle_physics::constants::*;

/// Rectangular arena, origin top-left, Y down
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0);
        Self { width, height }
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(ARENA_WIDTH, ARENA_HEIGHT)
    }
}

/// Constants consumed by every physics step
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsParams {
    /// Velocity damping in percent per tick
    pub drag: f32,
    /// Vertical velocity added each tick after damping
    pub gravity: f32,
    /// Position advances by `velocity * speed_scale`
    pub speed_scale: f32,
    /// Bounce and collision restitution
    pub restitution: f32,
    /// Range of the color interaction
    pub attraction_threshold: f32,
    /// Scale applied to interaction table entries
    pub attraction_force: f32,
    /// Magnitude of the collision nudge
    pub perturbation: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            drag: DRAG,
            gravity: GRAVITY,
            speed_scale: SPEED_SCALE,
            restitution: RESTITUTION,
            attraction_threshold: ATTRACTION_THRESHOLD,
            attraction_force: ATTRACTION_FORCE,
            perturbation: COLLISION_PERTURBATION,
        }
    }
}

/// Initial population settings
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnParams {
    pub count: usize,
    /// Integer radius range, both ends inclusive
    pub min_radius: u32,
    pub max_radius: u32,
    /// Speed range, `[min_speed, max_speed)`
    pub min_speed: f32,
    pub max_speed: f32,
    /// Extra distance added when pushing overlapping spawns apart
    pub separation_margin: f32,
}

impl Default for SpawnParams {
    fn default() -> Self {
        Self {
            count: BODY_COUNT,
            min_radius: MIN_RADIUS,
            max_radius: MAX_RADIUS,
            min_speed: MIN_SPAWN_SPEED,
            max_speed: MAX_SPAWN_SPEED,
            separation_margin: SEPARATION_MARGIN,
        }
    }
}
