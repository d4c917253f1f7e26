//! Fixed constants for the particle-life arena
//!
//! Units are arena pixels and simulation ticks. One tick is one rendered frame.

/// Arena width (a 640 wide window scaled by 3.3)
pub const ARENA_WIDTH: f32 = 640.0 * 3.3;

/// Arena height (a 480 high window scaled by 3)
pub const ARENA_HEIGHT: f32 = 480.0 * 3.0;

/// Number of bodies spawned at startup
pub const BODY_COUNT: usize = 1000;

/// Multiplier applied to velocity when advancing position
pub const SPEED_SCALE: f32 = 0.5;

/// Velocity damping, in percent per tick
pub const DRAG: f32 = 0.2;

/// Vertical acceleration added after damping, per tick
pub const GRAVITY: f32 = 1.0;

/// Fraction of normal velocity kept (with sign flip) on bounce or collision
pub const RESTITUTION: f32 = 0.85;

/// Center distance beyond which non-overlapping bodies ignore each other
pub const ATTRACTION_THRESHOLD: f32 = 300.0;

/// Scale applied to interaction table strengths
pub const ATTRACTION_FORCE: f32 = 0.1;

/// Smallest spawn radius (inclusive)
pub const MIN_RADIUS: u32 = 5;

/// Largest spawn radius (inclusive)
pub const MAX_RADIUS: u32 = 15;

/// Spawn speed range, lower bound (inclusive)
pub const MIN_SPAWN_SPEED: f32 = 2.0;

/// Spawn speed range, upper bound (exclusive)
pub const MAX_SPAWN_SPEED: f32 = 7.0;

/// Magnitude of the symmetric velocity nudge added on every collision impulse
pub const COLLISION_PERTURBATION: f32 = 0.01;

/// Extra push applied when separating overlapping bodies at spawn
pub const SEPARATION_MARGIN: f32 = 1.0;

/// Stand-in distance for coincident centers in the pair scan
pub const PAIR_EPSILON: f32 = 0.1;
