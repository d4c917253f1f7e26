//! # Particle Physics
//!
//! Bodies, color tags, the interaction table and the per-body / per-pair
//! kernels used by the particle-life step: integration, attraction kicks,
//! mass-weighted collision resolution and arena clamping.

pub mod color;
pub mod constants;
pub mod forces;
pub mod interaction;
pub mod jitter;
pub mod particle;

pub use color::*;
pub use constants::*;
pub use forces::*;
pub use interaction::*;
pub use jitter::*;
pub use particle::*;
