//! # Particle Simulation
//!
//! World state and the per-frame physics step for the particle-life arena:
//! spawning, the pair scan (all-pairs or uniform grid) and boundary handling.

pub mod grid;
pub mod params;
pub mod simulation;
pub mod world;

pub use grid::*;
pub use params::*;
pub use simulation::*;
pub use world::*;
