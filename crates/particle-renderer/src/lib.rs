//! # Particle Renderer
//!
//! Draws a snapshot of the simulated bodies as filled circles.

pub mod camera;
pub mod instance;
pub mod renderer;

pub use camera::*;
pub use instance::*;
pub use renderer::*;
