//! Orthographic camera for the 2D arena

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};

/// Camera uniform for GPU
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    /// Arena units covered by one screen pixel, used for edge smoothing
    pub pixel_size: f32,
    pub _padding: [f32; 3],
}

/// Fits the whole arena into the window, letter-boxed to keep circles round.
///
/// Arena coordinates have the origin at the top-left with Y pointing down.
pub struct Camera {
    pub arena: Vec2,
    pub viewport: Vec2,
}

impl Camera {
    pub fn new(arena_width: f32, arena_height: f32, width: u32, height: u32) -> Self {
        Self {
            arena: Vec2::new(arena_width, arena_height),
            viewport: Vec2::new(width.max(1) as f32, height.max(1) as f32),
        }
    }

    /// Screen pixels per arena unit
    pub fn scale(&self) -> f32 {
        (self.viewport.x / self.arena.x).min(self.viewport.y / self.arena.y)
    }

    /// Visible arena-space rectangle `(min, max)`, centered on the arena
    pub fn visible_rect(&self) -> (Vec2, Vec2) {
        let extent = self.viewport / self.scale();
        let center = self.arena * 0.5;
        (center - extent * 0.5, center + extent * 0.5)
    }

    pub fn build_view_projection_matrix(&self) -> Mat4 {
        let (min, max) = self.visible_rect();
        // bottom = max.y flips Y so arena-down is screen-down
        Mat4::orthographic_rh(min.x, max.x, max.y, min.y, -1.0, 1.0)
    }

    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.build_view_projection_matrix().to_cols_array_2d(),
            pixel_size: 1.0 / self.scale(),
            _padding: [0.0; 3],
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Vec2::new(width.max(1) as f32, height.max(1) as f32);
    }
}
