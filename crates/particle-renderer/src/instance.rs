//! Per-body draw data

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use particle_physics::ColorTag;

/// One filled circle, laid out as an instance vertex
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    /// Center in arena coordinates
    pub center: [f32; 2],
    pub radius: f32,
    /// Linear RGBA
    pub color: [f32; 4],
}

impl CircleInstance {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32, 2 => Float32x4];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CircleInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

impl From<(Vec2, f32, ColorTag)> for CircleInstance {
    fn from((center, radius, color): (Vec2, f32, ColorTag)) -> Self {
        Self {
            center: center.to_array(),
            radius,
            color: tag_color(color),
        }
    }
}

/// Linear RGBA fill for a color tag
pub fn tag_color(tag: ColorTag) -> [f32; 4] {
    let [r, g, b] = tag.rgb();
    [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), 1.0]
}

/// sRGB transfer function, 8-bit channel to linear
pub fn srgb_to_linear(channel: u8) -> f32 {
    let c = channel as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<CircleInstance>(), 28);
        let layout = CircleInstance::layout();
        assert_eq!(layout.array_stride, 28);
        assert_eq!(layout.attributes[1].offset, 8);
        assert_eq!(layout.attributes[2].offset, 12);
    }

    #[test]
    fn test_from_snapshot_entry() {
        let instance = CircleInstance::from((Vec2::new(12.0, 34.0), 9.0, ColorTag::Red));
        assert_eq!(instance.center, [12.0, 34.0]);
        assert_eq!(instance.radius, 9.0);
        let expected = [1.0, 0.0, 0.0, 1.0];
        for (got, want) in instance.color.iter().zip(expected) {
            assert!((got - want).abs() < 1e-6, "{:?}", instance.color);
        }
    }

    #[test]
    fn test_srgb_to_linear_endpoints() {
        assert_eq!(srgb_to_linear(0), 0.0);
        assert!((srgb_to_linear(255) - 1.0).abs() < 1e-6);
        // purple's 128 channel lands near 0.216 linear
        assert!((srgb_to_linear(128) - 0.2158605).abs() < 1e-4);
    }
}
