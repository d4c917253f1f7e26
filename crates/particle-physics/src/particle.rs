//! Circular bodies simulated in the arena

use crate::color::ColorTag;
use glam::Vec2;

/// Returned by [`Body::try_new`] for a radius that cannot carry mass
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("body radius must be positive and finite, got {0}")]
pub struct InvalidRadius(pub f32);

/// One simulated circular particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Center in arena coordinates (origin top-left, Y down)
    pub position: Vec2,
    /// Velocity in arena units per tick
    pub velocity: Vec2,
    radius: f32,
    mass: f32,
    color: ColorTag,
}

impl Body {
    /// Create a body; mass is derived as `radius²`.
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, color: ColorTag) -> Self {
        debug_assert!(radius.is_finite() && radius > 0.0, "invalid radius {radius}");
        Self {
            position,
            velocity,
            radius,
            mass: radius * radius,
            color,
        }
    }

    pub fn try_new(
        position: Vec2,
        velocity: Vec2,
        radius: f32,
        color: ColorTag,
    ) -> Result<Self, InvalidRadius> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(InvalidRadius(radius));
        }
        Ok(Self::new(position, velocity, radius, color))
    }

    /// Create a body at rest
    pub fn at_rest(position: Vec2, radius: f32, color: ColorTag) -> Self {
        Self::new(position, Vec2::ZERO, radius, color)
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    #[inline]
    pub fn color(&self) -> ColorTag {
        self.color
    }

    pub fn momentum(&self) -> Vec2 {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// Whether the whole disk lies inside a `width` x `height` arena
    pub fn is_within(&self, width: f32, height: f32) -> bool {
        let r = self.radius;
        (r..=width - r).contains(&self.position.x) && (r..=height - r).contains(&self.position.y)
    }

    /// Whether the two disks intersect (touching does not count)
    pub fn overlaps(&self, other: &Body) -> bool {
        let min_dist = self.radius + other.radius;
        self.position.distance_squared(other.position) < min_dist * min_dist
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mass_is_radius_squared() {
        let body = Body::at_rest(Vec2::new(50.0, 50.0), 7.0, ColorTag::Cyan);
        assert_eq!(body.mass(), 49.0);
        assert_eq!(body.radius(), 7.0);
        assert_eq!(body.color(), ColorTag::Cyan);
    }

    #[test]
    fn test_try_new_rejects_bad_radius() {
        for radius in [0.0, -3.0, f32::NAN, f32::INFINITY] {
            let result = Body::try_new(Vec2::ZERO, Vec2::ZERO, radius, ColorTag::Red);
            assert!(result.is_err(), "radius {radius} accepted");
        }
        assert!(Body::try_new(Vec2::ZERO, Vec2::ZERO, 5.0, ColorTag::Red).is_ok());
    }

    #[test]
    fn test_is_within_respects_radius() {
        let mut body = Body::at_rest(Vec2::new(10.0, 10.0), 10.0, ColorTag::Red);
        assert!(body.is_within(100.0, 100.0));
        body.position.x = 9.9;
        assert!(!body.is_within(100.0, 100.0));
        body.position = Vec2::new(90.0, 90.0);
        assert!(body.is_within(100.0, 100.0));
        body.position.y = 90.1;
        assert!(!body.is_within(100.0, 100.0));
    }

    #[test]
    fn test_overlap_excludes_touching() {
        let a = Body::at_rest(Vec2::new(0.0, 0.0), 10.0, ColorTag::Red);
        let b = Body::at_rest(Vec2::new(20.0, 0.0), 10.0, ColorTag::Red);
        assert!(!a.overlaps(&b));
        let c = Body::at_rest(Vec2::new(19.0, 0.0), 10.0, ColorTag::Red);
        assert!(a.overlaps(&c));
    }

    #[test]
    fn test_energy_and_momentum() {
        let body = Body::new(Vec2::ZERO, Vec2::new(3.0, 4.0), 2.0, ColorTag::Blue);
        assert_eq!(body.momentum(), Vec2::new(12.0, 16.0));
        assert_eq!(body.kinetic_energy(), 50.0);
    }
}
