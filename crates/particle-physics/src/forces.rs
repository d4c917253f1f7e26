//! Per-body and per-pair physics kernels
//!
//! Everything here mutates bodies in place and is deterministic apart from the
//! collision nudge, whose direction comes from a [`Jitter`]. Operation order is
//! significant: the step driver relies on these producing identical floats for
//! identical inputs.

use crate::constants::PAIR_EPSILON;
use crate::jitter::Jitter;
use crate::particle::Body;
use glam::Vec2;

/// Damp velocity, add gravity to the damped vertical component, then advance
/// position by `velocity * speed_scale`.
///
/// `drag` is a percentage per tick. Gravity is neither damped nor scaled.
#[inline]
pub fn integrate(body: &mut Body, drag: f32, gravity: f32, speed_scale: f32) {
    let damping = 1.0 - drag / 100.0;
    body.velocity.x *= damping;
    body.velocity.y = body.velocity.y * damping + gravity;
    body.position += body.velocity * speed_scale;
}

/// Geometry of a pair as seen by the interaction scan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairGeometry {
    /// Unit vector from the first body towards the second
    pub normal: Vec2,
    /// Center distance, or [`PAIR_EPSILON`] for coincident centers
    pub distance: f32,
    /// Squared center distance before any epsilon substitution
    pub distance_squared: f32,
}

impl PairGeometry {
    pub fn between(a: &Body, b: &Body) -> Self {
        let mut delta = b.position - a.position;
        let distance_squared = delta.x * delta.x + delta.y * delta.y;
        let mut distance = distance_squared.sqrt();

        if distance == 0.0 {
            distance = PAIR_EPSILON;
            delta = Vec2::new(PAIR_EPSILON, 0.0);
        }

        Self {
            normal: delta / distance,
            distance,
            distance_squared,
        }
    }

    /// Disks intersect (strictly)
    pub fn overlapping(&self, a: &Body, b: &Body) -> bool {
        let min_dist = a.radius() + b.radius();
        self.distance_squared < min_dist * min_dist
    }
}

/// Linear falloff: 1 at contact distance zero, 0 at and beyond `threshold`
#[inline]
pub fn attraction_falloff(distance: f32, threshold: f32) -> f32 {
    if distance >= threshold {
        0.0
    } else {
        1.0 - distance / threshold
    }
}

/// Signed velocity kick for a pair within attraction range.
///
/// Applied as `+kick * normal` to the acting body and `-kick * normal` to the
/// other, independent of mass.
#[inline]
pub fn attraction_kick(strength: f32, attraction_force: f32, distance: f32, threshold: f32) -> f32 {
    strength * attraction_force * attraction_falloff(distance, threshold)
}

/// Apply an equal and opposite kick along `normal`
#[inline]
pub fn apply_kick(a: &mut Body, b: &mut Body, normal: Vec2, kick: f32) {
    a.velocity += normal * kick;
    b.velocity -= normal * kick;
}

/// Result of resolving one overlapping pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Penetration depth that was corrected
    pub overlap: f32,
    /// Impulse scalar, `None` if the bodies were already separating
    pub impulse: Option<f32>,
}

/// Resolve an overlapping pair.
///
/// Positions are corrected along the normal in proportion to the other body's
/// share of the total mass, so the lighter body moves more. If the bodies are
/// approaching (or at rest relative to each other) along the normal an
/// impulse with coefficient `restitution` is exchanged, followed by a
/// symmetric nudge of magnitude `perturbation` in a direction drawn from
/// `jitter`.
pub fn resolve_collision<J: Jitter + ?Sized>(
    a: &mut Body,
    b: &mut Body,
    restitution: f32,
    perturbation: f32,
    jitter: &mut J,
) -> Contact {
    let mut delta = b.position - a.position;
    let mut distance = delta.length();

    if distance == 0.0 {
        delta = Vec2::X;
        distance = 1.0;
    }

    let normal = delta / distance;
    let overlap = a.radius() + b.radius() - distance;

    let total_mass = a.mass() + b.mass();
    let a_share = b.mass() / total_mass;
    let b_share = a.mass() / total_mass;

    a.position -= normal * overlap * a_share;
    b.position += normal * overlap * b_share;

    let relative = b.velocity - a.velocity;
    let vel_along_normal = relative.x * normal.x + relative.y * normal.y;

    if vel_along_normal > 0.0 {
        return Contact {
            overlap,
            impulse: None,
        };
    }

    let mut j = -(1.0 + restitution) * vel_along_normal;
    j /= 1.0 / a.mass() + 1.0 / b.mass();

    a.velocity -= normal * j / a.mass();
    b.velocity += normal * j / b.mass();

    let nudge = Vec2::from_angle(jitter.next_angle()) * perturbation;
    a.velocity += nudge;
    b.velocity -= nudge;

    Contact {
        overlap,
        impulse: Some(j),
    }
}

/// Keep the disk inside `[0, width] x [0, height]`, reflecting and damping
/// the velocity component on each clamped axis. Returns whether any axis was
/// clamped.
pub fn clamp_to_arena(body: &mut Body, width: f32, height: f32, restitution: f32) -> bool {
    let r = body.radius();
    let mut clamped = false;

    if body.position.x < r {
        body.position.x = r;
        body.velocity.x = -body.velocity.x * restitution;
        clamped = true;
    }
    if body.position.x > width - r {
        body.position.x = width - r;
        body.velocity.x = -body.velocity.x * restitution;
        clamped = true;
    }
    if body.position.y < r {
        body.position.y = r;
        body.velocity.y = -body.velocity.y * restitution;
        clamped = true;
    }
    if body.position.y > height - r {
        body.position.y = height - r;
        body.velocity.y = -body.velocity.y * restitution;
        clamped = true;
    }

    clamped
}

/// Spawn-time separation of an overlapping pair.
///
/// Each body moves exactly half of `overlap + margin` away from the other,
/// regardless of mass. Coincident centers are split along +X for `a`.
/// Returns whether the pair overlapped.
pub fn push_apart(a: &mut Body, b: &mut Body, margin: f32) -> bool {
    let delta = a.position - b.position;
    let distance_squared = delta.x * delta.x + delta.y * delta.y;
    let min_dist = a.radius() + b.radius();

    if distance_squared >= min_dist * min_dist {
        return false;
    }

    let distance = distance_squared.sqrt();
    let normal = if distance == 0.0 {
        Vec2::X
    } else {
        delta / distance
    };
    let overlap = min_dist - distance + margin;

    a.position += normal * overlap / 2.0;
    b.position -= normal * overlap / 2.0;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorTag;
    use crate::jitter::FixedJitter;
    use proptest::prelude::*;

    const EPS: f32 = 1e-5;

    fn body(x: f32, y: f32, radius: f32) -> Body {
        Body::at_rest(Vec2::new(x, y), radius, ColorTag::Red)
    }

    #[test]
    fn test_integrate_damps_then_adds_gravity() {
        let mut b = Body::new(Vec2::new(100.0, 100.0), Vec2::new(4.0, -2.0), 5.0, ColorTag::Blue);
        integrate(&mut b, 0.2, 1.0, 0.5);

        let damping = 1.0 - 0.2 / 100.0;
        let expected_v = Vec2::new(4.0 * damping, -2.0 * damping + 1.0);
        assert_eq!(b.velocity, expected_v);
        assert_eq!(b.position, Vec2::new(100.0, 100.0) + expected_v * 0.5);
    }

    #[test]
    fn test_integrate_drift_over_ticks() {
        let mut b = Body::new(Vec2::new(500.0, 200.0), Vec2::new(3.0, 0.0), 5.0, ColorTag::Blue);
        let damping = 1.0 - 0.2 / 100.0;
        let (mut pos, mut vel) = (b.position, b.velocity);
        for _ in 0..20 {
            integrate(&mut b, 0.2, 1.0, 0.5);
            vel.x *= damping;
            vel.y = vel.y * damping + 1.0;
            pos += vel * 0.5;
            assert_eq!(b.velocity, vel);
            assert_eq!(b.position, pos);
        }
    }

    #[test]
    fn test_pair_geometry_coincident_centers() {
        let a = body(50.0, 50.0, 5.0);
        let b = body(50.0, 50.0, 5.0);
        let g = PairGeometry::between(&a, &b);
        assert_eq!(g.distance, PAIR_EPSILON);
        assert_eq!(g.distance_squared, 0.0);
        assert_eq!(g.normal, Vec2::X);
        assert!(g.overlapping(&a, &b));
    }

    #[test]
    fn test_pair_geometry_normal_points_to_second() {
        let a = body(0.0, 0.0, 5.0);
        let b = body(30.0, 40.0, 5.0);
        let g = PairGeometry::between(&a, &b);
        assert_eq!(g.distance, 50.0);
        assert_eq!(g.distance_squared, 2500.0);
        assert!((g.normal - Vec2::new(0.6, 0.8)).length() < EPS);
        assert!(!g.overlapping(&a, &b));
    }

    #[test]
    fn test_attraction_zero_at_threshold() {
        assert_eq!(attraction_kick(2.0, 0.1, 300.0, 300.0), 0.0);
        assert_eq!(attraction_kick(-2.0, 0.1, 301.0, 300.0), 0.0);
        assert_eq!(attraction_falloff(300.0, 300.0), 0.0);
        assert_eq!(attraction_falloff(0.0, 300.0), 1.0);
    }

    #[test]
    fn test_attraction_kick_value() {
        let kick = attraction_kick(2.5, 0.1, 150.0, 300.0);
        assert!((kick - 0.125).abs() < EPS);
        let repel = attraction_kick(-1.0, 0.1, 30.0, 300.0);
        assert!((repel + 0.09).abs() < EPS);
    }

    #[test]
    fn test_attraction_kick_scales_falloff() {
        for distance in [0.0, 12.5, 150.0, 299.0, 300.0, 450.0] {
            let falloff = attraction_falloff(distance, 300.0);
            assert_eq!(attraction_kick(1.5, 0.1, distance, 300.0), 1.5 * 0.1 * falloff);
        }
    }

    #[test]
    fn test_apply_kick_is_equal_and_opposite() {
        let mut a = body(0.0, 0.0, 5.0);
        let mut b = body(10.0, 0.0, 15.0);
        apply_kick(&mut a, &mut b, Vec2::X, 0.25);
        assert_eq!(a.velocity, Vec2::new(0.25, 0.0));
        assert_eq!(b.velocity, Vec2::new(-0.25, 0.0));
    }

    #[test]
    fn test_collision_head_on_equal_mass_is_symmetric() {
        let mut a = Body::new(Vec2::new(100.0, 100.0), Vec2::new(2.0, 0.0), 10.0, ColorTag::Red);
        let mut b = Body::new(Vec2::new(115.0, 100.0), Vec2::new(-2.0, 0.0), 10.0, ColorTag::Red);
        let mut jitter = FixedJitter::constant(0.0);

        let contact = resolve_collision(&mut a, &mut b, 0.85, 0.0, &mut jitter);

        assert_eq!(contact.overlap, 5.0);
        assert!(contact.impulse.is_some());
        assert!((a.velocity.x + b.velocity.x).abs() < EPS);
        assert!((a.velocity.x + 1.7).abs() < EPS);
        assert!((b.velocity.x - 1.7).abs() < EPS);
        assert_eq!(a.position, Vec2::new(97.5, 100.0));
        assert_eq!(b.position, Vec2::new(117.5, 100.0));
    }

    #[test]
    fn test_collision_perturbation_exact_contribution() {
        let mut a = body(100.0, 100.0, 10.0);
        let mut b = body(110.0, 100.0, 10.0);
        let angle = std::f32::consts::FRAC_PI_2;
        let mut jitter = FixedJitter::constant(angle);

        resolve_collision(&mut a, &mut b, 0.85, 0.01, &mut jitter);

        let nudge = Vec2::from_angle(angle) * 0.01;
        assert_eq!(a.velocity, nudge);
        assert_eq!(b.velocity, -nudge);
        assert_eq!(jitter.drawn(), 1);
    }

    #[test]
    fn test_collision_separating_skips_impulse_and_nudge() {
        let mut a = Body::new(Vec2::new(100.0, 100.0), Vec2::new(-1.0, 0.0), 10.0, ColorTag::Red);
        let mut b = Body::new(Vec2::new(110.0, 100.0), Vec2::new(1.0, 0.0), 10.0, ColorTag::Red);
        let mut jitter = FixedJitter::constant(0.0);

        let contact = resolve_collision(&mut a, &mut b, 0.85, 0.01, &mut jitter);

        assert_eq!(contact.impulse, None);
        assert_eq!(a.velocity, Vec2::new(-1.0, 0.0));
        assert_eq!(b.velocity, Vec2::new(1.0, 0.0));
        assert_eq!(a.position, Vec2::new(95.0, 100.0));
        assert_eq!(b.position, Vec2::new(115.0, 100.0));
        assert_eq!(jitter.drawn(), 0);
    }

    #[test]
    fn test_collision_coincident_centers_use_x_axis() {
        let mut a = body(50.0, 50.0, 5.0);
        let mut b = body(50.0, 50.0, 5.0);
        let mut jitter = FixedJitter::constant(0.0);

        let contact = resolve_collision(&mut a, &mut b, 0.85, 0.0, &mut jitter);

        assert_eq!(contact.overlap, 9.0);
        assert_eq!(a.position, Vec2::new(45.5, 50.0));
        assert_eq!(b.position, Vec2::new(54.5, 50.0));
        assert!(a.position.is_finite() && b.position.is_finite());
    }

    #[test]
    fn test_clamp_reflects_and_damps() {
        let mut b = Body::new(Vec2::new(9.5, 50.0), Vec2::new(-4.0, 1.0), 10.0, ColorTag::Red);
        assert!(clamp_to_arena(&mut b, 200.0, 200.0, 0.85));
        assert_eq!(b.position.x, 10.0);
        assert_eq!(b.velocity.x, 4.0 * 0.85);
        assert_eq!(b.velocity.y, 1.0);
    }

    #[test]
    fn test_clamp_corner_hits_both_axes() {
        let mut b = Body::new(Vec2::new(195.0, 198.0), Vec2::new(3.0, 2.0), 10.0, ColorTag::Red);
        assert!(clamp_to_arena(&mut b, 200.0, 200.0, 0.5));
        assert_eq!(b.position, Vec2::new(190.0, 190.0));
        assert_eq!(b.velocity, Vec2::new(-1.5, -1.0));
    }

    #[test]
    fn test_clamp_leaves_interior_body_alone() {
        let mut b = Body::new(Vec2::new(100.0, 100.0), Vec2::new(3.0, 2.0), 10.0, ColorTag::Red);
        let before = b;
        assert!(!clamp_to_arena(&mut b, 200.0, 200.0, 0.85));
        assert_eq!(b, before);
    }

    #[test]
    fn test_push_apart_splits_evenly_regardless_of_mass() {
        let mut a = body(110.0, 100.0, 15.0);
        let mut b = body(100.0, 100.0, 5.0);
        assert!(push_apart(&mut a, &mut b, 1.0));
        // overlap 20 - 10 + 1 = 11, half each
        assert_eq!(a.position, Vec2::new(115.5, 100.0));
        assert_eq!(b.position, Vec2::new(94.5, 100.0));
    }

    #[test]
    fn test_push_apart_coincident_and_clear_pairs() {
        let mut a = body(100.0, 100.0, 5.0);
        let mut b = body(100.0, 100.0, 5.0);
        assert!(push_apart(&mut a, &mut b, 1.0));
        assert_eq!(a.position, Vec2::new(105.5, 100.0));
        assert_eq!(b.position, Vec2::new(94.5, 100.0));

        let mut c = body(0.0, 0.0, 5.0);
        let mut d = body(10.0, 0.0, 5.0);
        assert!(!push_apart(&mut c, &mut d, 1.0));
        assert_eq!(c.position, Vec2::ZERO);
    }

    proptest! {
        #[test]
        fn prop_attraction_decays_with_distance(
            strength in prop::sample::select(vec![-2.5f32, -1.0, 0.5, 2.0, 2.5]),
            d1 in 0.0f32..299.0,
            gap in 0.5f32..100.0,
        ) {
            let d2 = (d1 + gap).min(300.0);
            let k1 = attraction_kick(strength, 0.1, d1, 300.0).abs();
            let k2 = attraction_kick(strength, 0.1, d2, 300.0).abs();
            prop_assert!(k2 < k1, "|kick| {} at {} not below {} at {}", k2, d2, k1, d1);
        }

        #[test]
        fn prop_mass_weighted_separation(
            heavy_radius in 5.0f32..15.0,
            depth in 0.05f32..0.9,
            angle in 0.0f32..std::f32::consts::TAU,
        ) {
            // mass ratio 4:1 means radius ratio 2:1
            let light_radius = heavy_radius / 2.0;
            let dir = Vec2::from_angle(angle);
            let distance = (heavy_radius + light_radius) * (1.0 - depth);
            let start_heavy = Vec2::new(500.0, 500.0);
            let start_light = start_heavy + dir * distance;
            let mut heavy = Body::at_rest(start_heavy, heavy_radius, ColorTag::Red);
            let mut light = Body::at_rest(start_light, light_radius, ColorTag::Blue);
            let mut jitter = FixedJitter::constant(0.0);

            resolve_collision(&mut heavy, &mut light, 0.85, 0.0, &mut jitter);

            let heavy_moved = heavy.position.distance(start_heavy);
            let light_moved = light.position.distance(start_light);
            prop_assert!((light_moved - 4.0 * heavy_moved).abs() < 1e-2 * light_moved.max(1.0));
        }

        #[test]
        fn prop_clamp_keeps_disk_inside(
            x in -500.0f32..2500.0,
            y in -500.0f32..2000.0,
            vx in -20.0f32..20.0,
            vy in -20.0f32..20.0,
            radius in 5.0f32..15.0,
        ) {
            let mut b = Body::new(Vec2::new(x, y), Vec2::new(vx, vy), radius, ColorTag::Green);
            clamp_to_arena(&mut b, 2112.0, 1440.0, 0.85);
            prop_assert!(b.is_within(2112.0, 1440.0));
            prop_assert!(b.velocity.x.abs() <= vx.abs());
            prop_assert!(b.velocity.y.abs() <= vy.abs());
        }
    }
}
