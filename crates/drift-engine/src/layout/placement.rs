//! Placement sampling: fresh positions, scales, and arc parameters drawn
//! from a mode profile. Every call consumes the shared RNG, so repeated
//! passes over the same object keep re-randomizing it.

use glam::Vec3;
use std::f32::consts::PI;

use crate::components::rocket::OrbitParams;
use crate::core::rng::Rng;
use crate::layout::viewport::ModeProfile;

/// Freshly sampled pose for one asteroid.
#[derive(Debug, Clone, Copy)]
pub struct AsteroidPlacement {
    pub position: Vec3,
    /// Initial euler orientation; roll stays 0.
    pub rotation: Vec3,
    pub scale: f32,
}

/// Freshly sampled flight parameters for one rocket berth.
#[derive(Debug, Clone, Copy)]
pub struct RocketPlacement {
    pub orbit: OrbitParams,
    pub scale: f32,
}

/// Sample a pose within the profile's symmetric spread.
pub fn asteroid_placement(profile: &ModeProfile, rng: &mut Rng) -> AsteroidPlacement {
    let spread = profile.spread;
    AsteroidPlacement {
        position: Vec3::new(
            rng.range(-spread.x, spread.x),
            rng.range(-spread.y, spread.y),
            rng.range(-spread.z, spread.z),
        ),
        rotation: Vec3::new(rng.range(0.0, PI), rng.range(0.0, PI), 0.0),
        scale: rng.range(profile.asteroid_scale.0, profile.asteroid_scale.1),
    }
}

/// Sample flight parameters for a fleet berth. The arc radius is a pure
/// function of the slot index; everything else is drawn fresh.
pub fn rocket_placement(profile: &ModeProfile, slot: usize, rng: &mut Rng) -> RocketPlacement {
    RocketPlacement {
        orbit: OrbitParams {
            orbit_radius: profile.orbit_radius(slot),
            orbit_tilt: rng.range(-profile.orbit_tilt_span, profile.orbit_tilt_span),
            angular_speed: rng.range(profile.angular_speed.0, profile.angular_speed.1),
            angle_offset: rng.angle(),
            vertical_offset: rng.range(-profile.vertical_offset_span, profile.vertical_offset_span),
            phase: rng.angle(),
        },
        scale: rng.range(profile.rocket_scale.0, profile.rocket_scale.1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::viewport::ViewportMode;
    use std::f32::consts::TAU;

    #[test]
    fn compact_asteroids_stay_inside_the_spread() {
        let profile = ViewportMode::Compact.profile();
        let mut rng = Rng::new(42);
        for _ in 0..200 {
            let p = asteroid_placement(profile, &mut rng);
            assert!(p.position.x.abs() <= 5.0);
            assert!(p.position.y.abs() <= 3.0);
            assert!(p.position.z.abs() <= 4.0);
            assert!((0.4..1.4).contains(&p.scale));
            assert!((0.0..PI).contains(&p.rotation.x));
            assert!((0.0..PI).contains(&p.rotation.y));
            assert_eq!(p.rotation.z, 0.0);
        }
    }

    #[test]
    fn standard_asteroids_use_the_wide_spread() {
        let profile = ViewportMode::Standard.profile();
        let mut rng = Rng::new(43);
        for _ in 0..200 {
            let p = asteroid_placement(profile, &mut rng);
            assert!(p.position.x.abs() <= 10.0);
            assert!(p.position.y.abs() <= 6.0);
            assert!(p.position.z.abs() <= 10.0);
            assert!((0.5..2.0).contains(&p.scale));
        }
    }

    #[test]
    fn compact_slot_zero_and_six_share_a_radius() {
        let profile = ViewportMode::Compact.profile();
        let mut rng = Rng::new(1);
        let a = rocket_placement(profile, 0, &mut rng);
        let b = rocket_placement(profile, 6, &mut rng);
        assert_eq!(a.orbit.orbit_radius, 1.8);
        assert_eq!(b.orbit.orbit_radius, 1.8);
    }

    #[test]
    fn standard_slot_two_radius() {
        let profile = ViewportMode::Standard.profile();
        let mut rng = Rng::new(1);
        let p = rocket_placement(profile, 2, &mut rng);
        assert!((p.orbit.orbit_radius - 4.7).abs() < 1e-6);
    }

    #[test]
    fn rocket_parameters_stay_range_bounded() {
        let profile = ViewportMode::Standard.profile();
        let mut rng = Rng::new(99);
        for slot in 0..100 {
            let p = rocket_placement(profile, slot % 8, &mut rng);
            assert!(p.orbit.orbit_tilt.abs() <= profile.orbit_tilt_span);
            assert!((0.002..0.003).contains(&p.orbit.angular_speed));
            assert!((0.0..TAU).contains(&p.orbit.angle_offset));
            assert!((0.0..TAU).contains(&p.orbit.phase));
            assert!(p.orbit.vertical_offset.abs() <= 1.0);
            assert!((0.08..0.11).contains(&p.scale));
        }
    }

    #[test]
    fn same_seed_reproduces_the_layout() {
        let profile = ViewportMode::Compact.profile();
        let mut rng1 = Rng::new(7);
        let mut rng2 = Rng::new(7);
        let a = rocket_placement(profile, 3, &mut rng1);
        let b = rocket_placement(profile, 3, &mut rng2);
        assert_eq!(a.orbit.orbit_tilt, b.orbit.orbit_tilt);
        assert_eq!(a.orbit.angle_offset, b.orbit.angle_offset);
        assert_eq!(a.scale, b.scale);
    }
}
