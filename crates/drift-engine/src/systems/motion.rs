//! The per-tick motion pass: station spin, asteroid drift, and rocket
//! flight along front-hemisphere arcs.

use glam::{Quat, Vec3};
use std::f32::consts::TAU;

use crate::components::rocket::{OrbitParams, Rocket};
use crate::core::scene::Scene;
use crate::layout::viewport::ModeProfile;

/// Station yaw advance per tick, radians.
const STATION_YAW_RATE: f32 = 0.002;
/// Station roll at scroll progress 0.
const ROLL_BASE: f32 = -0.3;
/// Additional roll across the full scroll range.
const ROLL_SPAN: f32 = 0.6;
/// Scales an angular speed factor into radians per unit phase.
const SPEED_SCALE: f32 = 400.0;
/// The vertical bob runs at 1.2x the arc frequency.
const BOB_FREQUENCY: f32 = 1.2;
/// Phase distance to the look-ahead sample used for steering.
const LOOKAHEAD: f32 = 0.05;
/// Fraction of the remaining turn applied per tick.
const TURN_SMOOTHING: f32 = 0.2;

/// Advance every ready object one tick. Groups that are still pending or
/// failed contribute zero members; the pass is total over its inputs and
/// has no error path.
pub fn advance(scene: &mut Scene, profile: &ModeProfile, t: f32, scroll_progress: f32) {
    if let Some(station) = scene.station_mut() {
        station.yaw = (station.yaw + STATION_YAW_RATE).rem_euclid(TAU);
        station.roll = station_roll(scroll_progress);
    }

    for rock in scene.asteroids_mut() {
        // Only trigonometric consumers downstream; wrapped to keep the
        // accumulated angles small.
        rock.rotation.x = (rock.rotation.x + rock.spin.x).rem_euclid(TAU);
        rock.rotation.y = (rock.rotation.y + rock.spin.y).rem_euclid(TAU);
    }

    for rocket in scene.rockets_mut() {
        fly(rocket, profile, t);
    }
}

/// Roll is a pure function of scroll progress, recomputed from scratch
/// every tick so it never drifts.
pub fn station_roll(scroll_progress: f32) -> f32 {
    ROLL_BASE + ROLL_SPAN * scroll_progress
}

/// Arc angle for the given phase clock value.
pub fn arc_angle(orbit: &OrbitParams, t: f32) -> f32 {
    t * (orbit.angular_speed * SPEED_SCALE) + orbit.angle_offset
}

/// Position along the front-hemisphere arc at the given angle.
pub fn arc_position(orbit: &OrbitParams, profile: &ModeProfile, angle: f32) -> Vec3 {
    Vec3::new(
        (angle + orbit.orbit_tilt).cos() * orbit.orbit_radius,
        (angle * BOB_FREQUENCY + orbit.phase).sin() * profile.vertical_amplitude
            + orbit.vertical_offset,
        (angle + orbit.orbit_tilt).sin() * orbit.orbit_radius * profile.front_factor
            + profile.forward_bias,
    )
}

fn fly(rocket: &mut Rocket, profile: &ModeProfile, t: f32) {
    let angle = arc_angle(&rocket.orbit, t);
    rocket.position = arc_position(&rocket.orbit, profile, angle);

    // Bank toward the direction of travel: a smoothed turn, not a snap.
    let ahead = arc_position(&rocket.orbit, profile, angle + LOOKAHEAD);
    let Some(dir) = (ahead - rocket.position).try_normalize() else {
        // Degenerate look-ahead; hold the current facing this tick.
        return;
    };
    let target = Quat::from_rotation_arc(Vec3::NEG_Z, dir);
    rocket.orientation = rocket.orientation.slerp(target, TURN_SMOOTHING);
}
