//! The responsive re-layout pass: re-applies mode constants to existing
//! objects in place. Nothing is destroyed or recreated here, so group
//! sizes are invariant across any number of passes.

use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::layout::placement::{asteroid_placement, rocket_placement};
use crate::layout::viewport::ModeProfile;

/// Re-apply mode constants to the station and draw fresh placement for
/// every asteroid and every ready rocket. Each pass re-samples, so
/// back-to-back passes move things.
pub fn apply_layout(scene: &mut Scene, profile: &ModeProfile, rng: &mut Rng) {
    if let Some(station) = scene.station_mut() {
        station.scale = profile.station_scale;
        station.position.y = profile.station_y;
    }

    for rock in scene.asteroids_mut() {
        let p = asteroid_placement(profile, rng);
        // Accumulated drift angles are kept; only pose and size re-roll.
        rock.position = p.position;
        rock.scale = p.scale;
    }

    for (slot, rocket) in scene.rocket_slots_mut() {
        let p = rocket_placement(profile, slot, rng);
        rocket.orbit = p.orbit;
        rocket.scale = p.scale;
    }
}
