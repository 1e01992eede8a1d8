use glam::{EulerRot, Quat};

use crate::bridge::protocol::{KIND_ASTEROID, KIND_ROCKET, KIND_STATION};
use crate::core::scene::Scene;
use crate::renderer::instance::{TransformBuffer, TransformInstance};

/// Build the wire buffer from the scene: station first, then the asteroid
/// field, then the ready fleet. Euler-driven kinds are converted to
/// quaternions here, XYZ order to match the host scene graph.
pub fn build_transform_buffer(scene: &Scene, buffer: &mut TransformBuffer) {
    buffer.clear();

    if let Some(station) = scene.station() {
        let q = Quat::from_euler(EulerRot::XYZ, station.pitch, station.yaw, station.roll);
        buffer.push(TransformInstance::new(
            KIND_STATION,
            0,
            station.position,
            q,
            station.scale,
        ));
    }

    for (i, rock) in scene.asteroids().iter().enumerate() {
        let q = Quat::from_euler(EulerRot::XYZ, rock.rotation.x, rock.rotation.y, rock.rotation.z);
        buffer.push(TransformInstance::new(
            KIND_ASTEROID,
            i,
            rock.position,
            q,
            rock.scale,
        ));
    }

    for (slot, rocket) in scene.rocket_slots() {
        buffer.push(TransformInstance::new(
            KIND_ROCKET,
            slot,
            rocket.position,
            rocket.orientation,
            rocket.scale,
        ));
    }
}
