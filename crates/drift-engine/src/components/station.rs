use glam::Vec3;

/// Forward lean of the station model, radians. Fixed at creation.
const BASE_PITCH: f32 = 0.3;

/// The space station: at most one, admitted when its model resolves,
/// never removed afterwards.
///
/// Yaw accumulates every tick; roll is recomputed from scroll progress
/// every tick and never accumulates.
#[derive(Debug, Clone, Copy)]
pub struct Station {
    pub position: Vec3,
    /// Rotation about X, radians.
    pub pitch: f32,
    /// Rotation about Y, radians.
    pub yaw: f32,
    /// Rotation about Z, radians.
    pub roll: f32,
    /// Uniform model scale.
    pub scale: f32,
}

impl Station {
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            pitch: BASE_PITCH,
            yaw: 0.0,
            roll: 0.0,
            scale: 1.0,
        }
    }
}

impl Default for Station {
    fn default() -> Self {
        Self::new()
    }
}
