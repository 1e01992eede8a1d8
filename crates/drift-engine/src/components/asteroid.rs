use glam::{Vec2, Vec3};

/// Per-tick drift applied to a rock's pitch and yaw, radians.
pub const DRIFT_SPIN: Vec2 = Vec2::new(0.002, 0.001);

/// One rock of the asteroid field.
#[derive(Debug, Clone, Copy)]
pub struct Asteroid {
    pub position: Vec3,
    /// Euler rotation (XYZ order), radians.
    pub rotation: Vec3,
    /// Fixed per-instance rotation increment (pitch, yaw) per tick.
    pub spin: Vec2,
    /// Uniform model scale.
    pub scale: f32,
}

impl Asteroid {
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            spin: DRIFT_SPIN,
            scale: 1.0,
        }
    }
}

impl Default for Asteroid {
    fn default() -> Self {
        Self::new()
    }
}
