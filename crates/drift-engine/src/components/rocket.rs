use glam::{Quat, Vec3};

/// Fixed per-craft constants governing a rocket's front-hemisphere arc.
/// Set in full when the craft is admitted to the fleet and re-rolled on
/// every responsive re-layout pass; never read before being set.
#[derive(Debug, Clone, Copy)]
pub struct OrbitParams {
    /// Arc radius in world units.
    pub orbit_radius: f32,
    /// Tilt of the arc, radians.
    pub orbit_tilt: f32,
    /// Base angular speed factor (scaled up in the motion system).
    pub angular_speed: f32,
    /// Starting angle along the arc, radians.
    pub angle_offset: f32,
    /// Constant height offset added to the vertical bob.
    pub vertical_offset: f32,
    /// Phase of the vertical bob, radians.
    pub phase: f32,
}

/// One craft of the rocket fleet.
#[derive(Debug, Clone, Copy)]
pub struct Rocket {
    pub orbit: OrbitParams,
    pub position: Vec3,
    /// Current facing; steered toward the direction of travel each tick.
    pub orientation: Quat,
    /// Uniform model scale.
    pub scale: f32,
    /// Which of the manifest's hull textures the host applies.
    pub skin: u32,
}

impl Rocket {
    pub fn new(orbit: OrbitParams, scale: f32, skin: u32) -> Self {
        Self {
            orbit,
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            scale,
            skin,
        }
    }
}
