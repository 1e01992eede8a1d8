//! Viewport classification and the per-mode constant tables.
//!
//! Two layout regimes exist: `Compact` for narrow (touch) viewports and
//! `Standard` for everything wider. All placement and motion constants
//! that differ between the two live in `ModeProfile` so the rest of the
//! code never branches on the mode itself.

use glam::Vec3;
use std::f32::consts::{FRAC_PI_4, PI};

/// Widths at or below this many CSS pixels classify as `Compact`.
pub const COMPACT_MAX_WIDTH: f32 = 768.0;

/// The two responsive layout regimes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportMode {
    Compact,
    Standard,
}

impl ViewportMode {
    /// Classify a viewport width. Pure and total. Called fresh on every
    /// resize and at init; never cached across re-layout passes, since
    /// the window may have crossed the breakpoint in between.
    pub fn classify(width_px: f32) -> Self {
        if width_px <= COMPACT_MAX_WIDTH {
            ViewportMode::Compact
        } else {
            ViewportMode::Standard
        }
    }

    /// Constant table for this mode.
    pub fn profile(self) -> &'static ModeProfile {
        match self {
            ViewportMode::Compact => &COMPACT,
            ViewportMode::Standard => &STANDARD,
        }
    }
}

/// Camera placement the host applies for a given mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    /// Vertical field of view, degrees.
    pub fov: f32,
    pub position: Vec3,
}

/// Placement and motion constants for one viewport mode.
#[derive(Debug, Clone, Copy)]
pub struct ModeProfile {
    /// Half-extents of the asteroid field on each axis.
    pub spread: Vec3,
    /// Asteroid scale range (lo, hi).
    pub asteroid_scale: (f32, f32),
    /// Arc radius for fleet slot 0.
    pub orbit_radius_base: f32,
    /// Radius growth per slot.
    pub orbit_radius_step: f32,
    /// Slot indices wrap at this count before the radius step applies.
    pub orbit_index_wrap: Option<usize>,
    /// Arc tilt is sampled from [-span, span).
    pub orbit_tilt_span: f32,
    /// Vertical offset is sampled from [-span, span).
    pub vertical_offset_span: f32,
    /// Angular speed factor range (lo, hi).
    pub angular_speed: (f32, f32),
    /// Rocket scale range (lo, hi).
    pub rocket_scale: (f32, f32),
    /// Flattening of the arc's z half-axis. Together with `forward_bias`
    /// this keeps every rocket on a front-hemisphere path, visible to the
    /// camera, rather than a full closed orbit.
    pub front_factor: f32,
    /// Constant push toward the camera along z.
    pub forward_bias: f32,
    /// Amplitude of the vertical bob.
    pub vertical_amplitude: f32,
    pub station_scale: f32,
    pub station_y: f32,
    pub camera: CameraSettings,
}

impl ModeProfile {
    /// Arc radius for a fleet slot.
    pub fn orbit_radius(&self, slot: usize) -> f32 {
        let slot = match self.orbit_index_wrap {
            Some(wrap) => slot % wrap,
            None => slot,
        };
        self.orbit_radius_base + slot as f32 * self.orbit_radius_step
    }
}

const COMPACT: ModeProfile = ModeProfile {
    spread: Vec3::new(5.0, 3.0, 4.0),
    asteroid_scale: (0.4, 1.4),
    orbit_radius_base: 1.8,
    orbit_radius_step: 0.35,
    orbit_index_wrap: Some(6),
    orbit_tilt_span: FRAC_PI_4,
    vertical_offset_span: 0.6,
    angular_speed: (0.002, 0.0032),
    rocket_scale: (0.06, 0.09),
    front_factor: 0.8,
    forward_bias: 3.2,
    vertical_amplitude: 0.6,
    station_scale: 0.85,
    station_y: -0.25,
    camera: CameraSettings {
        fov: 70.0,
        position: Vec3::new(0.0, -0.6, 6.0),
    },
};

const STANDARD: ModeProfile = ModeProfile {
    spread: Vec3::new(10.0, 6.0, 10.0),
    asteroid_scale: (0.5, 2.0),
    orbit_radius_base: 3.5,
    orbit_radius_step: 0.6,
    orbit_index_wrap: None,
    orbit_tilt_span: 0.35 * PI,
    vertical_offset_span: 1.0,
    angular_speed: (0.002, 0.003),
    rocket_scale: (0.08, 0.11),
    front_factor: 0.6,
    forward_bias: 2.5,
    vertical_amplitude: 0.8,
    station_scale: 0.6,
    station_y: 0.0,
    camera: CameraSettings {
        fov: 50.0,
        position: Vec3::new(0.0, -1.0, 8.0),
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        assert_eq!(ViewportMode::classify(768.0), ViewportMode::Compact);
        assert_eq!(ViewportMode::classify(768.1), ViewportMode::Standard);
    }

    #[test]
    fn typical_widths() {
        assert_eq!(ViewportMode::classify(400.0), ViewportMode::Compact);
        assert_eq!(ViewportMode::classify(1200.0), ViewportMode::Standard);
    }

    #[test]
    fn compact_radius_wraps_at_six() {
        let profile = ViewportMode::Compact.profile();
        assert_eq!(profile.orbit_radius(0), 1.8);
        assert_eq!(profile.orbit_radius(6), 1.8);
        assert!((profile.orbit_radius(1) - 2.15).abs() < 1e-6);
    }

    #[test]
    fn standard_radius_grows_per_slot() {
        let profile = ViewportMode::Standard.profile();
        assert!((profile.orbit_radius(2) - 4.7).abs() < 1e-6);
        assert!((profile.orbit_radius(7) - 7.7).abs() < 1e-6);
    }

    #[test]
    fn compact_camera_sits_closer() {
        let compact = ViewportMode::Compact.profile();
        let standard = ViewportMode::Standard.profile();
        assert!(compact.camera.fov > standard.camera.fov);
        assert!(compact.camera.position.z < standard.camera.position.z);
    }
}
