//! Wire protocol between the simulation core and the JavaScript host.
//! Must stay in sync with the host's `protocol.js`.
//!
//! The transform buffer is a flat f32 array of up to `max_instances`
//! slots, each `INSTANCE_FLOATS` wide; the host reads `instance_count`
//! slots each frame and applies them to its scene-graph objects.

use crate::api::backdrop::BackdropConfig;

/// Floats per transform instance (wire format, never changes).
pub const INSTANCE_FLOATS: usize = 12;

/// Object kind tags written into an instance's `kind` field.
pub const KIND_STATION: f32 = 0.0;
pub const KIND_ASTEROID: f32 = 1.0;
pub const KIND_ROCKET: f32 = 2.0;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolLayout {
    /// Maximum transform instances (station + field + fleet).
    pub max_instances: usize,
    /// Instance section size in floats.
    pub buffer_total_floats: usize,
    /// Instance section size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    pub fn new(max_instances: usize) -> Self {
        let buffer_total_floats = max_instances * INSTANCE_FLOATS;
        Self {
            max_instances,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute layout from a BackdropConfig.
    pub fn from_config(config: &BackdropConfig) -> Self {
        Self::new(config.max_instances())
    }
}
