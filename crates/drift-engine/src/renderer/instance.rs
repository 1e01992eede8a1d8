use bytemuck::{Pod, Zeroable};
use glam::{Quat, Vec3};

/// Per-object transform written to the buffer the host renderer reads.
/// Must match the JavaScript protocol: 12 floats = 48 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct TransformInstance {
    /// Object kind (a `KIND_*` protocol constant).
    pub kind: f32,
    /// Slot within the kind's group (0 for the station).
    pub slot: f32,
    /// Position in world space.
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Orientation quaternion.
    pub qx: f32,
    pub qy: f32,
    pub qz: f32,
    pub qw: f32,
    /// Uniform model scale.
    pub scale: f32,
    _pad: [f32; 2],
}

impl TransformInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn new(kind: f32, slot: usize, position: Vec3, orientation: Quat, scale: f32) -> Self {
        Self {
            kind,
            slot: slot as f32,
            x: position.x,
            y: position.y,
            z: position.z,
            qx: orientation.x,
            qy: orientation.y,
            qz: orientation.z,
            qw: orientation.w,
            scale,
            _pad: [0.0; 2],
        }
    }
}

/// Transform buffer for all live scene objects, rebuilt once per frame.
pub struct TransformBuffer {
    instances: Vec<TransformInstance>,
}

impl TransformBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: TransformInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn as_slice(&self) -> &[TransformInstance] {
        &self.instances
    }

    /// Raw pointer for host-side reads out of wasm memory.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for TransformBuffer {
    fn default() -> Self {
        Self::new()
    }
}
