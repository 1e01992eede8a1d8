pub mod api;
pub mod core;
pub mod components;
pub mod layout;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;
pub mod backdrop;

// Re-export key types at crate root for convenience
pub use api::backdrop::{Backdrop, BackdropConfig};
pub use assets::manifest::{RocketAssets, SceneManifest, StationAssets};
pub use assets::status::{AssetKind, SlotStatus};
pub use backdrop::StationBackdrop;
pub use bridge::protocol::{
    ProtocolLayout, INSTANCE_FLOATS, KIND_ASTEROID, KIND_ROCKET, KIND_STATION,
};
pub use components::asteroid::Asteroid;
pub use components::rocket::{OrbitParams, Rocket};
pub use components::station::Station;
pub use core::clock::{FixedTimestep, PhaseClock, TICK_PHASE};
pub use core::rng::Rng;
pub use core::scene::{RocketBay, Scene};
pub use input::queue::{scroll_progress, InputEvent, InputQueue};
pub use layout::placement::{
    asteroid_placement, rocket_placement, AsteroidPlacement, RocketPlacement,
};
pub use layout::viewport::{CameraSettings, ModeProfile, ViewportMode, COMPACT_MAX_WIDTH};
pub use renderer::instance::{TransformBuffer, TransformInstance};
pub use systems::layout::apply_layout;
pub use systems::motion::{advance, arc_angle, arc_position, station_roll};
pub use systems::render::build_transform_buffer;
