use crate::assets::manifest::SceneManifest;
use crate::assets::status::AssetKind;
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::layout::viewport::CameraSettings;

/// Configuration for the runner, provided by the backdrop.
#[derive(Debug, Clone)]
pub struct BackdropConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Rocks in the asteroid field.
    pub asteroid_count: usize,
    /// Berths in the rocket fleet.
    pub rocket_count: usize,
    /// Hull texture variants the host ships.
    pub skin_count: u32,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            asteroid_count: 40,
            rocket_count: 8,
            skin_count: 2,
        }
    }
}

impl BackdropConfig {
    /// Upper bound of live objects: the station plus both groups.
    pub fn max_instances(&self) -> usize {
        1 + self.asteroid_count + self.rocket_count
    }
}

/// The contract a backdrop scene fulfills for the runner.
pub trait Backdrop {
    /// Return runner configuration. Called once before init.
    fn config(&self) -> BackdropConfig {
        BackdropConfig::default()
    }

    /// Populate the scene's synchronous groups and reserve async berths.
    fn init(&mut self, scene: &mut Scene);

    /// One simulation tick: read pending page signals, advance every
    /// ready object.
    fn update(&mut self, scene: &mut Scene, input: &InputQueue);

    /// An async asset resolved; admit the object it backs.
    fn asset_ready(&mut self, scene: &mut Scene, kind: AssetKind, slot: usize);

    /// An async asset failed; the member stays absent for the session.
    fn asset_failed(&mut self, scene: &mut Scene, kind: AssetKind, slot: usize);

    /// A manifest arrived from the host. Optional.
    fn load_manifest(&mut self, _scene: &mut Scene, _manifest: &SceneManifest) {}

    /// Camera placement for the current viewport mode.
    fn camera(&self) -> CameraSettings;
}
