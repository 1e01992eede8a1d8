//! The shipped scene: a slowly turning space station, a drifting asteroid
//! field, and a fleet of rockets on front-hemisphere arcs, all keyed to
//! viewport mode and page scroll.

use crate::api::backdrop::{Backdrop, BackdropConfig};
use crate::assets::manifest::SceneManifest;
use crate::assets::status::AssetKind;
use crate::components::asteroid::Asteroid;
use crate::components::rocket::Rocket;
use crate::components::station::Station;
use crate::core::clock::PhaseClock;
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::input::queue::{scroll_progress, InputEvent, InputQueue};
use crate::layout::placement::{asteroid_placement, rocket_placement};
use crate::layout::viewport::{CameraSettings, ViewportMode};
use crate::systems::{layout, motion};

pub struct StationBackdrop {
    config: BackdropConfig,
    mode: ViewportMode,
    clock: PhaseClock,
    rng: Rng,
    /// Latest derived scroll progress, [0, 1].
    scroll: f32,
}

impl StationBackdrop {
    pub fn new(viewport_width: f32, _viewport_height: f32, seed: u64) -> Self {
        Self {
            config: BackdropConfig::default(),
            mode: ViewportMode::classify(viewport_width),
            clock: PhaseClock::new(),
            rng: Rng::new(seed),
            scroll: 0.0,
        }
    }

    pub fn mode(&self) -> ViewportMode {
        self.mode
    }

    fn relayout(&mut self, scene: &mut Scene) {
        layout::apply_layout(scene, self.mode.profile(), &mut self.rng);
    }
}

impl Backdrop for StationBackdrop {
    fn config(&self) -> BackdropConfig {
        self.config.clone()
    }

    fn init(&mut self, scene: &mut Scene) {
        let profile = self.mode.profile();
        for _ in 0..self.config.asteroid_count {
            let p = asteroid_placement(profile, &mut self.rng);
            let mut rock = Asteroid::new();
            rock.position = p.position;
            rock.rotation = p.rotation;
            rock.scale = p.scale;
            scene.push_asteroid(rock);
        }
        scene.set_fleet_size(self.config.rocket_count);
        log::info!(
            "backdrop: {} rocks, {} fleet berths, {:?} viewport",
            scene.asteroid_count(),
            scene.bay_count(),
            self.mode
        );
    }

    fn update(&mut self, scene: &mut Scene, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::Resize { width, .. } => {
                    // Classified fresh every time; the window may have
                    // crossed the breakpoint since the last pass.
                    self.mode = ViewportMode::classify(width);
                    self.relayout(scene);
                }
                InputEvent::Scroll { offset, range } => {
                    self.scroll = scroll_progress(offset, range);
                }
            }
        }

        let t = self.clock.advance();
        motion::advance(scene, self.mode.profile(), t, self.scroll);
    }

    fn asset_ready(&mut self, scene: &mut Scene, kind: AssetKind, slot: usize) {
        match kind {
            AssetKind::Station => {
                scene.dock_station(Station::new());
                // Second layout pass now that the station exists; the
                // host fires the first one after its settle timer.
                self.relayout(scene);
            }
            AssetKind::Rocket => {
                let p = rocket_placement(self.mode.profile(), slot, &mut self.rng);
                let skin = self.rng.next_int(self.config.skin_count.max(1));
                if !scene.dock_rocket(slot, Rocket::new(p.orbit, p.scale, skin)) {
                    log::warn!("rocket slot {slot} out of range, ignoring");
                }
            }
        }
    }

    fn asset_failed(&mut self, scene: &mut Scene, kind: AssetKind, slot: usize) {
        match kind {
            AssetKind::Station => scene.mark_station_failed(),
            AssetKind::Rocket => scene.mark_rocket_failed(slot),
        }
        log::error!("{kind} load error (slot {slot}); member stays absent");
    }

    fn load_manifest(&mut self, scene: &mut Scene, manifest: &SceneManifest) {
        let fleet = manifest.rockets.models.len();
        if fleet != scene.bay_count() {
            self.config.rocket_count = fleet;
            scene.set_fleet_size(fleet);
        }
        if !manifest.rockets.textures.is_empty() {
            self.config.skin_count = manifest.rockets.textures.len() as u32;
        }
        log::info!(
            "manifest: {} rocket models, {} hull textures",
            fleet,
            self.config.skin_count
        );
    }

    fn camera(&self) -> CameraSettings {
        self.mode.profile().camera
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::motion::station_roll;

    fn ready_backdrop(width: f32) -> (StationBackdrop, Scene) {
        let mut backdrop = StationBackdrop::new(width, 800.0, 42);
        let mut scene = Scene::new();
        backdrop.init(&mut scene);
        (backdrop, scene)
    }

    #[test]
    fn init_fills_the_field_and_reserves_berths() {
        let (_, scene) = ready_backdrop(1200.0);
        assert_eq!(scene.asteroid_count(), 40);
        assert_eq!(scene.bay_count(), 8);
        assert_eq!(scene.fleet_size(), 0);
    }

    #[test]
    fn station_arrival_applies_layout() {
        let (mut backdrop, mut scene) = ready_backdrop(400.0);
        backdrop.asset_ready(&mut scene, AssetKind::Station, 0);
        let station = scene.station().expect("station docked");
        assert_eq!(station.scale, 0.85);
        assert_eq!(station.position.y, -0.25);
    }

    #[test]
    fn first_tick_roll_matches_zero_scroll() {
        let (mut backdrop, mut scene) = ready_backdrop(1200.0);
        backdrop.asset_ready(&mut scene, AssetKind::Station, 0);
        let input = InputQueue::new();
        backdrop.update(&mut scene, &input);
        assert!((scene.station().unwrap().roll - (-0.3)).abs() < 1e-6);
    }

    #[test]
    fn scroll_signal_drives_the_roll() {
        let (mut backdrop, mut scene) = ready_backdrop(1200.0);
        backdrop.asset_ready(&mut scene, AssetKind::Station, 0);

        let mut input = InputQueue::new();
        input.push(InputEvent::Scroll {
            offset: 1000.0,
            range: 2000.0,
        });
        backdrop.update(&mut scene, &input);
        input.drain();

        let roll = scene.station().unwrap().roll;
        assert!((roll - station_roll(0.5)).abs() < 1e-6);

        // Repeated ticks with no further scrolling hold the same roll.
        backdrop.update(&mut scene, &input);
        assert_eq!(scene.station().unwrap().roll, roll);
    }

    #[test]
    fn a_failed_rocket_leaves_the_fleet_short() {
        let (mut backdrop, mut scene) = ready_backdrop(1200.0);
        for slot in 0..7 {
            backdrop.asset_ready(&mut scene, AssetKind::Rocket, slot);
        }
        backdrop.asset_failed(&mut scene, AssetKind::Rocket, 7);

        assert_eq!(scene.fleet_size(), 7);
        let input = InputQueue::new();
        for _ in 0..100 {
            backdrop.update(&mut scene, &input);
        }
        assert_eq!(scene.fleet_size(), 7);
    }

    #[test]
    fn resize_reclassifies_and_relayouts() {
        let (mut backdrop, mut scene) = ready_backdrop(1200.0);
        assert_eq!(backdrop.mode(), ViewportMode::Standard);
        backdrop.asset_ready(&mut scene, AssetKind::Station, 0);

        let mut input = InputQueue::new();
        input.push(InputEvent::Resize {
            width: 400.0,
            height: 800.0,
        });
        backdrop.update(&mut scene, &input);

        assert_eq!(backdrop.mode(), ViewportMode::Compact);
        assert_eq!(scene.station().unwrap().scale, 0.85);
        assert_eq!(scene.asteroid_count(), 40);
        for rock in scene.asteroids() {
            assert!(rock.position.x.abs() <= 5.0);
        }
    }

    #[test]
    fn rocket_skins_come_from_the_configured_set() {
        let (mut backdrop, mut scene) = ready_backdrop(1200.0);
        for slot in 0..8 {
            backdrop.asset_ready(&mut scene, AssetKind::Rocket, slot);
        }
        for (_, rocket) in scene.rocket_slots() {
            assert!(rocket.skin < 2);
        }
    }

    #[test]
    fn manifest_resizes_the_fleet() {
        let (mut backdrop, mut scene) = ready_backdrop(1200.0);
        let manifest = SceneManifest::from_json(
            r#"{
                "station": { "model": "hub.obj", "texture": "hub.png" },
                "rockets": { "models": ["a.fbx", "b.fbx", "c.fbx"], "textures": ["t.png"] }
            }"#,
        )
        .unwrap();
        backdrop.load_manifest(&mut scene, &manifest);
        assert_eq!(scene.bay_count(), 3);
        assert_eq!(backdrop.config().rocket_count, 3);
        assert_eq!(backdrop.config().skin_count, 1);
    }
}
