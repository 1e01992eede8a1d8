pub mod runner;

pub use runner::BackdropRunner;

use drift_engine::StationBackdrop;
use wasm_bindgen::prelude::*;

/// Generate all `#[wasm_bindgen]` exports for a backdrop scene.
///
/// This macro generates:
/// - `thread_local!` storage for the BackdropRunner
/// - a `with_runner()` helper function
/// - all wasm-bindgen exports (init, tick, page signals, asset
///   notifications, buffer and camera accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use drift_web::BackdropRunner;
///
/// drift_web::export_backdrop!(MyBackdrop, "my-backdrop");
/// ```
///
/// # Arguments
///
/// - `$backdrop_type`: the struct implementing `drift_engine::Backdrop`,
///   constructible via `new(viewport_width, viewport_height, seed)`
/// - `$name`: a string literal used in the initialization log message
#[macro_export]
macro_rules! export_backdrop {
    ($backdrop_type:ty, $name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::BackdropRunner<$backdrop_type>>> =
                RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::BackdropRunner<$backdrop_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow
                    .as_mut()
                    .expect("Backdrop not initialized. Call scene_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn scene_init(width: f32, height: f32, seed: u32) {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let backdrop = <$backdrop_type>::new(width, height, seed as u64);
            let runner = $crate::BackdropRunner::new(backdrop);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $name);
        }

        #[wasm_bindgen]
        pub fn scene_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn scene_resize(width: f32, height: f32) {
            with_runner(|r| r.push_input(drift_engine::InputEvent::Resize { width, height }));
        }

        #[wasm_bindgen]
        pub fn scene_scroll(offset: f32, range: f32) {
            with_runner(|r| r.push_input(drift_engine::InputEvent::Scroll { offset, range }));
        }

        #[wasm_bindgen]
        pub fn scene_load_manifest(json: &str) {
            with_runner(|r| r.load_manifest(json));
        }

        // ---- Asset notifications (loader callbacks on the host) ----

        #[wasm_bindgen]
        pub fn station_ready() {
            with_runner(|r| r.asset_ready(drift_engine::AssetKind::Station, 0));
        }

        #[wasm_bindgen]
        pub fn station_failed() {
            with_runner(|r| r.asset_failed(drift_engine::AssetKind::Station, 0));
        }

        #[wasm_bindgen]
        pub fn rocket_ready(slot: u32) {
            with_runner(|r| r.asset_ready(drift_engine::AssetKind::Rocket, slot as usize));
        }

        #[wasm_bindgen]
        pub fn rocket_failed(slot: u32) {
            with_runner(|r| r.asset_failed(drift_engine::AssetKind::Rocket, slot as usize));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_transforms_ptr() -> *const f32 {
            with_runner(|r| r.transforms_ptr())
        }

        #[wasm_bindgen]
        pub fn get_transform_count() -> u32 {
            with_runner(|r| r.transform_count())
        }

        #[wasm_bindgen]
        pub fn get_instance_floats() -> u32 {
            with_runner(|r| r.instance_floats())
        }

        #[wasm_bindgen]
        pub fn get_max_instances() -> u32 {
            with_runner(|r| r.max_instances())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }

        #[wasm_bindgen]
        pub fn get_fleet_size() -> u32 {
            with_runner(|r| r.fleet_size())
        }

        #[wasm_bindgen]
        pub fn get_rocket_skin(slot: u32) -> i32 {
            with_runner(|r| r.rocket_skin(slot as usize))
        }

        // ---- Camera accessors ----

        #[wasm_bindgen]
        pub fn get_camera_fov() -> f32 {
            with_runner(|r| r.camera().fov)
        }

        #[wasm_bindgen]
        pub fn get_camera_x() -> f32 {
            with_runner(|r| r.camera().position.x)
        }

        #[wasm_bindgen]
        pub fn get_camera_y() -> f32 {
            with_runner(|r| r.camera().position.y)
        }

        #[wasm_bindgen]
        pub fn get_camera_z() -> f32 {
            with_runner(|r| r.camera().position.z)
        }
    };
}

export_backdrop!(StationBackdrop, "station-backdrop");
