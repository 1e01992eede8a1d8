use drift_engine::{
    build_transform_buffer, AssetKind, Backdrop, CameraSettings, FixedTimestep, InputEvent,
    InputQueue, ProtocolLayout, Scene, SceneManifest, TransformBuffer, INSTANCE_FLOATS,
};

/// Generic runner that wires the simulation loop to the browser.
///
/// Each concrete backdrop creates a `thread_local!` BackdropRunner and
/// exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
pub struct BackdropRunner<B: Backdrop> {
    backdrop: B,
    scene: Scene,
    input: InputQueue,
    transforms: TransformBuffer,
    timestep: FixedTimestep,
    layout: ProtocolLayout,
    initialized: bool,
}

impl<B: Backdrop> BackdropRunner<B> {
    pub fn new(backdrop: B) -> Self {
        let config = backdrop.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let layout = ProtocolLayout::from_config(&config);
        let transforms = TransformBuffer::with_capacity(layout.max_instances);

        Self {
            backdrop,
            scene: Scene::new(),
            input: InputQueue::new(),
            transforms,
            timestep,
            layout,
            initialized: false,
        }
    }

    /// Initialize the scene. Call once after construction.
    pub fn init(&mut self) {
        self.layout = ProtocolLayout::from_config(&self.backdrop.config());
        self.backdrop.init(&mut self.scene);
        self.initialized = true;
    }

    /// Push a page signal into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: advance the fixed-step simulation, then rebuild the
    /// transform buffer the host reads.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.backdrop.update(&mut self.scene, &self.input);
        }
        // Queued signals survive zero-step frames so none are dropped on
        // high-refresh displays.
        if steps > 0 {
            self.input.drain();
        }

        build_transform_buffer(&self.scene, &mut self.transforms);
    }

    /// Forwarded from a loader success callback.
    pub fn asset_ready(&mut self, kind: AssetKind, slot: usize) {
        self.backdrop.asset_ready(&mut self.scene, kind, slot);
    }

    /// Forwarded from a loader error callback.
    pub fn asset_failed(&mut self, kind: AssetKind, slot: usize) {
        self.backdrop.asset_failed(&mut self.scene, kind, slot);
    }

    /// Parse and apply a manifest JSON. A parse failure is logged and the
    /// built-in defaults stay in effect.
    pub fn load_manifest(&mut self, json: &str) {
        match SceneManifest::from_json(json) {
            Ok(manifest) => {
                self.backdrop.load_manifest(&mut self.scene, &manifest);
                self.layout = ProtocolLayout::from_config(&self.backdrop.config());
            }
            Err(err) => log::error!("manifest parse error: {err}"),
        }
    }

    // ---- Pointer accessors for host-side buffer reads ----

    pub fn transforms_ptr(&self) -> *const f32 {
        self.transforms.instances_ptr()
    }

    pub fn transform_count(&self) -> u32 {
        self.transforms.instance_count()
    }

    pub fn instance_floats(&self) -> u32 {
        INSTANCE_FLOATS as u32
    }

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }

    // ---- Scene accessors (read by the host via wasm_bindgen exports) ----

    pub fn camera(&self) -> CameraSettings {
        self.backdrop.camera()
    }

    pub fn fleet_size(&self) -> u32 {
        self.scene.fleet_size() as u32
    }

    pub fn rocket_skin(&self, slot: usize) -> i32 {
        self.scene
            .rocket_skin(slot)
            .map(|skin| skin as i32)
            .unwrap_or(-1)
    }
}
