/// Phase advanced per simulation tick.
pub const TICK_PHASE: f32 = 0.008;

/// Maximum catch-up steps per frame (prevents spiral of death).
const MAX_CATCHUP_STEPS: f32 = 10.0;

/// Monotone phase clock. Advanced by a fixed increment every tick, never
/// reset; consumed only as an angular input downstream, so it carries no
/// wall-clock meaning.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhaseClock {
    t: f32,
}

impl PhaseClock {
    pub fn new() -> Self {
        Self { t: 0.0 }
    }

    /// Advance one tick and return the new phase.
    pub fn advance(&mut self) -> f32 {
        self.t += TICK_PHASE;
        self.t
    }

    /// Current phase.
    pub fn t(&self) -> f32 {
        self.t
    }
}

/// Fixed timestep accumulator.
/// Turns variable frame deltas into a consistent number of simulation
/// ticks, so each tick advances the phase clock by the same increment
/// regardless of display refresh rate.
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed
    /// steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        self.accumulator = self.accumulator.min(self.dt * MAX_CATCHUP_STEPS);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}
