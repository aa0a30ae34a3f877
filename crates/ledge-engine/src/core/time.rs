/// Fixed timestep accumulator.
/// The frame loop itself lives in the host; this converts its variable
/// frame deltas into a whole number of fixed simulation steps.
pub struct FixedTimestep {
    /// Fixed delta time per step, in seconds.
    dt: f32,
    /// Time carried over from previous frames.
    accumulator: f32,
    /// Catch-up cap: at most this many steps per frame.
    max_steps: u32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            max_steps: 10,
        }
    }

    /// Override the catch-up cap.
    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Add frame time to the accumulator. Returns the number of fixed
    /// steps to run, capped to avoid the catch-up spiral after a stall.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        self.accumulator = self.accumulator.min(self.dt * self.max_steps as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Interpolation alpha for rendering between steps (0.0 to 1.0).
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}
