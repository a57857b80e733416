/// Turns variable wall-clock frame deltas into whole simulation steps.
///
/// The simulation itself is frame-stepped (all velocities are px/frame), so the
/// clock only decides *how many* steps to run per host frame.
#[derive(Debug, Clone)]
pub struct FrameClock {
    step_dt: f32,
    max_steps: u32,
    accumulator: f32,
    total_steps: u64,
}

impl FrameClock {
    pub fn new(step_dt: f32, max_steps: u32) -> Self {
        Self {
            step_dt,
            max_steps: max_steps.max(1),
            accumulator: 0.0,
            total_steps: 0,
        }
    }

    /// Feed one host frame's elapsed seconds. Returns the number of steps to run now.
    ///
    /// Backlog beyond `max_steps` is dropped so a stalled tab does not replay seconds
    /// of gameplay in a single frame.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        if !frame_dt.is_finite() || frame_dt <= 0.0 {
            return 0;
        }
        self.accumulator += frame_dt;
        let mut steps = (self.accumulator / self.step_dt) as u32;
        if steps > self.max_steps {
            steps = self.max_steps;
            self.accumulator = 0.0;
        } else {
            self.accumulator = (self.accumulator - steps as f32 * self.step_dt).max(0.0);
        }
        self.total_steps += steps as u64;
        steps
    }

    /// Fraction of a step carried over to the next frame (0.0..1.0).
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step_dt
    }

    pub fn step_dt(&self) -> f32 {
        self.step_dt
    }

    /// Steps handed out since construction.
    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }
}
