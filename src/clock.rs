use std::time::Instant;

/// Source of elapsed seconds since the animation started
pub trait TimeSource {
    /// Seconds since start. Called once per frame
    fn elapsed(&mut self) -> f32;
}

/// Wall clock - seconds since creation or last reset
#[derive(Debug)]
pub struct Clock {
    start: Instant,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Restart counting from zero
    pub fn reset(&mut self) {
        self.start = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for Clock {
    fn elapsed(&mut self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}

/// Deterministic clock for headless runs
/// Each call returns the current tick's time, then advances one step
#[derive(Debug, Clone, Copy)]
pub struct FixedStep {
    step: f32,
    start: f32,
    ticks: u64,
}

impl FixedStep {
    /// Clock ticking at `fps` frames per second, starting at zero
    pub fn new(fps: f32) -> Self {
        Self::starting_at(fps, 0.0)
    }

    /// Clock replaying from `start` seconds
    pub fn starting_at(fps: f32, start: f32) -> Self {
        let step = if fps > 0.0 { 1.0 / fps } else { 0.0 };
        Self {
            step,
            start: start.max(0.0),
            ticks: 0,
        }
    }
}

impl TimeSource for FixedStep {
    fn elapsed(&mut self) -> f32 {
        // Multiplied, not accumulated
        let time = self.start + self.ticks as f32 * self.step;
        self.ticks += 1;
        time
    }
}
