/// Seconds elapsed since a reference timestamp in milliseconds, as handed
/// out by `performance.now()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    start_ms: f64,
}

impl FrameClock {
    pub fn starting_at(start_ms: f64) -> Self {
        Self { start_ms }
    }

    pub fn elapsed_secs(&self, now_ms: f64) -> f32 {
        ((now_ms - self.start_ms).max(0.0) * 0.001) as f32
    }
}
