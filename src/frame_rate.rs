// Frames-per-second sampler: one measurement every SAMPLE_FRAMES frames.

use crate::ticks::TickSource;

pub const SAMPLE_FRAMES: u32 = 32;

pub struct FrameRate {
    count: u32,
    window_start: u64,
}

impl FrameRate {
    pub fn new(clock: &impl TickSource) -> Self {
        Self { count: 0, window_start: clock.ticks() }
    }

    /// Frames counted in the current window.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Count one frame. Every SAMPLE_FRAMES calls returns the measured rate
    /// and starts a new window, however long the frames took.
    pub fn sample(&mut self, clock: &impl TickSource) -> Option<f32> {
        self.count += 1;
        if self.count < SAMPLE_FRAMES {
            return None;
        }
        let now = clock.ticks();
        let secs = now.saturating_sub(self.window_start) as f32 / 1000.0;
        let fps = self.count as f32 / secs; // inf if the whole window fit in one tick
        self.count = 0;
        self.window_start = now;
        Some(fps)
    }
}
