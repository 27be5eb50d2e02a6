// Millisecond counter measured from program start.

use std::time::Instant;

pub trait TickSource {
    /// Milliseconds since the source was started.
    fn ticks(&self) -> u64;
}

pub struct Ticks {
    start: Instant,
}

impl Ticks {
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }
}

impl TickSource for Ticks {
    fn ticks(&self) -> u64 {
        // nearest millisecond
        ((self.start.elapsed().as_micros() + 500) / 1000) as u64
    }
}
