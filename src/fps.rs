use std::time::{Duration, Instant};

pub const TITLE_INTERVAL_S: f64 = 0.1;

/// Frame rate sampled from the last frame time, reported roughly every
/// [`TITLE_INTERVAL_S`] seconds.
#[derive(Debug)]
pub struct FpsCounter {
    countdown_s: f64,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            countdown_s: TITLE_INTERVAL_S,
        }
    }

    pub fn tick(&mut self, elapsed_s: f64) -> Option<f64> {
        self.countdown_s -= elapsed_s;

        if self.countdown_s <= 0.0 && elapsed_s > 0.0 {
            self.countdown_s = TITLE_INTERVAL_S;
            Some(1.0 / elapsed_s)
        } else {
            None
        }
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

pub fn fps_title(base: &str, fps: f64) -> String {
    format!("{base}\tFPS {fps:.2}")
}

/// Wall clock between consecutive frames.
#[derive(Debug)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    pub fn lap(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now - self.last;
        self.last = now;
        elapsed
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
