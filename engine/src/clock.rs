//! Frame Clock
//!
//! Best-effort fixed-rate frame pacing: each tick sleeps off whatever is
//! left of the frame budget. Slow frames are not compensated, so movement
//! (a per-tick constant) slows down with the frame rate rather than
//! jumping.

use std::time::{Duration, Instant};

/// Caps the frame loop at a fixed tick rate by sleeping.
#[derive(Debug)]
pub struct FrameClock {
    frame_budget: Duration,
    last_tick: Instant,
}

impl FrameClock {
    /// Create a clock targeting `fps` logical frames per second.
    pub fn new(fps: u32) -> Self {
        Self {
            frame_budget: Duration::from_secs(1) / fps.max(1),
            last_tick: Instant::now(),
        }
    }

    /// The per-frame time budget.
    pub fn frame_budget(&self) -> Duration {
        self.frame_budget
    }

    /// Sleep off the rest of the current frame's budget.
    ///
    /// Returns the wall-clock time since the previous tick, including the
    /// sleep. Frames that already overran their budget return immediately.
    pub fn tick(&mut self) -> Duration {
        let worked = self.last_tick.elapsed();
        if worked < self.frame_budget {
            std::thread::sleep(self.frame_budget - worked);
        }
        let now = Instant::now();
        let elapsed = now - self.last_tick;
        self.last_tick = now;
        elapsed
    }
}
