//! Frame timing for the present loop

use std::time::{Duration, Instant};

/// Counts presented frames and measures the time between them
///
/// The clock starts when it is created; each [`FrameClock::tick`] marks the
/// end of one presented frame.
#[derive(Debug, Clone)]
pub struct FrameClock {
    started: Instant,
    last_tick: Instant,
    last_frame: Duration,
    longest_frame: Duration,
    frames: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::start()
    }
}

impl FrameClock {
    /// Start a clock with no frames recorded
    pub fn start() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last_tick: now,
            last_frame: Duration::ZERO,
            longest_frame: Duration::ZERO,
            frames: 0,
        }
    }

    /// Record the end of a frame and return how long it took
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        self.last_frame = now.duration_since(self.last_tick);
        self.longest_frame = self.longest_frame.max(self.last_frame);
        self.last_tick = now;
        self.frames += 1;
        self.last_frame
    }

    /// Duration of the most recent frame
    pub const fn last_frame(&self) -> Duration {
        self.last_frame
    }

    /// Slowest frame seen so far
    pub const fn longest_frame(&self) -> Duration {
        self.longest_frame
    }

    /// Frames recorded
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Time from start to the last tick
    pub fn elapsed(&self) -> Duration {
        self.last_tick.duration_since(self.started)
    }
}
