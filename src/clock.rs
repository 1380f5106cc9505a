//! Clock service and frame pacing
//!
//! The frame driver asks a `FramePacer` for each frame's delta. The pacer waits
//! on a `Clock` until the frame target has passed, so simulation code never
//! touches wall time directly and tests can run on a `ManualClock`.

use std::time::{Duration, Instant};

use crate::config::GameConfig;

/// Monotonic time source
pub trait Clock {
    /// Time elapsed since the clock's origin
    fn now(&self) -> Duration;

    /// Return once `now() >= deadline`
    fn wait_until(&mut self, deadline: Duration);
}

/// Wall clock backed by `Instant`
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn wait_until(&mut self, deadline: Duration) {
        let now = self.now();
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
    }
}

/// Clock that only moves when told to; waiting jumps straight to the deadline
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now
    }

    fn wait_until(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }
}

/// Fixed-rate frame governor
#[derive(Debug, Clone)]
pub struct FramePacer {
    frame_target: Duration,
    max_delta: f32,
    last_tick: Duration,
}

impl FramePacer {
    pub fn new(frame_target: Duration, max_delta: f32) -> Self {
        Self {
            frame_target,
            max_delta,
            last_tick: Duration::ZERO,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            Duration::from_millis(config.frame_target_ms),
            config.max_delta,
        )
    }

    pub fn frame_target(&self) -> Duration {
        self.frame_target
    }

    /// Wait out the rest of the frame, then return the elapsed seconds
    /// since the previous tick, clamped to `max_delta`
    pub fn next_delta(&mut self, clock: &mut impl Clock) -> f32 {
        clock.wait_until(self.last_tick + self.frame_target);
        let now = clock.now();
        let delta = now.saturating_sub(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta.min(self.max_delta)
    }
}
