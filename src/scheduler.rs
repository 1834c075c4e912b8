//! Fixed-timestep scheduling
//!
//! The logic loop runs at a constant tick rate: elapsed time accumulates and
//! whole ticks are drained from it, never partial ones. The accumulator is
//! fed elapsed seconds by the caller rather than reading a clock itself, so
//! catch-up behavior is testable with synthetic deltas.

use crate::consts::{MAX_CATCH_UP_TICKS, TICK_DT};

/// Accumulates elapsed time and converts it to whole logic ticks
#[derive(Debug, Clone)]
pub struct FixedStep {
    dt: f32,
    accumulator: f32,
    max_catch_up: u32,
}

impl Default for FixedStep {
    /// A clock at the standard simulation rate.
    fn default() -> Self {
        Self {
            dt: TICK_DT,
            accumulator: 0.0,
            max_catch_up: MAX_CATCH_UP_TICKS,
        }
    }
}

impl FixedStep {
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            dt: 1.0 / ticks_per_second as f32,
            accumulator: 0.0,
            max_catch_up: MAX_CATCH_UP_TICKS,
        }
    }

    pub fn with_max_catch_up(mut self, ticks: u32) -> Self {
        self.max_catch_up = ticks;
        self
    }

    /// Duration of one tick in seconds
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Feed elapsed seconds and drain the number of whole ticks to run now.
    ///
    /// At most `max_catch_up` ticks are returned per call; any whole-tick
    /// backlog beyond that is dropped so a long stall cannot snowball into
    /// an ever-growing catch-up debt. The sub-tick remainder always carries
    /// over to the next call.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        self.accumulator += elapsed.max(0.0);

        let mut ticks = 0;
        while self.accumulator >= self.dt && ticks < self.max_catch_up {
            self.accumulator -= self.dt;
            ticks += 1;
        }

        if ticks == self.max_catch_up && self.accumulator >= self.dt {
            log::debug!(
                "dropping {:.0} ticks of backlog",
                (self.accumulator / self.dt).floor()
            );
            self.accumulator %= self.dt;
        }

        ticks
    }

    /// Time left in the current tick budget, for callers that want to sleep
    /// out the remainder of a frame.
    pub fn sleep_budget(&self) -> f32 {
        (self.dt - self.accumulator).max(0.0)
    }
}
