//! Derives per-tick host time from a `Clock`.
//!
//! The arbiter itself never reads a clock. Hosts that poll live sensors use
//! a `FrameTicker` to stamp each tick with `now` and `dt`; replays skip it and
//! take both from the recording.

use std::time::Instant;

use cardboard_traits::Clock;

use crate::input::TickInput;

#[derive(Debug)]
pub struct FrameTicker<C: Clock> {
    clock: C,
    epoch: Instant,
    last: Instant,
}

impl<C: Clock> FrameTicker<C> {
    pub fn new(clock: C) -> Self {
        let epoch = clock.now();
        Self {
            clock,
            epoch,
            last: epoch,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Seconds since the ticker was created, and since the previous call.
    pub fn next(&mut self) -> (f64, f32) {
        let now = self.clock.now();
        let dt = now.saturating_duration_since(self.last).as_secs_f32();
        self.last = now;
        (now.saturating_duration_since(self.epoch).as_secs_f64(), dt)
    }

    /// Stamp a fresh `TickInput` carrying the given magnetometer reading.
    pub fn next_input(&mut self, magnet_magnitude: f32) -> TickInput {
        let (now, dt) = self.next();
        TickInput::new(now, dt, magnet_magnitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardboard_traits::ManualClock;
    use std::time::Duration;

    #[test]
    fn stamps_follow_the_clock() {
        let clock = ManualClock::new();
        let mut t = FrameTicker::new(clock.clone());

        clock.advance(Duration::from_millis(20));
        let (now, dt) = t.next();
        assert!((now - 0.020).abs() < 1e-9);
        assert!((dt - 0.020).abs() < 1e-6);

        clock.advance(Duration::from_millis(30));
        let input = t.next_input(301.0);
        assert!((input.now - 0.050).abs() < 1e-9);
        assert!((input.dt - 0.030).abs() < 1e-6);
        assert_eq!(input.magnet_magnitude, 301.0);
    }
}
