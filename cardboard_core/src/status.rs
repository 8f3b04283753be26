//! Human-readable status dump. Diagnostic only.

use std::fmt;

use crate::magnet::MagnetState;
use crate::trigger::TriggerArbiter;

/// Snapshot of the arbiter and its classifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusReport {
    pub magnitude: f32,
    pub ratio: f32,
    pub delta: f32,
    pub stable: bool,
    pub magnet_state: MagnetState,
    pub magnet_down: bool,
    pub magnet_up: bool,
    pub touching: bool,
    pub held: bool,
    pub seconds_held: f64,
}

impl StatusReport {
    pub fn capture(a: &TriggerArbiter) -> Self {
        let m = a.magnet();
        let w = m.window_state();
        Self {
            magnitude: m.last_magnitude(),
            ratio: w.ratio,
            delta: w.delta,
            stable: m.is_stable(),
            magnet_state: m.state(),
            magnet_down: m.is_down(),
            magnet_up: m.is_up(),
            touching: a.touch().is_touching(),
            held: a.is_held(),
            seconds_held: a.seconds_held(),
        }
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Magnet Readings")?;
        writeln!(
            f,
            "{}{}",
            if self.magnet_down { "vvv " } else { "    " },
            if self.magnet_up { "^^^ " } else { "    " }
        )?;
        writeln!(f, "magnitude: {:.2}", self.magnitude)?;
        writeln!(f, "ratio: {:.4}", self.ratio)?;
        writeln!(f, "delta: {:.2}", self.delta)?;
        writeln!(f, "stable: {}", self.stable)?;
        writeln!(f, "state: {}", self.magnet_state.as_str())?;
        writeln!(f)?;
        writeln!(
            f,
            "Touch Reading: {}",
            if self.touching { "touching" } else { "--" }
        )?;
        write!(f, "Trigger State: {}", if self.held { "down" } else { "up" })?;
        if self.held {
            write!(f, " ({:.2}s)", self.seconds_held)?;
        }
        Ok(())
    }
}
