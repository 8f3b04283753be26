//! Simulated lever pulls driven through the full arbiter.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use cardboard_core::sim::{PullSchedule, SimulatedMagnet};
use cardboard_core::{FrameTicker, TickInput, TriggerArbiter, TriggerArbiterBuilder, TriggerError};
use cardboard_traits::{Clock, ManualClock, MonotonicClock};

use crate::haptics::LogHaptics;
use crate::output::{Summary, print_event};

/// Settle time after the last release so the final up is observed.
const TAIL_SECS: f64 = 0.3;

#[derive(Debug, Clone)]
pub struct SimParams {
    pub presses: u32,
    pub hold_ms: u64,
    pub gap_ms: u64,
    pub rate_hz: f64,
    pub realtime: bool,
    pub seed: u32,
    pub status_every: Option<u32>,
}

pub fn run_simulate(
    cfg: &cardboard_config::Config,
    p: &SimParams,
    json: bool,
    shutdown: Arc<AtomicBool>,
) -> eyre::Result<Summary> {
    if !(p.rate_hz.is_finite() && p.rate_hz > 0.0 && p.rate_hz <= 10_000.0) {
        return Err(TriggerError::Input(format!(
            "--rate-hz must be in (0, 10000], got {}",
            p.rate_hz
        ))
        .into());
    }
    if p.hold_ms == 0 {
        return Err(TriggerError::Input("--hold-ms must be > 0".into()).into());
    }

    let schedule = PullSchedule {
        gap_secs: p.gap_ms as f64 / 1000.0,
        hold_secs: p.hold_ms as f64 / 1000.0,
        ..PullSchedule::default()
    };
    let sim = SimulatedMagnet::new(schedule, p.seed);
    let run_secs = sim.cycle_secs() * f64::from(p.presses) + TAIL_SECS;

    let mut builder = TriggerArbiterBuilder::from_config(cfg)?.with_haptics(LogHaptics);
    if let Some(n) = p.status_every {
        builder = builder.with_status_every(n);
    }
    let arbiter = builder.try_build()?;

    tracing::info!(
        presses = p.presses,
        rate_hz = p.rate_hz,
        realtime = p.realtime,
        run_secs,
        "simulating"
    );

    let period = Duration::from_secs_f64(1.0 / p.rate_hz);
    let run = Run {
        arbiter,
        sim,
        period,
        run_secs,
        json,
        shutdown,
    };
    let summary = if p.realtime {
        run.drive(FrameTicker::new(MonotonicClock::new()))
    } else {
        run.drive(FrameTicker::new(ManualClock::new()))
    };
    Ok(summary)
}

struct Run {
    arbiter: TriggerArbiter,
    sim: SimulatedMagnet,
    period: Duration,
    run_secs: f64,
    json: bool,
    shutdown: Arc<AtomicBool>,
}

impl Run {
    fn drive<C: Clock>(mut self, mut ticker: FrameTicker<C>) -> Summary {
        let mut summary = Summary::default();
        loop {
            if self.shutdown.load(Ordering::Relaxed) {
                tracing::info!(ticks = summary.ticks, "interrupted");
                break;
            }
            ticker.clock().sleep(self.period);
            let (now, dt) = ticker.next();
            if now > self.run_secs {
                break;
            }

            let input = TickInput::new(now, dt, self.sim.read(now));
            let report = self.arbiter.tick(&input);
            summary.ticks += 1;
            for e in &report.events {
                summary.record(e);
                print_event(e, self.json);
            }
        }
        summary
    }
}
