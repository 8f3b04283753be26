//! Offline replay of a recorded trace.

use std::path::Path;

use cardboard_core::{TickInput, TriggerArbiterBuilder, TriggerError};

use crate::haptics::LogHaptics;
use crate::output::{Summary, print_event};

pub fn run_replay(
    cfg: &cardboard_config::Config,
    trace: &Path,
    status_every: Option<u32>,
    json: bool,
) -> eyre::Result<Summary> {
    let rows = cardboard_config::load_trace_csv(trace)?;
    tracing::info!(rows = rows.len(), trace = %trace.display(), "replaying trace");

    let mut builder = TriggerArbiterBuilder::from_config(cfg)?.with_haptics(LogHaptics);
    if let Some(n) = status_every {
        builder = builder.with_status_every(n);
    }
    let mut arbiter = builder.try_build()?;

    let mut summary = Summary::default();
    for (idx, row) in rows.iter().enumerate() {
        // Header is line 1.
        let input = TickInput::try_from(row)
            .map_err(|e| TriggerError::Input(format!("trace row {}: {e}", idx + 2)))?;
        let report = arbiter.tick(&input);
        summary.ticks += 1;
        for e in &report.events {
            summary.record(e);
            print_event(e, json);
        }
    }

    if arbiter.is_held() {
        tracing::warn!(
            held_secs = arbiter.seconds_held(),
            "trace ended with the trigger still down"
        );
    }
    Ok(summary)
}
