//! CLI argument definitions and shared statics.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::OnceLock;

pub static FILE_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();
/// Whether the user asked for JSON output (controls structured error output).
pub static JSON_MODE: OnceLock<bool> = OnceLock::new();

#[derive(Parser, Debug)]
#[command(name = "cardboard", version, about = "Cardboard viewer trigger CLI")]
pub struct Cli {
    /// Path to config TOML (all sections optional; defaults when omitted)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Emit events, summaries, and errors as JSON lines
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Console log level (error|warn|info|debug|trace); RUST_LOG takes precedence
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Command to execute
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Feed a recorded trace CSV through the trigger, one row per tick
    Replay {
        /// Trace CSV (header: now,dt,magnitude,touch_active,touch_moved,key_down,key_up)
        #[arg(long, value_name = "FILE")]
        trace: PathBuf,
        /// Log the status dump every N ticks at debug level (overrides config)
        #[arg(long, value_name = "N")]
        status_every: Option<u32>,
    },
    /// Drive the trigger with a simulated magnet lever
    Simulate {
        /// Number of lever pulls
        #[arg(long, default_value_t = 3)]
        presses: u32,
        /// How long each pull is held, in ms
        #[arg(long, value_name = "MS", default_value_t = 200)]
        hold_ms: u64,
        /// Released time before each pull, in ms
        #[arg(long, value_name = "MS", default_value_t = 500)]
        gap_ms: u64,
        /// Host frame rate
        #[arg(long, value_name = "HZ", default_value_t = 60.0)]
        rate_hz: f64,
        /// Pace ticks with the wall clock instead of running as fast as possible
        #[arg(long, action = ArgAction::SetTrue)]
        realtime: bool,
        /// Noise seed for the simulated field
        #[arg(long, default_value_t = 11)]
        seed: u32,
        /// Log the status dump every N ticks at debug level (overrides config)
        #[arg(long, value_name = "N")]
        status_every: Option<u32>,
    },
    /// Validate the config and build a trigger
    SelfCheck,
}
