mod cli;
mod error_fmt;
mod haptics;
mod logging;
mod output;
mod replay;
mod simulate;

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use cardboard_core::{TriggerArbiterBuilder, TriggerError};
use clap::Parser;
use eyre::WrapErr;

use crate::cli::{Cli, Commands, JSON_MODE};
use crate::error_fmt::{exit_code_for_error, format_error_json, humanize};
use crate::simulate::SimParams;

fn main() {
    let cli = Cli::parse();
    let _ = JSON_MODE.set(cli.json);

    if let Err(err) = real_main(cli) {
        if JSON_MODE.get().copied().unwrap_or(false) {
            eprintln!("{}", format_error_json(&err));
        } else {
            eprintln!("{}", humanize(&err));
        }
        std::process::exit(exit_code_for_error(&err));
    }
}

fn real_main(cli: Cli) -> eyre::Result<()> {
    let _ = color_eyre::install();

    let cfg = load_config(cli.config.as_deref())?;
    logging::init(cli.json, &cli.log_level, &cfg.logging)?;

    let shutdown = Arc::new(AtomicBool::new(false));
    {
        let flag = shutdown.clone();
        ctrlc::set_handler(move || flag.store(true, Ordering::Relaxed))
            .wrap_err("install Ctrl-C handler")?;
    }

    match cli.cmd {
        Commands::Replay {
            trace,
            status_every,
        } => {
            let summary = replay::run_replay(&cfg, &trace, status_every, cli.json)?;
            output::print_summary(&summary, cli.json);
        }
        Commands::Simulate {
            presses,
            hold_ms,
            gap_ms,
            rate_hz,
            realtime,
            seed,
            status_every,
        } => {
            let params = SimParams {
                presses,
                hold_ms,
                gap_ms,
                rate_hz,
                realtime,
                seed,
                status_every,
            };
            let summary = simulate::run_simulate(&cfg, &params, cli.json, shutdown)?;
            output::print_summary(&summary, cli.json);
        }
        Commands::SelfCheck => {
            let arbiter = TriggerArbiterBuilder::from_config(&cfg)?.try_build()?;
            tracing::debug!(?arbiter, "self-check built trigger");
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({
                        "status": "ok",
                        "key": arbiter.cfg().key.as_str(),
                        "click_speed_secs": arbiter.cfg().click_speed_secs,
                        "max_window_secs": arbiter.magnet().cfg().max_window_secs,
                    })
                );
            } else {
                println!("OK");
            }
        }
    }
    Ok(())
}

/// Load and validate the TOML config, or use defaults when no path is given.
fn load_config(path: Option<&Path>) -> eyre::Result<cardboard_config::Config> {
    let Some(path) = path else {
        return Ok(cardboard_config::Config::default());
    };
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("read config {}", path.display()))?;
    let cfg = cardboard_config::load_toml(&text)?;
    cfg.validate()
        .map_err(|e| TriggerError::Config(e.to_string()))?;
    Ok(cfg)
}
