#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Config schemas and trace parsing for the cardboard trigger.
//!
//! - `Config` and sub-structs are deserialized from TOML and validated.
//!   Every section is optional; missing keys fall back to the defaults the
//!   classifier was tuned with.
//! - The trace CSV loader enforces headers and yields one row per host tick,
//!   for offline replay of recorded sessions.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MagnetCfg {
    /// Sliding window length in seconds (by elapsed time, not sample count)
    pub max_window_secs: f32,
    /// Inner band half-width around ratio 1.0; below this is float noise
    pub ratio_min: f32,
    /// Outer band half-width around ratio 1.0; beyond this is a spike
    pub ratio_max: f32,
    /// Raw magnitude below which no magnet is considered present
    pub absent_magnitude: f32,
    /// Max |ratio - 1| for a window to count as calm
    pub stable_ratio: f32,
    /// Max |last - first| magnitude for a window to count as calm
    pub stable_delta: f32,
}

impl Default for MagnetCfg {
    fn default() -> Self {
        Self {
            max_window_secs: 0.1,
            ratio_min: 0.03,
            ratio_max: 0.2,
            absent_magnitude: 150.0,
            stable_ratio: 0.001,
            stable_delta: 2.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TriggerCfg {
    /// Max seconds between down and up for the pair to count as a click
    pub click_speed_secs: f64,
    pub vibrate_on_down: bool,
    pub vibrate_on_up: bool,
    pub vibrate_on_click: bool,
    /// Keyboard key that acts as the trigger (e.g. "space", "enter", "a")
    pub key: String,
}

impl Default for TriggerCfg {
    fn default() -> Self {
        Self {
            click_speed_secs: 0.4,
            vibrate_on_down: false,
            vibrate_on_up: false,
            vibrate_on_click: true,
            key: "space".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Logging {
    pub file: Option<String>,  // path to .log (JSON lines)
    pub level: Option<String>, // "info","debug"
    /// Log rotation policy: "never" | "daily" | "hourly" (default: never)
    pub rotation: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct DebugCfg {
    /// Emit the status dump every N ticks at debug level (0 disables)
    pub status_every_ticks: u32,
}

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub magnet: MagnetCfg,
    #[serde(default)]
    pub trigger: TriggerCfg,
    #[serde(default)]
    pub logging: Logging,
    #[serde(default)]
    pub debug: DebugCfg,
}

pub fn load_toml(s: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(s)
}

impl Config {
    pub fn validate(&self) -> eyre::Result<()> {
        let m = &self.magnet;
        if !(m.max_window_secs.is_finite() && m.max_window_secs > 0.0) {
            eyre::bail!("magnet.max_window_secs must be > 0");
        }
        if m.max_window_secs > 10.0 {
            eyre::bail!("magnet.max_window_secs is unreasonably large (>10s)");
        }
        if !(m.ratio_min.is_finite() && m.ratio_min >= 0.0) {
            eyre::bail!("magnet.ratio_min must be >= 0");
        }
        if !(m.ratio_max.is_finite() && m.ratio_max <= 1.0) {
            eyre::bail!("magnet.ratio_max must be <= 1.0");
        }
        if m.ratio_min >= m.ratio_max {
            eyre::bail!("magnet.ratio_min must be < magnet.ratio_max");
        }
        if !(m.absent_magnitude.is_finite() && m.absent_magnitude >= 0.0) {
            eyre::bail!("magnet.absent_magnitude must be >= 0");
        }
        if !(m.stable_ratio.is_finite() && m.stable_ratio >= 0.0) {
            eyre::bail!("magnet.stable_ratio must be >= 0");
        }
        if !(m.stable_delta.is_finite() && m.stable_delta >= 0.0) {
            eyre::bail!("magnet.stable_delta must be >= 0");
        }

        let t = &self.trigger;
        if !(t.click_speed_secs.is_finite() && t.click_speed_secs >= 0.0) {
            eyre::bail!("trigger.click_speed_secs must be >= 0");
        }
        if t.key.trim().is_empty() {
            eyre::bail!("trigger.key must not be empty");
        }

        if let Some(rot) = self.logging.rotation.as_deref()
            && !matches!(rot, "never" | "daily" | "hourly")
        {
            eyre::bail!("logging.rotation must be one of never|daily|hourly");
        }

        Ok(())
    }
}

/// One recorded host tick.
///
/// Expected headers:
/// now,dt,magnitude,touch_active,touch_moved,key_down,key_up
///
/// Example:
/// now,dt,magnitude,touch_active,touch_moved,key_down,key_up
/// 0.016,0.016,301.2,false,false,,
/// 0.032,0.016,301.0,true,true,,
/// 0.048,0.016,300.9,false,false,space,
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TraceRow {
    /// Monotonic host time in seconds
    pub now: f64,
    /// Seconds since the previous tick
    pub dt: f32,
    /// Magnetometer vector magnitude
    pub magnitude: f32,
    pub touch_active: bool,
    pub touch_moved: bool,
    /// Key pressed this tick, if any
    pub key_down: Option<String>,
    /// Key released this tick, if any
    pub key_up: Option<String>,
}

pub const TRACE_HEADERS: [&str; 7] = [
    "now",
    "dt",
    "magnitude",
    "touch_active",
    "touch_moved",
    "key_down",
    "key_up",
];

pub fn load_trace_csv(path: &std::path::Path) -> eyre::Result<Vec<TraceRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| eyre::eyre!("open trace CSV {:?}: {}", path, e))?;

    // Enforce exact headers
    let headers = rdr
        .headers()
        .map_err(|e| eyre::eyre!("read CSV headers {:?}: {}", path, e))?
        .clone();
    let actual: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
    if actual != TRACE_HEADERS {
        eyre::bail!(
            "trace CSV must have headers '{}', got: {}",
            TRACE_HEADERS.join(","),
            actual.join(",")
        );
    }

    let mut rows: Vec<TraceRow> = Vec::new();
    for (idx, rec) in rdr.deserialize::<TraceRow>().enumerate() {
        let row = match rec {
            Ok(row) => row,
            Err(e) => {
                eyre::bail!("invalid CSV row {}: {}", idx + 2, e);
            }
        };
        if !row.now.is_finite() {
            eyre::bail!("invalid CSV row {}: now must be finite", idx + 2);
        }
        if !(row.dt.is_finite() && row.dt >= 0.0) {
            eyre::bail!("invalid CSV row {}: dt must be >= 0", idx + 2);
        }
        if !row.magnitude.is_finite() {
            eyre::bail!("invalid CSV row {}: magnitude must be finite", idx + 2);
        }
        if let Some(prev) = rows.last()
            && row.now < prev.now
        {
            eyre::bail!(
                "invalid CSV row {}: time went backwards ({} < {})",
                idx + 2,
                row.now,
                prev.now
            );
        }
        rows.push(row);
    }

    Ok(rows)
}
