//! Configuration types for the trigger engine.
//!
//! These are the runtime configuration structs used by `TriggerArbiter`.
//! They are separate from the TOML-deserialized config in `cardboard_config`.

use crate::error::BuildError;
use crate::input::KeyCode;

/// Magnet classifier tuning.
///
/// The defaults were picked on a handful of phones; expect to retune
/// `absent_magnitude` and the ratio bands per device family.
#[derive(Debug, Clone, PartialEq)]
pub struct MagnetCfg {
    /// Sliding window length in seconds.
    pub max_window_secs: f32,
    /// Inner band half-width around ratio 1.0. Ratios closer to 1.0 are noise.
    pub ratio_min: f32,
    /// Outer band half-width around ratio 1.0. Ratios further out are spikes.
    pub ratio_max: f32,
    /// Raw magnitude below which only the ambient field is present.
    pub absent_magnitude: f32,
    /// Max |ratio - 1| for the window to count as calm.
    pub stable_ratio: f32,
    /// Max |last - first| magnitude for the window to count as calm.
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

impl MagnetCfg {
    pub fn validate(&self) -> Result<(), BuildError> {
        if !(self.max_window_secs.is_finite() && self.max_window_secs > 0.0) {
            return Err(BuildError::InvalidConfig("max_window_secs must be > 0"));
        }
        if !(self.ratio_min.is_finite() && self.ratio_min >= 0.0) {
            return Err(BuildError::InvalidConfig("ratio_min must be >= 0"));
        }
        if !(self.ratio_max.is_finite() && self.ratio_max > self.ratio_min) {
            return Err(BuildError::InvalidConfig("ratio_max must be > ratio_min"));
        }
        if self.ratio_max > 1.0 {
            return Err(BuildError::InvalidConfig("ratio_max must be <= 1.0"));
        }
        if !(self.absent_magnitude.is_finite() && self.absent_magnitude >= 0.0) {
            return Err(BuildError::InvalidConfig("absent_magnitude must be >= 0"));
        }
        if !(self.stable_ratio.is_finite() && self.stable_ratio >= 0.0) {
            return Err(BuildError::InvalidConfig("stable_ratio must be >= 0"));
        }
        if !(self.stable_delta.is_finite() && self.stable_delta >= 0.0) {
            return Err(BuildError::InvalidConfig("stable_delta must be >= 0"));
        }
        Ok(())
    }
}

/// Arbiter policy: click timing, haptics, and the keyboard trigger key.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerCfg {
    /// A down/up pair no longer than this (seconds) also emits Click.
    pub click_speed_secs: f64,
    pub vibrate_on_down: bool,
    pub vibrate_on_up: bool,
    pub vibrate_on_click: bool,
    pub key: KeyCode,
    /// Log the status dump every N ticks at debug level. 0 disables.
    pub status_every_ticks: u32,
}

impl Default for TriggerCfg {
    fn default() -> Self {
        Self {
            click_speed_secs: 0.4,
            vibrate_on_down: false,
            vibrate_on_up: false,
            vibrate_on_click: true,
            key: KeyCode::space(),
            status_every_ticks: 0,
        }
    }
}

impl TriggerCfg {
    pub fn validate(&self) -> Result<(), BuildError> {
        if !(self.click_speed_secs.is_finite() && self.click_speed_secs >= 0.0) {
            return Err(BuildError::InvalidConfig("click_speed_secs must be >= 0"));
        }
        Ok(())
    }
}
