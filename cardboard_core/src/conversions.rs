//! Conversions bridging `cardboard_config` types to `cardboard_core` types.

use crate::config::{MagnetCfg, TriggerCfg};
use crate::error::BuildError;
use crate::input::{KeyCode, KeyEdge, TickInput, TouchSample};

// ── MagnetCfg ────────────────────────────────────────────────────────────────

impl From<&cardboard_config::MagnetCfg> for MagnetCfg {
    fn from(c: &cardboard_config::MagnetCfg) -> Self {
        Self {
            max_window_secs: c.max_window_secs,
            ratio_min: c.ratio_min,
            ratio_max: c.ratio_max,
            absent_magnitude: c.absent_magnitude,
            stable_ratio: c.stable_ratio,
            stable_delta: c.stable_delta,
        }
    }
}

// ── TriggerCfg ───────────────────────────────────────────────────────────────

impl TryFrom<&cardboard_config::Config> for TriggerCfg {
    type Error = BuildError;

    fn try_from(c: &cardboard_config::Config) -> Result<Self, Self::Error> {
        let t = &c.trigger;
        let key = KeyCode::new(&t.key).ok_or_else(|| BuildError::InvalidKey(t.key.clone()))?;
        Ok(Self {
            click_speed_secs: t.click_speed_secs,
            vibrate_on_down: t.vibrate_on_down,
            vibrate_on_up: t.vibrate_on_up,
            vibrate_on_click: t.vibrate_on_click,
            key,
            status_every_ticks: c.debug.status_every_ticks,
        })
    }
}

// ── TickInput ────────────────────────────────────────────────────────────────

impl TryFrom<&cardboard_config::TraceRow> for TickInput {
    type Error = BuildError;

    fn try_from(r: &cardboard_config::TraceRow) -> Result<Self, Self::Error> {
        let mut keys = Vec::new();
        if let Some(name) = r.key_down.as_deref() {
            let key = KeyCode::new(name).ok_or_else(|| BuildError::InvalidKey(name.to_string()))?;
            keys.push(KeyEdge::down(key));
        }
        if let Some(name) = r.key_up.as_deref() {
            let key = KeyCode::new(name).ok_or_else(|| BuildError::InvalidKey(name.to_string()))?;
            keys.push(KeyEdge::up(key));
        }
        Ok(Self {
            now: r.now,
            dt: r.dt,
            magnet_magnitude: r.magnitude,
            touch: TouchSample {
                active: r.touch_active,
                moved: r.touch_moved,
            },
            keys,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyDirection;

    #[test]
    fn trace_row_maps_to_tick_input() {
        let row = cardboard_config::TraceRow {
            now: 1.5,
            dt: 0.016,
            magnitude: 312.0,
            touch_active: true,
            touch_moved: false,
            key_down: Some("Space".to_string()),
            key_up: None,
        };
        let input = TickInput::try_from(&row).unwrap();
        assert_eq!(input.now, 1.5);
        assert_eq!(input.magnet_magnitude, 312.0);
        assert_eq!(input.touch, TouchSample::resting());
        assert_eq!(input.keys.len(), 1);
        assert_eq!(input.keys[0].key, KeyCode::space());
        assert_eq!(input.keys[0].direction, KeyDirection::Down);
    }

    #[test]
    fn trigger_cfg_rejects_bad_key() {
        let mut cfg = cardboard_config::Config::default();
        cfg.trigger.key = "left shift".to_string();
        assert_eq!(
            TriggerCfg::try_from(&cfg),
            Err(BuildError::InvalidKey("left shift".to_string()))
        );
    }

    #[test]
    fn toml_defaults_match_core_defaults() {
        let cfg = cardboard_config::Config::default();
        assert_eq!(MagnetCfg::from(&cfg.magnet), MagnetCfg::default());
        assert_eq!(TriggerCfg::try_from(&cfg).unwrap(), TriggerCfg::default());
    }
}
