//! Builder for `TriggerArbiter`.
//!
//! Every knob has a default, so `TriggerArbiter::builder().try_build()`
//! always yields a working arbiter. Configuration is validated once here;
//! the tick path never re-checks it.

use cardboard_traits::Haptics;

use crate::config::{MagnetCfg, TriggerCfg};
use crate::error::Result;
use crate::input::KeyCode;
use crate::trigger::TriggerArbiter;

#[derive(Default)]
pub struct TriggerArbiterBuilder {
    magnet: Option<MagnetCfg>,
    trigger: Option<TriggerCfg>,
    key: Option<KeyCode>,
    status_every_ticks: Option<u32>,
    haptics: Option<Box<dyn Haptics>>,
}

impl core::fmt::Debug for TriggerArbiterBuilder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TriggerArbiterBuilder")
            .field("magnet", &self.magnet)
            .field("trigger", &self.trigger)
            .field("key", &self.key)
            .field("status_every_ticks", &self.status_every_ticks)
            .field("haptics", &self.haptics.is_some())
            .finish()
    }
}

impl TriggerArbiterBuilder {
    /// Seed magnet and trigger settings from a parsed TOML config.
    pub fn from_config(cfg: &cardboard_config::Config) -> Result<Self> {
        let trigger = TriggerCfg::try_from(cfg).map_err(eyre::Report::new)?;
        Ok(Self::default()
            .with_magnet((&cfg.magnet).into())
            .with_trigger(trigger))
    }

    pub fn with_magnet(mut self, magnet: MagnetCfg) -> Self {
        self.magnet = Some(magnet);
        self
    }

    pub fn with_trigger(mut self, trigger: TriggerCfg) -> Self {
        self.trigger = Some(trigger);
        self
    }

    /// Override the keyboard trigger key.
    pub fn with_key(mut self, key: KeyCode) -> Self {
        self.key = Some(key);
        self
    }

    /// Log the status dump every `n` ticks (0 disables).
    pub fn with_status_every(mut self, n: u32) -> Self {
        self.status_every_ticks = Some(n);
        self
    }

    pub fn with_haptics(mut self, haptics: impl Haptics + 'static) -> Self {
        self.haptics = Some(Box::new(haptics));
        self
    }

    pub fn try_build(self) -> Result<TriggerArbiter> {
        let magnet = self.magnet.unwrap_or_default();
        let mut trigger = self.trigger.unwrap_or_default();
        if let Some(key) = self.key {
            trigger.key = key;
        }
        if let Some(n) = self.status_every_ticks {
            trigger.status_every_ticks = n;
        }

        magnet.validate().map_err(eyre::Report::new)?;
        trigger.validate().map_err(eyre::Report::new)?;

        tracing::debug!(
            max_window_secs = magnet.max_window_secs,
            absent_magnitude = magnet.absent_magnitude,
            click_speed_secs = trigger.click_speed_secs,
            key = %trigger.key,
            haptics = self.haptics.is_some(),
            "trigger arbiter built"
        );
        Ok(TriggerArbiter::from_parts(magnet, trigger, self.haptics))
    }
}
