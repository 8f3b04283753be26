//! Haptics backend for hosts without a vibration motor.

use cardboard_traits::{HapticPattern, Haptics};

/// Records each requested pulse in the log instead of vibrating.
#[derive(Debug, Default)]
pub struct LogHaptics;

impl Haptics for LogHaptics {
    fn vibrate(
        &mut self,
        pattern: HapticPattern,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!(pattern = pattern.as_str(), "vibrate");
        Ok(())
    }
}
