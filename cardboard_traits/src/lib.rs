pub mod clock;

pub use clock::{Clock, ManualClock, MonotonicClock};

/// Haptic pulse requested by the trigger for each kind of event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HapticPattern {
    /// Trigger went down.
    Press,
    /// Trigger went up.
    Release,
    /// Down/up pair completed fast enough to count as a click.
    Click,
}

impl HapticPattern {
    pub fn as_str(self) -> &'static str {
        match self {
            HapticPattern::Press => "press",
            HapticPattern::Release => "release",
            HapticPattern::Click => "click",
        }
    }
}

/// Fire-and-forget vibration backend. Errors are reported but never fatal.
pub trait Haptics {
    fn vibrate(
        &mut self,
        pattern: HapticPattern,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
