//! Multi-source trigger arbiter.
//!
//! Touch, magnet, and key are polled in that order every tick. Each source
//! may report down or up; the arbiter is a two-state machine so a report
//! only has an effect when it moves the state, and a second source agreeing
//! within the same tick is a no-op.
//!
//! State transitions are committed before observers or haptics run.

use cardboard_traits::{HapticPattern, Haptics};

use crate::builder::TriggerArbiterBuilder;
use crate::config::{MagnetCfg, TriggerCfg};
use crate::input::TickInput;
use crate::key::KeyClassifier;
use crate::magnet::MagnetClassifier;
use crate::observer::{EventKind, ObserverId, Observers, TriggerEvent};
use crate::status::StatusReport;
use crate::touch::TouchClassifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerState {
    #[default]
    Up,
    Down,
}

/// Events emitted during one call, in emission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub events: Vec<TriggerEvent>,
}

impl TickReport {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn contains(&self, kind: EventKind) -> bool {
        self.events.iter().any(|e| e.kind() == kind)
    }

    pub fn kinds(&self) -> Vec<EventKind> {
        self.events.iter().map(TriggerEvent::kind).collect()
    }

    fn extend(&mut self, other: TickReport) {
        self.events.extend(other.events);
    }
}

pub struct TriggerArbiter {
    pub(crate) cfg: TriggerCfg,
    pub(crate) magnet: MagnetClassifier,
    pub(crate) touch: TouchClassifier,
    pub(crate) key: KeyClassifier,
    pub(crate) haptics: Option<Box<dyn Haptics>>,
    observers: Observers,
    state: TriggerState,
    click_start: f64,
    now: f64,
    magnet_was_down: bool,
    magnet_was_up: bool,
    ticks: u64,
}

impl core::fmt::Debug for TriggerArbiter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TriggerArbiter")
            .field("state", &self.state)
            .field("click_start", &self.click_start)
            .field("now", &self.now)
            .field("magnet", &self.magnet.state())
            .field("observers", &self.observers)
            .field("haptics", &self.haptics.is_some())
            .finish()
    }
}

impl TriggerArbiter {
    /// Start building an arbiter.
    pub fn builder() -> TriggerArbiterBuilder {
        TriggerArbiterBuilder::default()
    }

    pub(crate) fn from_parts(
        magnet: MagnetCfg,
        cfg: TriggerCfg,
        haptics: Option<Box<dyn Haptics>>,
    ) -> Self {
        Self {
            key: KeyClassifier::new(cfg.key.clone()),
            magnet: MagnetClassifier::new(magnet),
            touch: TouchClassifier::new(),
            cfg,
            haptics,
            observers: Observers::new(),
            state: TriggerState::Up,
            click_start: 0.0,
            now: 0.0,
            magnet_was_down: false,
            magnet_was_up: false,
            ticks: 0,
        }
    }

    /// Advance one tick: update the classifiers, then poll touch, magnet,
    /// and key in that order.
    pub fn tick(&mut self, input: &TickInput) -> TickReport {
        self.now = input.now;
        self.ticks = self.ticks.wrapping_add(1);
        self.magnet.update(input.magnet_magnitude, input.dt);
        self.touch.update(input.touch);

        let mut report = TickReport::default();

        if self.touch.is_down() {
            report.extend(self.report_down(input.now));
        }
        if self.touch.is_up() {
            report.extend(self.report_up(input.now));
        }

        // Magnet outputs are levels; act on their rising edges only.
        let magnet_down = self.magnet.is_down();
        let magnet_up = self.magnet.is_up();
        if magnet_down && !self.magnet_was_down {
            report.extend(self.report_down(input.now));
        } else if magnet_up && !self.magnet_was_up {
            report.extend(self.report_up(input.now));
        }
        self.magnet_was_down = magnet_down;
        self.magnet_was_up = magnet_up;

        if self.key.is_down(input) {
            report.extend(self.report_down(input.now));
        } else if self.key.is_up(input) {
            report.extend(self.report_up(input.now));
        }

        let every = self.cfg.status_every_ticks;
        if every > 0 && self.ticks % u64::from(every) == 0 {
            tracing::debug!("\n{}", self.status());
        }

        report
    }

    /// Move to Down if currently Up. No-op otherwise.
    pub fn report_down(&mut self, now: f64) -> TickReport {
        self.now = now;
        if self.state != TriggerState::Up {
            return TickReport::default();
        }
        self.state = TriggerState::Down;
        self.click_start = now;
        tracing::debug!(at = now, "trigger down");

        let event = TriggerEvent::Down { at: now };
        self.observers.dispatch(&event);
        if self.cfg.vibrate_on_down {
            self.vibrate(HapticPattern::Press);
        }
        TickReport {
            events: vec![event],
        }
    }

    /// Move to Up if currently Down, then emit Click when the hold was short
    /// enough. No-op otherwise.
    pub fn report_up(&mut self, now: f64) -> TickReport {
        self.now = now;
        if self.state != TriggerState::Down {
            return TickReport::default();
        }
        let held_secs = (now - self.click_start).max(0.0);
        let is_click = held_secs <= self.cfg.click_speed_secs;
        self.state = TriggerState::Up;
        self.click_start = 0.0;
        tracing::debug!(at = now, held_secs, is_click, "trigger up");

        let up = TriggerEvent::Up { at: now, held_secs };
        self.observers.dispatch(&up);
        if self.cfg.vibrate_on_up {
            self.vibrate(HapticPattern::Release);
        }
        let mut events = vec![up];

        if is_click {
            let click = TriggerEvent::Click { at: now, held_secs };
            self.observers.dispatch(&click);
            if self.cfg.vibrate_on_click {
                self.vibrate(HapticPattern::Click);
            }
            events.push(click);
        }
        TickReport { events }
    }

    fn vibrate(&mut self, pattern: HapticPattern) {
        if let Some(h) = self.haptics.as_mut()
            && let Err(e) = h.vibrate(pattern)
        {
            tracing::warn!(error = %e, pattern = pattern.as_str(), "vibrate failed; ignoring");
        }
    }

    pub fn on_down<F>(&mut self, f: F) -> ObserverId
    where
        F: FnMut(&TriggerEvent) + 'static,
    {
        self.observers.register(EventKind::Down, f)
    }

    pub fn on_up<F>(&mut self, f: F) -> ObserverId
    where
        F: FnMut(&TriggerEvent) + 'static,
    {
        self.observers.register(EventKind::Up, f)
    }

    pub fn on_click<F>(&mut self, f: F) -> ObserverId
    where
        F: FnMut(&TriggerEvent) + 'static,
    {
        self.observers.register(EventKind::Click, f)
    }

    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        self.observers.remove(id)
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    pub fn is_held(&self) -> bool {
        self.state == TriggerState::Down
    }

    /// Seconds since the trigger went down; 0 when not held.
    pub fn seconds_held(&self) -> f64 {
        if self.is_held() {
            (self.now - self.click_start).max(0.0)
        } else {
            0.0
        }
    }

    pub fn magnet(&self) -> &MagnetClassifier {
        &self.magnet
    }

    pub fn touch(&self) -> &TouchClassifier {
        &self.touch
    }

    pub fn key(&self) -> &KeyClassifier {
        &self.key
    }

    pub fn cfg(&self) -> &TriggerCfg {
        &self.cfg
    }

    pub fn status(&self) -> StatusReport {
        StatusReport::capture(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{KeyCode, KeyEdge, TouchSample};
    use crate::mocks::RecordingHaptics;

    fn arbiter() -> TriggerArbiter {
        TriggerArbiter::from_parts(MagnetCfg::default(), TriggerCfg::default(), None)
    }

    #[test]
    fn double_down_emits_once() {
        let mut a = arbiter();
        assert_eq!(a.report_down(0.0).kinds(), vec![EventKind::Down]);
        assert!(a.report_down(0.1).is_empty());
        assert!(a.is_held());
    }

    #[test]
    fn up_without_down_is_noop() {
        let mut a = arbiter();
        assert!(a.report_up(1.0).is_empty());
        assert_eq!(a.state(), TriggerState::Up);
    }

    #[test]
    fn seconds_held_tracks_host_time() {
        let mut a = arbiter();
        a.report_down(2.0);
        a.tick(&TickInput::new(2.5, 0.5, 300.0));
        assert!((a.seconds_held() - 0.5).abs() < 1e-9);
        a.report_up(3.0);
        assert_eq!(a.seconds_held(), 0.0);
    }

    #[test]
    fn click_haptic_uses_its_own_pattern() {
        let haptics = RecordingHaptics::default();
        let mut a = TriggerArbiter::from_parts(
            MagnetCfg::default(),
            TriggerCfg {
                vibrate_on_down: true,
                vibrate_on_up: true,
                ..TriggerCfg::default()
            },
            Some(Box::new(haptics.clone())),
        );
        a.report_down(0.0);
        a.report_up(0.1);
        assert_eq!(
            haptics.patterns(),
            vec![
                HapticPattern::Press,
                HapticPattern::Release,
                HapticPattern::Click
            ]
        );
    }

    #[test]
    fn touch_and_key_in_same_tick_report_once() {
        let mut a = arbiter();
        let input = TickInput::new(0.0, 0.016, 300.0)
            .with_touch(TouchSample::moving())
            .with_key(KeyEdge::down(KeyCode::space()));
        let report = a.tick(&input);
        assert_eq!(report.kinds(), vec![EventKind::Down]);
    }
}
