//! Magnet switch classifier.
//!
//! A magnet swept past the phone's magnetometer produces a ramp in field
//! magnitude. Comparing the mean magnitude of the older half of a short
//! window against the newer half gives the direction of that ramp without
//! knowing the resting field:
//!
//! - `ratio < 1`: field rising (newer half stronger) → `Negative`
//! - `ratio > 1`: field falling → `Positive`
//! - `ratio ≈ 1`: nothing happening → `Neutral`
//!
//! Each distinct excursion into a band toggles the switch once. The
//! classifier only trusts an excursion after it has seen a calm window
//! (the stability latch), and forgets everything when the magnitude drops
//! below the absence floor.

use crate::config::MagnetCfg;
use crate::window::{Sample, SlidingWindow};

/// Band the current window ratio falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MagnetState {
    Negative,
    #[default]
    Neutral,
    Positive,
}

impl MagnetState {
    pub fn as_str(self) -> &'static str {
        match self {
            MagnetState::Negative => "negative",
            MagnetState::Neutral => "neutral",
            MagnetState::Positive => "positive",
        }
    }
}

/// Shape of the window on the last tick that had at least two samples.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindowState {
    /// avg(first half) / avg(second half)
    pub ratio: f32,
    /// |last - first| magnitude
    pub delta: f32,
}

/// Why the last `update` stopped where it did. Diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verdict {
    /// Not updated yet.
    #[default]
    Idle,
    /// Magnitude under the absence floor; state reset.
    Absent,
    /// Only one sample in the window; nothing to compare.
    Warmup,
    /// Ratio could not be computed (zero or non-finite).
    Indeterminate,
    /// Stability latch is off; state reset.
    Unstable,
    /// Classified; `flipped` when this tick toggled the switch.
    Classified { flipped: bool },
}

#[derive(Debug, Clone)]
pub struct MagnetClassifier {
    cfg: MagnetCfg,
    window: SlidingWindow<Sample>,
    window_state: WindowState,
    last_magnitude: f32,
    stable: bool,
    state: MagnetState,
    down: bool,
    verdict: Verdict,
}

impl MagnetClassifier {
    pub fn new(cfg: MagnetCfg) -> Self {
        Self {
            cfg,
            window: SlidingWindow::new(),
            window_state: WindowState::default(),
            last_magnitude: 0.0,
            stable: false,
            state: MagnetState::Neutral,
            down: false,
            verdict: Verdict::Idle,
        }
    }

    pub fn cfg(&self) -> &MagnetCfg {
        &self.cfg
    }

    /// Advance one tick with the raw magnitude and the tick's delta-time.
    pub fn update(&mut self, magnitude: f32, dt: f32) -> Verdict {
        self.window.trim(self.cfg.max_window_secs);
        self.window.push(Sample::new(magnitude, dt));
        self.last_magnitude = magnitude;
        self.verdict = self.classify(magnitude);
        self.verdict
    }

    fn classify(&mut self, magnitude: f32) -> Verdict {
        let shape = self.capture();

        if self.magnet_absent(magnitude) {
            self.stable = false;
            self.reset_state();
            return Verdict::Absent;
        }

        let Some(shape) = shape else {
            if !self.stable {
                self.reset_state();
            }
            return Verdict::Warmup;
        };

        if !shape.ratio.is_finite() {
            self.reset_state();
            return Verdict::Indeterminate;
        }
        self.window_state = shape;

        let band = self.band(shape.ratio);
        if self.is_calm(shape) {
            self.stable = true;
        }

        if !self.stable {
            self.reset_state();
            return Verdict::Unstable;
        }

        let flipped = band != MagnetState::Neutral && band != self.state;
        if flipped {
            self.down = !self.down;
            self.state = band;
            tracing::trace!(
                state = band.as_str(),
                down = self.down,
                ratio = shape.ratio,
                delta = shape.delta,
                "magnet switch flipped"
            );
        }
        Verdict::Classified { flipped }
    }

    /// Ratio and delta of the current window; `None` for a single sample.
    /// A zero second-half average yields a non-finite ratio that the caller
    /// treats as indeterminate.
    fn capture(&self) -> Option<WindowState> {
        if self.window.len() < 2 {
            return None;
        }
        let (first, second) = self.window.halves();
        let ratio = mean_magnitude(first) / mean_magnitude(second);
        let delta = match (self.window.first(), self.window.last()) {
            (Some(a), Some(b)) => (b.magnitude - a.magnitude).abs(),
            _ => 0.0,
        };
        Some(WindowState { ratio, delta })
    }

    fn band(&self, ratio: f32) -> MagnetState {
        let (lo, hi) = (self.cfg.ratio_min, self.cfg.ratio_max);
        if ratio < 1.0 - lo && ratio > 1.0 - hi {
            MagnetState::Negative
        } else if ratio > 1.0 + lo && ratio < 1.0 + hi {
            MagnetState::Positive
        } else {
            MagnetState::Neutral
        }
    }

    fn is_calm(&self, shape: WindowState) -> bool {
        shape.delta < self.cfg.stable_delta
            && shape.ratio < 1.0 + self.cfg.stable_ratio
            && shape.ratio > 1.0 - self.cfg.stable_ratio
    }

    /// In the absence of a stronger magnet the sensor only sees the Earth's field.
    fn magnet_absent(&self, magnitude: f32) -> bool {
        magnitude < self.cfg.absent_magnitude
    }

    pub fn reset_state(&mut self) {
        self.state = MagnetState::Neutral;
        self.down = false;
    }

    /// Switch is in the pressed position. Level signal.
    pub fn is_down(&self) -> bool {
        self.state != MagnetState::Neutral && self.down
    }

    /// Switch is in the released position after an excursion. Level signal.
    pub fn is_up(&self) -> bool {
        self.state != MagnetState::Neutral && !self.down
    }

    pub fn is_stable(&self) -> bool {
        self.stable
    }

    pub fn state(&self) -> MagnetState {
        self.state
    }

    pub fn window_state(&self) -> WindowState {
        self.window_state
    }

    pub fn window(&self) -> &SlidingWindow<Sample> {
        &self.window
    }

    pub fn last_magnitude(&self) -> f32 {
        self.last_magnitude
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }
}

fn mean_magnitude<'a>(samples: impl Iterator<Item = &'a Sample>) -> f32 {
    let (sum, n) = samples.fold((0.0f32, 0usize), |(s, n), x| (s + x.magnitude, n + 1));
    if n == 0 { 0.0 } else { sum / n as f32 }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Quarter-second ticks with a one-second window hold exactly five
    // samples in steady state, which keeps the ratios below exact.
    fn coarse() -> MagnetClassifier {
        MagnetClassifier::new(MagnetCfg {
            max_window_secs: 1.0,
            ..MagnetCfg::default()
        })
    }

    fn feed(m: &mut MagnetClassifier, magnitudes: &[f32]) {
        for &x in magnitudes {
            m.update(x, 0.25);
        }
    }

    #[test]
    fn constant_field_becomes_stable_and_neutral() {
        let mut m = MagnetClassifier::new(MagnetCfg::default());
        for _ in 0..20 {
            m.update(300.0, 0.01);
        }
        assert!(m.is_stable());
        assert_eq!(m.state(), MagnetState::Neutral);
        assert!(!m.is_down());
        assert!(!m.is_up());
        assert!((m.window_state().ratio - 1.0).abs() < 1e-6);
        assert_eq!(m.window_state().delta, 0.0);
    }

    #[test]
    fn first_tick_is_warmup() {
        let mut m = coarse();
        assert_eq!(m.update(300.0, 0.25), Verdict::Warmup);
        assert!(!m.is_stable());
        assert_eq!(m.update(300.0, 0.25), Verdict::Classified { flipped: false });
        assert!(m.is_stable());
    }

    #[test]
    fn rising_field_presses_then_falling_field_releases() {
        let mut m = coarse();
        feed(&mut m, &[300.0; 6]);
        assert_eq!(m.window().len(), 5);

        // [300, 300, 300, 300, 330]: 300 / 310
        assert_eq!(m.update(330.0, 0.25), Verdict::Classified { flipped: true });
        assert_eq!(m.state(), MagnetState::Negative);
        assert!(m.is_down());
        assert!(!m.is_up());

        // Same band again does not re-flip.
        assert_eq!(m.update(330.0, 0.25), Verdict::Classified { flipped: false });
        assert!(m.is_down());

        // Let the window settle at the new level; the switch stays down.
        feed(&mut m, &[330.0; 5]);
        assert!(m.is_down());
        assert!(m.is_stable());

        // [330, 330, 330, 330, 300]: 330 / 320
        assert_eq!(m.update(300.0, 0.25), Verdict::Classified { flipped: true });
        assert_eq!(m.state(), MagnetState::Positive);
        assert!(m.is_up());
        assert!(!m.is_down());
    }

    #[test]
    fn mirrored_ramps_flip_once_into_opposite_bands() {
        let mut rising = coarse();
        feed(&mut rising, &[300.0; 6]);
        rising.update(330.0, 0.25);

        let mut falling = coarse();
        feed(&mut falling, &[300.0; 6]);
        falling.update(270.0, 0.25);

        assert_eq!(rising.state(), MagnetState::Negative);
        assert_eq!(falling.state(), MagnetState::Positive);
        assert!(rising.window_state().ratio < 1.0 - 0.03);
        assert!(falling.window_state().ratio > 1.0 + 0.03);
        // Both start from released; one toggle each.
        assert!(rising.is_down());
        assert!(falling.is_down());
    }

    #[test]
    fn spike_beyond_outer_band_is_ignored() {
        let mut m = coarse();
        feed(&mut m, &[300.0; 6]);
        // [300, 300, 300, 300, 600]: 300 / 400 = 0.75, outside (0.8, 0.97)
        assert_eq!(m.update(600.0, 0.25), Verdict::Classified { flipped: false });
        assert_eq!(m.state(), MagnetState::Neutral);
        assert!(!m.is_down());
    }

    #[test]
    fn stability_holds_through_ambiguous_ticks() {
        let mut m = coarse();
        feed(&mut m, &[300.0; 6]);
        assert!(m.is_stable());
        // Large delta, ratio in the dead zone: neither calm nor absent.
        m.update(305.0, 0.25);
        assert!(m.is_stable());
        m.update(295.0, 0.25);
        assert!(m.is_stable());
    }

    #[test]
    fn absence_resets_everything() {
        let mut m = coarse();
        feed(&mut m, &[300.0; 6]);
        m.update(330.0, 0.25);
        assert!(m.is_down());

        assert_eq!(m.update(40.0, 0.25), Verdict::Absent);
        assert!(!m.is_stable());
        assert_eq!(m.state(), MagnetState::Neutral);
        assert!(!m.is_down());
        assert!(!m.is_up());
    }

    #[test]
    fn unstable_window_never_flips() {
        let mut m = coarse();
        // Ramp from the first tick: never calm, so never trusted.
        feed(&mut m, &[300.0, 310.0, 320.0, 330.0, 340.0, 350.0]);
        assert!(!m.is_stable());
        assert_eq!(m.verdict(), Verdict::Unstable);
        assert_eq!(m.state(), MagnetState::Neutral);
    }

    #[test]
    fn zero_floor_with_zero_field_is_indeterminate() {
        let mut m = MagnetClassifier::new(MagnetCfg {
            absent_magnitude: 0.0,
            max_window_secs: 1.0,
            ..MagnetCfg::default()
        });
        feed(&mut m, &[0.0, 0.0]);
        assert_eq!(m.verdict(), Verdict::Indeterminate);
        assert_eq!(m.state(), MagnetState::Neutral);
        assert!(m.window_state().ratio.is_finite());
    }
}
