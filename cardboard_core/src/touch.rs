//! Touch classifier.
//!
//! Touch counts on cardboard viewers jump for no reason (the conductive
//! lever brushing the screen), but those blips are too short to ever be
//! reported as "moved". So a press is only recognized on a moved phase, and
//! released once no touch point remains.

use crate::input::TouchSample;

#[derive(Debug, Clone, Default)]
pub struct TouchClassifier {
    current: TouchSample,
    was_touched: bool,
    up_edge: bool,
}

impl TouchClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one tick. The release edge is evaluated here, once, so
    /// `is_up` can be queried any number of times within the tick.
    pub fn update(&mut self, sample: TouchSample) {
        self.current = sample;
        self.was_touched |= self.is_down();
        self.up_edge = self.was_touched && !self.still_down();
        if self.up_edge {
            self.was_touched = false;
        }
    }

    /// A touch point is moving this tick.
    pub fn is_down(&self) -> bool {
        self.current.active && self.current.moved
    }

    /// Still touching since the last recognized press.
    pub fn still_down(&self) -> bool {
        self.was_touched && self.current.active
    }

    /// The touch recognized earlier was lifted this tick.
    pub fn is_up(&self) -> bool {
        self.up_edge
    }

    pub fn is_touching(&self) -> bool {
        self.current.active
    }

    pub fn was_touched(&self) -> bool {
        self.was_touched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_then_lift_reports_down_then_up_once() {
        let mut t = TouchClassifier::new();

        t.update(TouchSample::moving());
        assert!(t.is_down());
        assert!(t.still_down());
        assert!(!t.is_up());

        t.update(TouchSample::IDLE);
        assert!(!t.is_down());
        assert!(t.is_up());
        assert!(t.is_up(), "querying twice in a tick must not change the answer");
        assert!(!t.was_touched());

        t.update(TouchSample::IDLE);
        assert!(!t.is_up());
    }

    #[test]
    fn static_hold_after_move_stays_down() {
        let mut t = TouchClassifier::new();
        t.update(TouchSample::moving());
        for _ in 0..5 {
            t.update(TouchSample::resting());
            assert!(!t.is_down());
            assert!(t.still_down());
            assert!(!t.is_up());
        }
        t.update(TouchSample::IDLE);
        assert!(t.is_up());
    }

    #[test]
    fn touch_without_movement_is_ignored() {
        let mut t = TouchClassifier::new();
        t.update(TouchSample::resting());
        assert!(!t.is_down());
        assert!(!t.still_down());
        t.update(TouchSample::IDLE);
        assert!(!t.is_up());
    }
}
