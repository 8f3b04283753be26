//! Test and helper mocks for cardboard_core

use std::cell::RefCell;
use std::rc::Rc;

use cardboard_traits::{HapticPattern, Haptics};

/// Records every requested pattern. Clones share the same log.
#[derive(Debug, Default, Clone)]
pub struct RecordingHaptics {
    log: Rc<RefCell<Vec<HapticPattern>>>,
}

impl RecordingHaptics {
    pub fn patterns(&self) -> Vec<HapticPattern> {
        self.log.borrow().clone()
    }
}

impl Haptics for RecordingHaptics {
    fn vibrate(
        &mut self,
        pattern: HapticPattern,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.log.borrow_mut().push(pattern);
        Ok(())
    }
}

/// Always fails; exercises the "haptics are best-effort" path.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingHaptics;

impl Haptics for FailingHaptics {
    fn vibrate(
        &mut self,
        _pattern: HapticPattern,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Err(Box::new(std::io::Error::other("vibrator unavailable")))
    }
}
