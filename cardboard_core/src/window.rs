//! Duration-bounded sliding window.
//!
//! Retains recent samples by elapsed time rather than by count. Trimming
//! never empties the window: a single slow frame flushes history but the
//! newest sample always survives.

use std::collections::VecDeque;

/// Anything that occupies a slice of time in the window.
pub trait Timed {
    /// Seconds this entry covers (the host's delta-time for its tick).
    fn duration(&self) -> f32;
}

/// Magnetometer magnitude recorded for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub magnitude: f32,
    pub dt: f32,
}

impl Sample {
    pub fn new(magnitude: f32, dt: f32) -> Self {
        Self { magnitude, dt }
    }
}

impl Timed for Sample {
    #[inline]
    fn duration(&self) -> f32 {
        self.dt
    }
}

#[derive(Debug, Clone)]
pub struct SlidingWindow<T> {
    items: VecDeque<T>,
    total: f32,
}

impl<T> Default for SlidingWindow<T> {
    fn default() -> Self {
        Self {
            items: VecDeque::new(),
            total: 0.0,
        }
    }
}

impl<T: Timed> SlidingWindow<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: T) {
        self.total += item.duration();
        self.items.push_back(item);
    }

    /// Drop the oldest entries while the window spans more than `max_secs`,
    /// keeping at least one.
    pub fn trim(&mut self, max_secs: f32) {
        while self.total > max_secs && self.items.len() > 1 {
            if let Some(old) = self.items.pop_front() {
                self.total -= old.duration();
            }
        }
        // Re-anchor the running total so subtraction error cannot accumulate.
        if self.items.len() == 1 {
            self.total = self.items.iter().map(Timed::duration).sum();
        }
    }

    /// Sum of the retained entries' durations.
    #[inline]
    pub fn total_secs(&self) -> f32 {
        self.total
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.items.iter()
    }

    /// Oldest-first halves split at `len / 2`; the second half gets the
    /// extra entry when the length is odd.
    pub fn halves(&self) -> (impl Iterator<Item = &T> + '_, impl Iterator<Item = &T> + '_) {
        let mid = self.items.len() / 2;
        (self.items.range(..mid), self.items.range(mid..))
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.total = 0.0;
    }
}
