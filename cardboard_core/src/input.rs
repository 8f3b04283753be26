//! Per-tick host inputs.
//!
//! The core never polls devices or reads a clock; everything it needs for one
//! tick arrives in a `TickInput`.

use std::fmt;

/// Primary touch point as seen by the host this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TouchSample {
    /// At least one touch point is down.
    pub active: bool,
    /// The primary touch point's phase is "moved".
    pub moved: bool,
}

impl TouchSample {
    pub const IDLE: Self = Self {
        active: false,
        moved: false,
    };

    pub fn moving() -> Self {
        Self {
            active: true,
            moved: true,
        }
    }

    pub fn resting() -> Self {
        Self {
            active: true,
            moved: false,
        }
    }
}

/// Normalized key name ("space", "enter", "a", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCode(String);

impl KeyCode {
    pub fn new(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return None;
        }
        Some(Self(name.to_ascii_lowercase()))
    }

    pub fn space() -> Self {
        Self("space".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for KeyCode {
    fn default() -> Self {
        Self::space()
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDirection {
    Down,
    Up,
}

/// One-shot key edge reported by the host for this tick only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEdge {
    pub key: KeyCode,
    pub direction: KeyDirection,
}

impl KeyEdge {
    pub fn down(key: KeyCode) -> Self {
        Self {
            key,
            direction: KeyDirection::Down,
        }
    }

    pub fn up(key: KeyCode) -> Self {
        Self {
            key,
            direction: KeyDirection::Up,
        }
    }
}

/// Everything the host supplies for one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Monotonic host time in seconds.
    pub now: f64,
    /// Seconds since the previous tick.
    pub dt: f32,
    /// Magnetometer vector magnitude.
    pub magnet_magnitude: f32,
    pub touch: TouchSample,
    pub keys: Vec<KeyEdge>,
}

impl TickInput {
    pub fn new(now: f64, dt: f32, magnet_magnitude: f32) -> Self {
        Self {
            now,
            dt,
            magnet_magnitude,
            touch: TouchSample::IDLE,
            keys: Vec::new(),
        }
    }

    pub fn with_touch(mut self, touch: TouchSample) -> Self {
        self.touch = touch;
        self
    }

    pub fn with_key(mut self, edge: KeyEdge) -> Self {
        self.keys.push(edge);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names_are_normalized() {
        assert_eq!(KeyCode::new(" Space ").unwrap(), KeyCode::space());
        assert_eq!(KeyCode::new("A").unwrap().as_str(), "a");
        assert!(KeyCode::new("").is_none());
        assert!(KeyCode::new("left shift").is_none());
    }
}
