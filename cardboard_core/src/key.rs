//! Keyboard trigger: a thin view over the tick's key edges for one key.

use crate::input::{KeyCode, KeyDirection, TickInput};

#[derive(Debug, Clone, Default)]
pub struct KeyClassifier {
    key: KeyCode,
}

impl KeyClassifier {
    pub fn new(key: KeyCode) -> Self {
        Self { key }
    }

    pub fn key(&self) -> &KeyCode {
        &self.key
    }

    pub fn is_down(&self, input: &TickInput) -> bool {
        self.has_edge(input, KeyDirection::Down)
    }

    pub fn is_up(&self, input: &TickInput) -> bool {
        self.has_edge(input, KeyDirection::Up)
    }

    fn has_edge(&self, input: &TickInput, direction: KeyDirection) -> bool {
        input
            .keys
            .iter()
            .any(|e| e.direction == direction && e.key == self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyEdge;

    #[test]
    fn only_the_configured_key_counts() {
        let k = KeyClassifier::new(KeyCode::space());
        let other = KeyCode::new("enter").unwrap();

        let input = TickInput::new(0.0, 0.016, 300.0).with_key(KeyEdge::down(other.clone()));
        assert!(!k.is_down(&input));

        let input = TickInput::new(0.0, 0.016, 300.0)
            .with_key(KeyEdge::down(other))
            .with_key(KeyEdge::up(KeyCode::space()));
        assert!(!k.is_down(&input));
        assert!(k.is_up(&input));
    }
}
