use ratatui::layout::{Position, Rect};

use crate::domain::KeyId;

/// Screen areas of the rendered keys, refreshed after every draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyHitMap {
    areas: Vec<(KeyId, Rect)>,
}

impl KeyHitMap {
    pub fn new(areas: Vec<(KeyId, Rect)>) -> Self {
        Self { areas }
    }

    /// Key under the terminal cell `(column, row)`, if any.
    pub fn key_at(&self, column: u16, row: u16) -> Option<KeyId> {
        let position = Position::new(column, row);
        self.areas
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(key, _)| *key)
    }

    pub fn area_of(&self, key: KeyId) -> Option<Rect> {
        self.areas
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, area)| *area)
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

/// UI-related state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub hit_map: KeyHitMap,
    /// Key held down by the mouse
    pub pointer_key: Option<KeyId>,
    /// Keys typed on a terminal that never reports releases; they are shown
    /// pressed until the next tick.
    pub flashed_keys: Vec<KeyId>,
    /// Whether the terminal delivers key release and modifier-only events
    pub reports_key_release: bool,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_key_at() {
        let hit_map = KeyHitMap::new(vec![
            (KeyId::KeyQ, Rect::new(0, 0, 5, 3)),
            (KeyId::KeyW, Rect::new(5, 0, 5, 3)),
        ]);
        assert_eq!(hit_map.key_at(0, 0), Some(KeyId::KeyQ));
        assert_eq!(hit_map.key_at(7, 2), Some(KeyId::KeyW));
        assert_eq!(hit_map.key_at(10, 0), None);
        assert_eq!(hit_map.area_of(KeyId::KeyW), Some(Rect::new(5, 0, 5, 3)));
    }
}
