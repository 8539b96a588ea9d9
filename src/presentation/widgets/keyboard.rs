use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Paragraph, Widget};

use crate::core::state::editor::key_faces::{KeyFace, KeyFaces};
use crate::domain::{KeyId, Layout as KeyLayout};

/// Height of a key including its border.
const KEY_HEIGHT: u16 = 3;

/// Relative width of a key, in units of one character key.
///
/// Widths are doubled so that the half-size keys (Tab, Delete, right Shift)
/// stay integral.
pub fn width_units(key: KeyId) -> u16 {
    match key {
        KeyId::Backspace | KeyId::CapsLock | KeyId::Enter | KeyId::ShiftLeft => 4,
        KeyId::Tab | KeyId::Delete | KeyId::ShiftRight | KeyId::ControlLeft => 3,
        KeyId::Space => 12,
        _ => 2,
    }
}

/// Lays the keyboard out inside `area` and returns the rectangle of every
/// visible key, in layout order.
///
/// Rows are scaled by the widest row so that every key of every row starts
/// on an integral column. Keys pushed outside `area` are clipped or dropped.
pub fn key_areas(area: Rect) -> Vec<(KeyId, Rect)> {
    let layout = KeyLayout::standard();
    let widest = layout
        .rows()
        .map(|row| row.iter().map(|key| width_units(key.id)).sum::<u16>())
        .max()
        .unwrap_or(1)
        .max(1);
    let column = (area.width / widest).max(1);
    let height = (area.height / layout.row_count().max(1) as u16).clamp(1, KEY_HEIGHT);

    let mut areas = Vec::with_capacity(layout.keys().len());
    for (row_index, row) in layout.rows().enumerate() {
        let y = area.y.saturating_add(row_index as u16 * height);
        let mut x = area.x;
        for key in row {
            let width = width_units(key.id) * column;
            let rect = Rect::new(x, y, width, height).intersection(area);
            if !rect.is_empty() {
                areas.push((key.id, rect));
            }
            x = x.saturating_add(width);
        }
    }
    areas
}

/// Styles used to draw key faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyStyles {
    pub normal: Style,
    pub pressed: Style,
    pub latched: Style,
}

impl Default for KeyStyles {
    fn default() -> Self {
        Self {
            normal: Style::default(),
            pressed: Style::default().add_modifier(Modifier::REVERSED),
            latched: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        }
    }
}

impl KeyStyles {
    fn style_of(&self, face: &KeyFace) -> Style {
        if face.pressed {
            self.pressed
        } else if face.latched {
            self.latched
        } else {
            self.normal
        }
    }
}

/// Draws every key face at the positions computed by [`key_areas`].
pub struct KeyboardWidget<'a> {
    faces: &'a KeyFaces,
    styles: KeyStyles,
}

impl<'a> KeyboardWidget<'a> {
    pub fn new(faces: &'a KeyFaces) -> Self {
        Self {
            faces,
            styles: KeyStyles::default(),
        }
    }

    pub fn styles(mut self, styles: KeyStyles) -> Self {
        self.styles = styles;
        self
    }
}

impl Widget for KeyboardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        for (key, rect) in key_areas(area) {
            let face = self.faces.get(key);
            let style = self.styles.style_of(face);
            let label = face.glyph.to_string();

            // Too short for a border: draw the bare label
            if rect.height < KEY_HEIGHT || rect.width < 3 {
                Paragraph::new(label)
                    .centered()
                    .style(style)
                    .render(rect, buf);
                continue;
            }

            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(style);
            Paragraph::new(label)
                .centered()
                .style(style)
                .block(block)
                .render(rect, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::domain::{Language, ModifierState};

    use super::*;

    fn content(buffer: &Buffer) -> String {
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_key_areas_cover_every_key() {
        let areas = key_areas(Rect::new(0, 0, 96, 15));
        assert_eq!(areas.len(), 64);
        assert_eq!(areas[0], (KeyId::Backquote, Rect::new(0, 0, 6, 3)));
        assert_eq!(areas[13], (KeyId::Backspace, Rect::new(78, 0, 12, 3)));
    }

    #[test]
    fn test_key_areas_do_not_overlap_within_row() {
        let areas = key_areas(Rect::new(2, 1, 80, 15));
        for pair in areas.windows(2) {
            let (_, left) = pair[0];
            let (_, right) = pair[1];
            if left.y == right.y {
                assert!(left.right() <= right.x);
            }
        }
    }

    #[rstest]
    #[case(Rect::new(0, 0, 10, 2))]
    #[case(Rect::new(5, 5, 0, 0))]
    fn test_key_areas_stay_inside(#[case] area: Rect) {
        for (_, rect) in key_areas(area) {
            assert_eq!(rect.intersection(area), rect);
        }
    }

    #[test]
    fn test_render_labels() {
        let faces = KeyFaces::new(Language::Lt, ModifierState::default());
        let area = Rect::new(0, 0, 128, 15);
        let mut buffer = Buffer::empty(area);

        KeyboardWidget::new(&faces).render(area, &mut buffer);

        let content = content(&buffer);
        assert!(content.contains('ą'));
        assert!(content.contains("Enter"));
        assert!(content.contains('▲'));
    }

    #[test]
    fn test_render_pressed_key_reversed() {
        let mut faces = KeyFaces::new(Language::En, ModifierState::default());
        faces.set_pressed(KeyId::KeyA, true);
        let area = Rect::new(0, 0, 96, 15);
        let mut buffer = Buffer::empty(area);

        KeyboardWidget::new(&faces).render(area, &mut buffer);

        let (_, rect) = key_areas(area)
            .into_iter()
            .find(|(key, _)| *key == KeyId::KeyA)
            .expect("key A is laid out");
        let cell = &buffer[(rect.x, rect.y)];
        assert!(cell.modifier.contains(Modifier::REVERSED));
    }
}
