//! Editor component
//!
//! Draws the text box above the on-screen keyboard and reports where each
//! key landed so that mouse events can be resolved.

use ratatui::prelude::*;

use crate::{
    core::state::{ui::KeyHitMap, AppState},
    presentation::widgets::{
        keyboard::{key_areas, KeyboardWidget},
        text_box::TextBoxWidget,
    },
};

/// Rows taken by the text box, borders included
const TEXT_BOX_HEIGHT: u16 = 5;

/// Editor component
#[derive(Debug, Clone, Default)]
pub struct EditorComponent;

impl EditorComponent {
    pub fn new() -> Self {
        Self
    }

    /// Render the text box and the keyboard
    ///
    /// The terminal cursor is placed on the caret while the text box has focus.
    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) -> KeyHitMap {
        let [text_area, keyboard_area] =
            Layout::vertical([Constraint::Length(TEXT_BOX_HEIGHT), Constraint::Min(0)])
                .areas(area);

        let text_box = TextBoxWidget::new(&state.text_box);
        if state.text_box.is_focused() {
            if let Some(position) = text_box.cursor(text_area) {
                frame.set_cursor_position(position);
            }
        }
        frame.render_widget(text_box, text_area);

        frame.render_widget(KeyboardWidget::new(state.editor.faces()), keyboard_area);
        KeyHitMap::new(key_areas(keyboard_area))
    }
}
