//! Header component
//!
//! Shows the title, the active language and how to switch it.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

pub const TITLE: &str = "Virtual Keyboard";
pub const TOGGLE_HINT: &str = "Press Ctrl + Alt to toggle between English and Lithuanian languages.";

/// Header component
#[derive(Debug, Clone, Default)]
pub struct HeaderComponent;

impl HeaderComponent {
    pub fn new() -> Self {
        Self
    }

    /// Lines drawn by [`HeaderComponent::view`]
    pub fn lines(&self, state: &AppState) -> Vec<Line<'static>> {
        vec![
            Line::from(TITLE.bold()),
            Line::from(vec![
                "Language: ".into(),
                Span::styled(
                    state.editor.language().to_string(),
                    Style::default().fg(Color::Yellow).bold(),
                ),
            ]),
            Line::from(TOGGLE_HINT.dim()),
        ]
    }

    pub fn height(&self) -> u16 {
        3
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.lines(state)).centered(), area);
    }
}
