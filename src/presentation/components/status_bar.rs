//! Status bar component
//!
//! Displays the last status message, or the active modifiers and the quit
//! hint when there is none.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

const HINT: &str = "Ctrl-C: quit  F2: Caps Lock  Ctrl-L: language";

/// Status bar component
#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    /// Text on the left side of the bar
    pub fn message(&self, state: &AppState) -> String {
        state
            .system
            .status_message
            .clone()
            .unwrap_or_else(|| HINT.to_owned())
    }

    /// Modifier indicators on the right side of the bar
    pub fn indicators(&self, state: &AppState) -> Vec<&'static str> {
        let modifiers = state.editor.modifiers();
        let mut indicators = Vec::new();
        if modifiers.caps_lock_active {
            indicators.push("CAPS");
        }
        if modifiers.shift_active {
            indicators.push("SHIFT");
        }
        indicators
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);

        let message = Paragraph::new(self.message(state)).style(Style::default().fg(Color::Gray));
        frame.render_widget(message, area);

        let indicators = Line::from(
            self.indicators(state)
                .into_iter()
                .flat_map(|label| [Span::raw(" "), label.black().on_green()])
                .collect::<Vec<_>>(),
        )
        .right_aligned();
        frame.render_widget(indicators, area);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::domain::{KeyOptions, Language};

    use super::*;

    #[test]
    fn test_message_defaults_to_hint() {
        let state = AppState::default();
        assert_eq!(StatusBarComponent::new().message(&state), HINT);
    }

    #[test]
    fn test_message_prefers_status() {
        let mut state = AppState::default();
        state.system.set_status_message("Error: disk full");
        assert_eq!(StatusBarComponent::new().message(&state), "Error: disk full");
    }

    #[test]
    fn test_indicators_follow_modifiers() {
        let mut state = AppState::new("", Language::En, KeyOptions::default());
        let status_bar = StatusBarComponent::new();
        assert!(status_bar.indicators(&state).is_empty());

        state.editor.toggle_caps_lock();
        assert_eq!(status_bar.indicators(&state), vec!["CAPS"]);
    }
}
