//! Screen components
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::core::state::{ui::KeyHitMap, AppState};

pub mod editor;
pub mod header;
pub mod status_bar;

pub use editor::EditorComponent;
pub use header::HeaderComponent;
pub use status_bar::StatusBarComponent;

/// Collection of all components
pub struct Components {
    pub header: HeaderComponent,
    pub editor: EditorComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    pub fn new() -> Self {
        Self {
            header: HeaderComponent::new(),
            editor: EditorComponent::new(),
            status_bar: StatusBarComponent::new(),
        }
    }

    /// Render the whole screen
    ///
    /// Returns the key areas of this frame for mouse hit testing.
    pub fn render(&self, frame: &mut Frame, state: &AppState) -> KeyHitMap {
        let [header, main, status] = Layout::vertical([
            Constraint::Length(self.header.height()),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.header.view(state, frame, header);
        let hit_map = self.editor.view(state, frame, main);
        self.status_bar.view(state, frame, status);
        hit_map
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new()
    }
}
