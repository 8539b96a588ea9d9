pub mod editor;
pub mod system;
pub mod text_box;
pub mod ui;

use tokio::sync::mpsc;

use crate::domain::{KeyOptions, Language};

use editor::EditorState;
use system::SystemState;
use text_box::{TextBox, TextSurface};
use ui::UiState;

/// Unified application state
#[derive(Debug, Default)]
pub struct AppState {
    pub editor: EditorState,
    pub text_box: TextBox,
    pub ui: UiState,
    pub system: SystemState,
    /// Receives the full text after every edit
    pub output: Option<mpsc::UnboundedSender<String>>,
}

impl AppState {
    pub fn new(initial_text: impl Into<String>, language: Language, options: KeyOptions) -> Self {
        Self {
            editor: EditorState::new(language, options),
            text_box: TextBox::new(initial_text),
            ui: UiState::default(),
            system: SystemState::default(),
            output: None,
        }
    }

    pub fn with_output(mut self, output: mpsc::UnboundedSender<String>) -> Self {
        self.output = Some(output);
        self
    }

    /// Hands the text box's current value to the editor together with a
    /// callback forwarding future updates to `output`.
    pub fn open_editor(&mut self) {
        let output = self.output.clone();
        let value = self.text_box.value().to_owned();
        self.editor.open(
            value,
            Box::new(move |text| {
                if let Some(output) = &output {
                    let _ = output.send(text.to_owned());
                }
            }),
        );
        self.text_box.set_focused(true);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_open_editor_seeds_buffer_from_text_box() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut state = AppState::new("labas", Language::Lt, KeyOptions::default()).with_output(tx);
        state.open_editor();
        assert_eq!(state.editor.text(), "labas");
        assert_eq!(state.editor.caret(), 5);

        state.editor.insert_at(&mut state.text_box, "!");
        assert_eq!(rx.try_recv().ok(), Some("labas!".to_owned()));
    }
}
