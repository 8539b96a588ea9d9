use super::editor::buffer::{position_in, CursorPosition};

/// The visible text box the editor mirrors its buffer into.
///
/// It holds the live caret: the editor samples `selection_start` before each
/// operation and writes the value and caret back afterwards. Selection
/// offsets are counted in characters.
pub trait TextSurface {
    fn value(&self) -> &str;
    fn selection_start(&self) -> usize;
    fn selection_end(&self) -> usize;
    fn set_value(&mut self, value: &str);
    fn set_selection(&mut self, start: usize, end: usize);
}

/// Text box shown above the keyboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBox {
    value: String,
    selection_start: usize,
    selection_end: usize,
    focused: bool,
}

impl TextBox {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let end = value.chars().count();
        Self {
            value,
            selection_start: end,
            selection_end: end,
            focused: true,
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Line/column of the caret for drawing the terminal cursor
    pub fn cursor_position(&self) -> CursorPosition {
        position_in(&self.value, self.selection_start)
    }
}

impl TextSurface for TextBox {
    fn value(&self) -> &str {
        &self.value
    }

    fn selection_start(&self) -> usize {
        self.selection_start
    }

    fn selection_end(&self) -> usize {
        self.selection_end
    }

    fn set_value(&mut self, value: &str) {
        value.clone_into(&mut self.value);
        let len = self.value.chars().count();
        self.selection_start = self.selection_start.min(len);
        self.selection_end = self.selection_end.min(len);
    }

    fn set_selection(&mut self, start: usize, end: usize) {
        let len = self.value.chars().count();
        self.selection_start = start.min(len);
        self.selection_end = end.clamp(self.selection_start, len);
    }
}
