/// Line/column of a caret, both counted in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

/// Text owned by the editor plus the caret.
///
/// Positions are indices into the sequence of Unicode scalar values, never
/// byte offsets. `caret` always lies in `0..=len`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorBuffer {
    text: String,
    len: usize,
    caret: usize,
}

impl EditorBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self {
            text,
            len,
            caret: len,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Moves the caret, clamped to the buffer.
    pub fn set_caret(&mut self, caret: usize) -> usize {
        self.caret = caret.min(self.len);
        self.caret
    }

    fn byte_offset(&self, index: usize) -> usize {
        self.text
            .char_indices()
            .nth(index)
            .map_or(self.text.len(), |(offset, _)| offset)
    }

    /// Inserts `s` at the caret and moves the caret past it.
    pub fn insert(&mut self, s: &str) {
        let inserted = s.chars().count();
        if self.caret == self.len {
            self.text.push_str(s);
        } else {
            let offset = self.byte_offset(self.caret);
            self.text.insert_str(offset, s);
        }
        self.len += inserted;
        self.caret += inserted;
    }

    /// Removes the character before the caret. Returns false at position 0.
    pub fn remove_before(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        if self.caret == self.len {
            self.text.pop();
        } else {
            let offset = self.byte_offset(self.caret - 1);
            self.text.remove(offset);
        }
        self.len -= 1;
        self.caret -= 1;
        true
    }

    /// Removes the character at the caret. Returns false at the end.
    pub fn remove_at(&mut self) -> bool {
        if self.caret == self.len {
            return false;
        }
        let offset = self.byte_offset(self.caret);
        self.text.remove(offset);
        self.len -= 1;
        true
    }

    /// Line and column of a character index.
    pub fn position_of(&self, index: usize) -> CursorPosition {
        position_in(&self.text, index)
    }

    /// Character index of a line/column, clamped to the line and buffer.
    pub fn index_of(&self, position: CursorPosition) -> usize {
        let mut index = 0;
        for (line, content) in self.text.split('\n').enumerate() {
            let width = content.chars().count();
            if line == position.line {
                return index + position.column.min(width);
            }
            index += width + 1;
        }
        self.len
    }

    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }
}

/// Line and column of the character index `index` within `text`.
pub fn position_in(text: &str, index: usize) -> CursorPosition {
    let mut position = CursorPosition::default();
    for c in text.chars().take(index) {
        if c == '\n' {
            position.line += 1;
            position.column = 0;
        } else {
            position.column += 1;
        }
    }
    position
}
