use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::core::state::text_box::{TextBox, TextSurface};

/// Bordered view of the text box, scrolled so that the caret line is visible.
///
/// Long lines are clipped, not wrapped, so buffer lines map to screen rows.
pub struct TextBoxWidget<'a> {
    text_box: &'a TextBox,
    title: &'a str,
}

impl<'a> TextBoxWidget<'a> {
    pub fn new(text_box: &'a TextBox) -> Self {
        Self { text_box, title: "" }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    fn block(&self) -> Block<'a> {
        let border_style = if self.text_box.is_focused() {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.title)
    }

    fn scroll(&self, inner: Rect) -> u16 {
        let line = self.text_box.cursor_position().line as u16;
        line.saturating_sub(inner.height.saturating_sub(1))
    }

    /// Terminal cell of the caret when the widget is drawn into `area`.
    ///
    /// Columns are measured in display width, so wide characters shift the
    /// caret by two cells.
    pub fn cursor(&self, area: Rect) -> Option<Position> {
        let inner = self.block().inner(area);
        if inner.is_empty() {
            return None;
        }
        let position = self.text_box.cursor_position();
        let line = self.text_box.value().split('\n').nth(position.line)?;
        let prefix: String = line.chars().take(position.column).collect();
        let column = (prefix.width() as u16).min(inner.width.saturating_sub(1));
        let row = (position.line as u16).saturating_sub(self.scroll(inner));
        Some(Position::new(inner.x + column, inner.y + row))
    }
}

impl Widget for TextBoxWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = self.block();
        let scroll = self.scroll(block.inner(area));
        Paragraph::new(self.text_box.value())
            .block(block)
            .scroll((scroll, 0))
            .render(area, buf);
    }
}
