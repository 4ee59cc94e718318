//! Text input widget
//!
//! A single-line text input with cursor editing, rendered inline by the
//! form and search views.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// A simple text input
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position (byte offset; input is ASCII-constrained by callers)
    pub cursor: usize,
    /// Placeholder text shown while empty and unfocused
    pub placeholder: String,
}

impl TextInput {
    /// Create a new empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content, moving the cursor to the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.content.len();
        self
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.content.remove(self.cursor);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.content.len() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.content.len();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// The current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Build display spans for this input, with a block cursor when focused
    pub fn spans(&self, focused: bool) -> Vec<Span<'static>> {
        let value_style = if focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Yellow)
        };

        if self.content.is_empty() && !focused {
            return vec![Span::styled(self.placeholder.clone(), Style::default().fg(Color::DarkGray))];
        }

        if !focused {
            return vec![Span::styled(self.content.clone(), value_style)];
        }

        let cursor = self.cursor.min(self.content.len());
        let (before, after) = self.content.split_at(cursor);

        let mut spans = vec![Span::styled(before.to_string(), value_style)];

        let cursor_char = after.chars().next().unwrap_or(' ');
        spans.push(Span::styled(
            cursor_char.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));

        if after.len() > 1 {
            spans.push(Span::styled(after[1..].to_string(), value_style));
        }

        spans
    }

    /// Build a full display line with a leading label
    pub fn labeled_line(&self, label: &str, focused: bool) -> Line<'static> {
        let label_style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(ratatui::style::Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let mut spans = vec![Span::styled(format!("{:>12}: ", label), label_style)];
        spans.extend(self.spans(focused));
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        input.insert('h');
        input.insert('i');
        assert_eq!(input.value(), "hi");
        assert_eq!(input.cursor, 2);

        input.backspace();
        assert_eq!(input.value(), "h");
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn test_insert_mid_string() {
        let mut input = TextInput::new().content("ac");
        input.move_left();
        input.insert('b');
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = TextInput::new().content("x");
        input.move_right();
        assert_eq!(input.cursor, 1);
        input.move_start();
        input.move_left();
        assert_eq!(input.cursor, 0);
        input.backspace();
        assert_eq!(input.value(), "x");
    }

    #[test]
    fn test_clear() {
        let mut input = TextInput::new().content("something");
        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor, 0);
    }
}
