//! # InputBox Component
//!
//! Single-line text input used by the list-builder page.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing and bracketed paste)
//! - Handle editing (backspace, delete, cursor movement)
//! - Handle submission (Enter) of non-blank text
//! - Scroll horizontally so the cursor stays visible
//!
//! The buffer is internal state; the parent only sees `InputEvent`s.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const INPUT_HEIGHT: u16 = 3;
const PLACEHOLDER: &str = "Enter your stream or content...";

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed on a non-blank buffer)
    Submit(String),
    /// Text or cursor changed
    ContentChanged,
}

pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
    /// Display columns hidden to the left of the visible window
    scroll: usize,
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            scroll: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display column of the cursor within the whole buffer.
    fn cursor_column(&self) -> usize {
        self.buffer[..self.cursor].width()
    }

    /// Keep the cursor inside a window `visible` columns wide.
    fn update_scroll(&mut self, visible: u16) {
        let visible = usize::from(visible);
        let column = self.cursor_column();
        if visible == 0 || column < self.scroll {
            self.scroll = column;
        } else if column >= self.scroll.saturating_add(visible) {
            self.scroll = column + 1 - visible;
        }
    }

    /// The part of the buffer starting at the first character not hidden by
    /// the horizontal scroll.
    fn visible_text(&self) -> &str {
        let mut hidden = 0;
        for (offset, c) in self.buffer.char_indices() {
            if hidden >= self.scroll {
                return &self.buffer[offset..];
            }
            hidden += c.width().unwrap_or(0);
        }
        ""
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
    }
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Blue))
            .title("Add to List (Enter)");
        let inner = block.inner(area);
        self.update_scroll(inner.width);

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Paragraph::new(self.visible_text()).style(Style::default().fg(Color::White))
        };

        frame.render_widget(paragraph.block(block), area);

        let offset = self.cursor_column().saturating_sub(self.scroll);
        let offset = u16::try_from(offset).unwrap_or(u16::MAX);
        let cursor_x = inner.x.saturating_add(offset);
        frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single-line input: newlines become spaces
                let flattened = text.replace(['\r', '\n'], " ");
                self.insert_str(&flattened);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => (self.cursor > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                InputEvent::ContentChanged
            }),
            TuiEvent::Delete => (self.cursor < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                InputEvent::ContentChanged
            }),
            TuiEvent::Submit => {
                if self.buffer.trim().is_empty() {
                    return None;
                }
                let text = std::mem::take(&mut self.buffer);
                self.cursor = 0;
                self.scroll = 0;
                Some(InputEvent::Submit(text))
            }
            _ => None,
        }
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn typed(text: &str) -> InputBox {
        let mut input = InputBox::new();
        for c in text.chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
        input
    }

    #[test]
    fn test_handle_input() {
        let mut input = InputBox::new();

        let res = input.handle_event(&TuiEvent::InputChar('a'));
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");

        input.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(input.buffer, "ab");

        let res = input.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");
    }

    #[test]
    fn test_submit_keeps_surrounding_whitespace() {
        let mut input = typed("  hello ");
        let res = input.handle_event(&TuiEvent::Submit);
        assert_eq!(res, Some(InputEvent::Submit("  hello ".to_string())));
        assert!(input.buffer.is_empty(), "Buffer should be cleared after submit");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_blank_submit_ignored() {
        let mut input = typed("   ");
        assert_eq!(input.handle_event(&TuiEvent::Submit), None);
        assert_eq!(input.buffer, "   ");
    }

    #[test]
    fn test_cursor_editing_multibyte() {
        let mut input = typed("café");
        input.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(input.cursor(), 3);
        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.buffer, "caf");
        input.handle_event(&TuiEvent::CursorHome);
        input.handle_event(&TuiEvent::InputChar('>'));
        assert_eq!(input.buffer, ">caf");
        input.handle_event(&TuiEvent::CursorEnd);
        assert_eq!(input.cursor(), input.buffer.len());
    }

    #[test]
    fn test_boundary_moves_emit_nothing() {
        let mut input = InputBox::new();
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
        assert_eq!(input.handle_event(&TuiEvent::Delete), None);
        assert_eq!(input.handle_event(&TuiEvent::CursorLeft), None);
        assert_eq!(input.handle_event(&TuiEvent::CursorEnd), None);
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::Paste("one\ntwo".to_string()));
        assert_eq!(input.buffer, "one two");
        assert_eq!(input.cursor(), 7);
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let mut input = typed("abcdefghij");
        input.update_scroll(4);
        assert_eq!(input.scroll, 7);
        input.handle_event(&TuiEvent::CursorHome);
        input.update_scroll(4);
        assert_eq!(input.scroll, 0);
    }

    #[test]
    fn test_visible_text_skips_scrolled_columns() {
        let mut input = typed("abcdefghij");
        input.update_scroll(4);
        assert_eq!(input.visible_text(), "hij");
    }

    #[test]
    fn test_paste_wider_than_terminal_coordinates() {
        let backend = TestBackend::new(50, INPUT_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = InputBox::new();

        let long = format!("{}tail", "x".repeat(usize::from(u16::MAX)));
        input.handle_event(&TuiEvent::Paste(long.clone()));
        terminal.draw(|f| input.render(f, f.area())).unwrap();

        // No wrap-around: the window sits at the real end of the buffer
        assert_eq!(input.cursor_column(), long.len());
        assert_eq!(input.scroll, long.len() + 1 - 48);
        assert!(buffer_text(&terminal).contains("xtail"));

        input.handle_event(&TuiEvent::CursorHome);
        terminal.draw(|f| input.render(f, f.area())).unwrap();
        assert_eq!(input.scroll, 0);
    }

    #[test]
    fn test_render_shows_placeholder_then_text() {
        let backend = TestBackend::new(50, INPUT_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = InputBox::new();

        terminal.draw(|f| input.render(f, f.area())).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Enter your stream"));

        input.handle_event(&TuiEvent::Paste("Severance".to_string()));
        terminal.draw(|f| input.render(f, f.area())).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Severance"));
        assert!(!text.contains("Enter your stream"));
    }
}
