//! # StreamList Page
//!
//! The list-builder page shown at `/`. Owns its own input buffer and the
//! sequence of submitted entries; the router never sees either.
//!
//! Follows the persistent state pattern: `StreamListPage` lives in `TuiState`
//! so the list survives switching to another page and back.

use chrono::{DateTime, Local};
use log::info;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Padding, Paragraph};

use crate::core::page::Page;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::input_box::{INPUT_HEIGHT, InputBox, InputEvent};
use crate::tui::event::TuiEvent;

/// One submitted entry.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamItem {
    pub text: String,
    pub added_at: DateTime<Local>,
}

pub struct StreamListPage {
    pub input: InputBox,
    pub items: Vec<StreamItem>,
}

impl StreamListPage {
    pub fn new() -> Self {
        Self {
            input: InputBox::new(),
            items: Vec::new(),
        }
    }

    fn push(&mut self, text: String) {
        info!("User Input: {}", text);
        self.items.push(StreamItem {
            text,
            added_at: Local::now(),
        });
    }
}

impl Default for StreamListPage {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for StreamListPage {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let input_event = self.input.handle_event(event)?;
        if let InputEvent::Submit(text) = &input_event {
            self.push(text.clone());
        }
        Some(input_event)
    }
}

impl Component for StreamListPage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};

        let [title_area, _, input_area, list_area] =
            Layout::vertical([Length(1), Length(1), Length(INPUT_HEIGHT), Min(0)]).areas(area);

        let title = Paragraph::new(Line::from(Span::styled(
            Page::StreamList.title(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, title_area);

        self.input.render(frame, input_area);

        if self.items.is_empty() {
            return;
        }

        let items: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| {
                ListItem::new(Line::from(vec![
                    Span::styled("▌ ", Style::default().fg(Color::Blue)),
                    Span::raw(item.text.as_str()),
                    Span::styled(
                        format!("  {}", item.added_at.format("%H:%M")),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Your Stream List:")
            .padding(Padding::top(1));

        frame.render_widget(List::new(items).block(block), list_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn submit(page: &mut StreamListPage, text: &str) -> Option<InputEvent> {
        page.handle_event(&TuiEvent::Paste(text.to_string()));
        page.handle_event(&TuiEvent::Submit)
    }

    fn render_text(page: &mut StreamListPage) -> String {
        let backend = TestBackend::new(60, 15);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| page.render(f, f.area())).unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_submit_appends_untrimmed() {
        let mut page = StreamListPage::new();
        let res = submit(&mut page, " The Bear ");
        assert_eq!(res, Some(InputEvent::Submit(" The Bear ".to_string())));
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].text, " The Bear ");
        assert!(page.input.buffer.is_empty());
    }

    #[test]
    fn test_blank_submit_ignored() {
        let mut page = StreamListPage::new();
        assert_eq!(submit(&mut page, "   "), None);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_items_keep_submission_order() {
        let mut page = StreamListPage::new();
        submit(&mut page, "first");
        submit(&mut page, "second");
        let texts: Vec<&str> = page.items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[test]
    fn test_list_heading_only_when_non_empty() {
        let mut page = StreamListPage::new();
        let text = render_text(&mut page);
        assert!(text.contains("Stream List"));
        assert!(!text.contains("Your Stream List:"));

        submit(&mut page, "Andor");
        let text = render_text(&mut page);
        assert!(text.contains("Your Stream List:"));
        assert!(text.contains("Andor"));
    }
}
