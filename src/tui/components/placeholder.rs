//! # Placeholder Page Component
//!
//! "Coming Soon" card for pages that are not built yet (Movies, Cart, About).

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::page::Page;
use crate::tui::component::Component;

pub struct Placeholder {
    pub page: Page,
}

impl Placeholder {
    pub fn new(page: Page) -> Self {
        Self { page }
    }
}

impl Component for Placeholder {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};

        let [title_area, _, card_area, _] =
            Layout::vertical([Length(1), Length(1), Length(7), Min(0)]).areas(area);

        let title = Paragraph::new(Line::from(Span::styled(
            self.page.title(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, title_area);

        let lines = vec![
            Line::from(Span::styled(
                self.page.icon(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Coming Soon",
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.page.coming_soon_note().unwrap_or_default(),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let [card] = Layout::horizontal([Constraint::Max(60)])
            .flex(Flex::Center)
            .areas(card_area);

        let card_widget = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(card_widget, card);
    }
}
