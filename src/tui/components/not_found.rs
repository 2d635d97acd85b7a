//! # NotFound Component
//!
//! Shown when the current path matches no route.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;

pub struct NotFound<'a> {
    pub path: &'a str,
}

impl Component for NotFound<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(format!("No page at {}", self.path)),
            Line::from(""),
            Line::from("Press Tab or F1 to go home."),
        ];
        let paragraph = Paragraph::new(lines)
            .block(Block::bordered().title("NOT FOUND"))
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, area);
    }
}
