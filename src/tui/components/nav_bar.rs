//! # NavBar Component
//!
//! Top bar with the StreamList brand on the left and one button per
//! navigation link on the right.
//!
//! ## Stateless Component
//!
//! NavBar is purely presentational. It borrows the links and the router for
//! one frame and derives each link's active styling from the router's current
//! path:
//!
//! ```rust,ignore
//! NavBar::new(&app.links, &app.router).render(frame, nav_area);
//! ```
//!
//! Link placement is computed by [`NavBar::link_areas`], which the event loop
//! also uses to hit-test mouse clicks. Render and hit-testing therefore can
//! never disagree about where a link is.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::router::{NavLink, Router};
use crate::tui::component::Component;

pub const BRAND: &str = "▶ StreamList";
pub const NAV_BAR_HEIGHT: u16 = 3;
const LINK_GAP: u16 = 1;

pub struct NavBar<'a> {
    pub links: &'a [NavLink],
    pub router: &'a Router,
}

impl<'a> NavBar<'a> {
    pub fn new(links: &'a [NavLink], router: &'a Router) -> Self {
        Self { links, router }
    }

    /// Button text for a link, padded by one space on each side.
    fn link_text(link: &NavLink) -> String {
        if link.icon.is_empty() {
            format!(" {} ", link.label)
        } else {
            format!(" {} {} ", link.icon, link.label)
        }
    }

    fn link_style(active: bool) -> Style {
        if active {
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    /// Screen rectangles of each link (same order as `links`), right-aligned
    /// inside the bar's border. Links that do not fit get a zero-width rect.
    pub fn link_areas(links: &[NavLink], area: Rect) -> Vec<Rect> {
        let inner = Block::bordered().inner(area);
        let widths: Vec<u16> = links
            .iter()
            .map(|link| Self::link_text(link).width() as u16)
            .collect();

        let total: u16 = widths.iter().sum::<u16>()
            + LINK_GAP * (widths.len().saturating_sub(1) as u16);
        let mut x = inner.x + inner.width.saturating_sub(total);
        let right_edge = inner.x + inner.width;

        widths
            .into_iter()
            .map(|width| {
                let fits = x + width <= right_edge;
                let rect = Rect::new(x, inner.y, if fits { width } else { 0 }, 1);
                x = x.saturating_add(width + LINK_GAP);
                rect
            })
            .collect()
    }

    /// Index of the link under the given screen position, if any.
    pub fn hit_test(links: &[NavLink], area: Rect, column: u16, row: u16) -> Option<usize> {
        Self::link_areas(links, area).iter().position(|rect| {
            rect.width > 0
                && row == rect.y
                && column >= rect.x
                && column < rect.x + rect.width
        })
    }
}

impl Component for NavBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let brand = Paragraph::new(Line::from(Span::styled(
            BRAND,
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(brand, inner);

        for (link, rect) in self.links.iter().zip(Self::link_areas(self.links, area)) {
            if rect.width == 0 {
                continue;
            }
            let style = Self::link_style(link.is_active(self.router));
            frame.render_widget(Span::styled(Self::link_text(link), style), rect);
        }
    }
}
