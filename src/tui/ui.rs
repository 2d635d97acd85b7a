use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::page::Page;
use crate::core::state::App;
use crate::router::{NavLink, Resolution};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{NAV_BAR_HEIGHT, NavBar, NotFound, Placeholder};

const HELP_TEXT: &str = "Tab/Shift+Tab switch page · F1-F4 jump · Enter add · Esc quit";

/// Split the frame into nav bar, page area and help line.
fn layout(area: Rect) -> [Rect; 3] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(NAV_BAR_HEIGHT), Min(0), Length(1)]).areas(area)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let [nav_area, main_area, help_area] = layout(frame.area());

    NavBar::new(&app.links, &app.router).render(frame, nav_area);

    let page_area = main_area.inner(Margin::new(2, 1));
    match app.current_page() {
        Resolution::Found(Page::StreamList) => tui.stream_list.render(frame, page_area),
        Resolution::Found(page) => Placeholder::new(*page).render(frame, page_area),
        Resolution::NotFound(path) => NotFound { path }.render(frame, page_area),
    }

    let help = Paragraph::new(Line::from(vec![
        Span::styled(app.status_message.as_str(), Style::default().fg(Color::Blue)),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(help, help_area);
}

/// Hit test: given a screen position, find which nav link (if any) is there.
pub fn hit_test_link(column: u16, row: u16, frame_area: Rect, links: &[NavLink]) -> Option<usize> {
    let [nav_area, _, _] = layout(frame_area);
    NavBar::hit_test(links, nav_area, column, row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{buffer_text, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_home_shows_stream_list() {
        let app = test_app("/");
        let mut tui = TuiState::new();
        let text = render(&app, &mut tui);
        assert!(text.contains("StreamList"));
        assert!(text.contains("Stream List"));
        assert!(text.contains("Enter your stream"));
        assert!(!text.contains("Coming Soon"));
    }

    #[test]
    fn test_navigation_swaps_page() {
        let mut app = test_app("/");
        let mut tui = TuiState::new();
        update(&mut app, Action::Navigate("/cart".to_string()));
        let text = render(&app, &mut tui);
        assert!(text.contains("Shopping Cart"));
        assert!(text.contains("Coming Soon"));
        assert!(!text.contains("Enter your stream"));
    }

    #[test]
    fn test_unknown_path_shows_not_found() {
        let app = test_app("/unknown");
        let mut tui = TuiState::new();
        let text = render(&app, &mut tui);
        assert!(text.contains("NOT FOUND"));
        assert!(text.contains("/unknown"));
    }

    #[test]
    fn test_hit_test_link_matches_nav_bar() {
        let app = test_app("/");
        let frame_area = Rect::new(0, 0, 100, 24);
        let areas = NavBar::link_areas(&app.links, Rect::new(0, 0, 100, NAV_BAR_HEIGHT));
        let about = areas[3];
        assert_eq!(hit_test_link(about.x, about.y, frame_area, &app.links), Some(3));
        assert_eq!(hit_test_link(about.x, 10, frame_area, &app.links), None);
    }
}
