//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only draws when it has a reason to:
//!
//! - an input event arrived (typing, resize, click), or
//! - the router notified its subscriber that a navigation happened.
//!
//! Between events the loop sleeps in `poll` for up to 500ms.

mod component;
pub mod components;
mod event;
mod ui;

use log::{debug, info};
use std::cell::Cell;
use std::io::{self, stdout};
use std::rc::Rc;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::page::Page;
use crate::core::state::App;
use crate::router::Resolution;
use crate::tui::component::EventHandler;
use crate::tui::components::StreamListPage;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Page state that must outlive route changes
    pub stream_list: StreamListPage,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            stream_list: StreamListPage::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: draw() resets the blink timer
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

/// Translate one event into a core action, or let the active page handle it.
///
/// Returns the effect the loop should apply.
fn dispatch(app: &mut App, tui: &mut TuiState, event: TuiEvent, frame_area: Rect) -> Effect {
    match event {
        TuiEvent::Resize => Effect::Redraw,
        TuiEvent::ForceQuit | TuiEvent::Quit => update(app, Action::Quit),
        TuiEvent::NextLink => update(app, Action::NextLink),
        TuiEvent::PrevLink => update(app, Action::PrevLink),
        TuiEvent::SelectLink(index) => match app.links.get(index).map(|l| l.to.clone()) {
            Some(path) => update(app, Action::Navigate(path)),
            None => Effect::None,
        },
        TuiEvent::MouseClick(column, row) => {
            let target = ui::hit_test_link(column, row, frame_area, &app.links)
                .map(|index| app.links[index].to.clone());
            match target {
                Some(path) => update(app, Action::Navigate(path)),
                None => Effect::None,
            }
        }
        // Everything else is page-local input; only the list builder takes any
        other => match app.current_page() {
            Resolution::Found(Page::StreamList) => {
                match tui.stream_list.handle_event(&other) {
                    Some(_) => Effect::Redraw,
                    None => Effect::None,
                }
            }
            _ => Effect::None,
        },
    }
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let mut app = App::new(config.initial_path)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let mut tui = TuiState::new();

    // Any navigation, whatever triggered it, schedules a redraw
    let navigated = Rc::new(Cell::new(false));
    let flag = navigated.clone();
    let subscription = app.router.subscribe(move |path| {
        debug!("Redraw requested by navigation to {:?}", path);
        flag.set(true);
    });

    let mut terminal = ratatui::init();
    let result = with_restore(
        || {
            let _terminal_mode_guard = TerminalModeGuard::new()?;
            event_loop(&mut terminal, &mut app, &mut tui, &navigated)
        },
        ratatui::restore,
    );

    app.router.unsubscribe(subscription);
    info!(
        "StreamList exiting at {:?} with {} list entries",
        app.router.current_path(),
        tui.stream_list.items.len()
    );

    result
}

/// Run `body`, then hand the terminal back to the shell whether or not it failed.
fn with_restore<T>(body: impl FnOnce() -> io::Result<T>, restore: impl FnOnce()) -> io::Result<T> {
    let result = body();
    restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    navigated: &Cell<bool>,
) -> io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        let navigation_pending = navigated.replace(false);
        if needs_redraw || navigation_pending {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(IDLE_POLL)? else {
            continue;
        };

        // Process first event + drain ALL pending events before next draw
        let frame_area = terminal.get_frame().area();
        let mut pending = Some(first_event);
        while let Some(event) = pending {
            match dispatch(app, tui, event, frame_area) {
                Effect::Quit => return Ok(()),
                Effect::Redraw => needs_redraw = true,
                Effect::None => {}
            }
            pending = poll_event_immediate()?;
        }
    }
}
