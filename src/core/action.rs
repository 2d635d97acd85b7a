//! # Actions
//!
//! Everything that can happen in StreamList becomes an `Action`.
//! User clicks a nav link? That's `Action::Navigate(path)`.
//! User presses Tab? That's `Action::NextLink`.
//!
//! The `update()` function takes the current state and an action,
//! mutates it, and returns an `Effect` telling the adapter what to do next.
//! No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, warn};

use crate::core::state::App;
use crate::router::Resolution;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Go to an explicit path (link activation).
    Navigate(String),
    /// Activate the link after the active one, wrapping around.
    NextLink,
    /// Activate the link before the active one, wrapping around.
    PrevLink,
    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Redraw,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Navigate(path) => {
            app.router.navigate(path);
            after_navigation(app)
        }
        Action::NextLink => step_link(app, 1),
        Action::PrevLink => step_link(app, -1),
        Action::Quit => Effect::Quit,
    }
}

fn step_link(app: &mut App, direction: isize) -> Effect {
    let count = app.links.len();
    if count == 0 {
        return Effect::None;
    }
    let target = match app.active_link_index() {
        Some(index) => (index as isize + direction).rem_euclid(count as isize) as usize,
        // From an unmatched path, Tab starts at the first link and Shift+Tab at the last
        None if direction > 0 => 0,
        None => count - 1,
    };
    let link = app.links[target].clone();
    link.activate(&mut app.router);
    after_navigation(app)
}

fn after_navigation(app: &mut App) -> Effect {
    let status = match app.current_page() {
        Resolution::Found(page) => page.title().to_string(),
        Resolution::NotFound(path) => {
            warn!("No route matches {:?}", path);
            format!("No page at {}", path)
        }
    };
    app.status_message = status;
    Effect::Redraw
}
