//! # Application State
//!
//! Core business state for StreamList. This module contains domain logic only -
//! no TUI-specific types. Presentation state (the list-builder's buffer and
//! items) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── router: Router                 // current path + subscribers
//! ├── routes: RouteTable<Page>       // static path → page mapping
//! ├── links: Vec<NavLink>            // nav bar entries, display order
//! └── status_message: String         // help/status line text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::page::{self, Page};
use crate::router::{NavLink, Resolution, RouteTable, RouteTableError, Router};

pub struct App {
    pub router: Router,
    pub routes: RouteTable<Page>,
    pub links: Vec<NavLink>,
    pub status_message: String,
}

impl App {
    pub fn new(initial_path: impl Into<String>) -> Result<Self, RouteTableError> {
        Ok(Self::with_routes(
            Router::new(initial_path),
            page::default_routes()?,
            page::nav_links(),
        ))
    }

    pub fn with_routes(router: Router, routes: RouteTable<Page>, links: Vec<NavLink>) -> Self {
        Self {
            router,
            routes,
            links,
            status_message: String::from("Welcome to StreamList!"),
        }
    }

    /// Resolve the current path against the route table.
    pub fn current_page(&self) -> Resolution<'_, Page> {
        self.routes.resolve(self.router.current_path())
    }

    /// Index of the link whose target is the current path.
    pub fn active_link_index(&self) -> Option<usize> {
        self.links.iter().position(|link| link.is_active(&self.router))
    }
}
