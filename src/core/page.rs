//! # Pages
//!
//! The view type the router resolves to, plus the application's static route
//! table and navigation links.
//!
//! ```text
//! /        → Page::StreamList   (list builder)
//! /movies  → Page::Movies       (placeholder)
//! /cart    → Page::Cart         (placeholder)
//! /about   → Page::About        (placeholder)
//! ```

use crate::router::{NavLink, RouteTable, RouteTableError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    StreamList,
    Movies,
    Cart,
    About,
}

impl Page {
    /// Heading shown at the top of the page.
    pub fn title(&self) -> &'static str {
        match self {
            Page::StreamList => "Stream List",
            Page::Movies => "Movies",
            Page::Cart => "Shopping Cart",
            Page::About => "About",
        }
    }

    /// Release note for pages that are not built yet.
    pub fn coming_soon_note(&self) -> Option<&'static str> {
        match self {
            Page::StreamList => None,
            Page::Movies | Page::Cart => Some("This page will be built in Week 4"),
            Page::About => Some("This page will be built in Week 5"),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::StreamList => "⌂",
            Page::Movies => "▶",
            Page::Cart => "$",
            Page::About => "i",
        }
    }
}

pub const HOME_PATH: &str = "/";

pub fn default_routes() -> Result<RouteTable<Page>, RouteTableError> {
    RouteTable::builder()
        .route(HOME_PATH, Page::StreamList)
        .route("/movies", Page::Movies)
        .route("/cart", Page::Cart)
        .route("/about", Page::About)
        .build()
}

/// Navigation bar links, in display order.
pub fn nav_links() -> Vec<NavLink> {
    vec![
        NavLink::new(HOME_PATH, "Home").with_icon(Page::StreamList.icon()),
        NavLink::new("/movies", "Movies").with_icon(Page::Movies.icon()),
        NavLink::new("/cart", "Cart").with_icon(Page::Cart.icon()),
        NavLink::new("/about", "About").with_icon(Page::About.icon()),
    ]
}
