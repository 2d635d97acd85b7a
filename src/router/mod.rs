//! # Router
//!
//! In-memory client-side routing. Knows nothing about ratatui or any other
//! rendering technology: the view type is a generic parameter the router
//! never inspects.
//!
//! ```text
//!   NavLink::activate ──► Router::navigate ──► subscribers notified
//!                              │
//!                              ▼
//!                     NavigationState { current_path }
//!                              │
//!                              ▼
//!            RouteTable::resolve ──► Resolution::Found(&view)
//!                                  └► Resolution::NotFound(path)
//! ```
//!
//! ## Modules
//!
//! - [`context`]: `Router`, the single owner of `NavigationState`
//! - [`table`]: `RouteTable`, validated, static path → view mapping
//! - [`link`]: `NavLink`, activation and active-state detection
//!
//! There is no global router. Every component that needs navigation state
//! receives the `Router` explicitly, so independent instances never interfere.

pub mod context;
pub mod link;
pub mod table;

pub use context::{NavigationState, Router, SubscriptionId};
pub use link::NavLink;
pub use table::{Resolution, Route, RouteTable, RouteTableBuilder, RouteTableError};
