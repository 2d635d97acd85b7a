//! # Core Application Logic
//!
//! StreamList's application logic. It knows nothing about any specific UI
//! technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • App (state)          │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Page (route views)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — router, route table and links in one place
//! - [`action`]: The `Action` enum — everything that can happen in the app
//! - [`page`]: The `Page` enum — what each route displays
//! - [`config`]: Config file, env and CLI resolution (the one module doing I/O)

pub mod action;
pub mod config;
pub mod page;
pub mod state;
