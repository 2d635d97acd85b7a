//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components built each frame from borrowed data:
//! - `NavBar`: Brand and navigation links, active link highlighted
//! - `Placeholder`: "Coming Soon" card for unbuilt pages
//! - `NotFound`: Shown when no route matches the current path
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that own local state and emit events:
//! - `InputBox`: Single-line text input
//! - `StreamListPage`: Input plus the list of submitted entries
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props", never by reaching into
//! global state. The router in particular is always passed in:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! NavBar::new(&app.links, &app.router).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── nav_bar.rs       (Top navigation bar)
//! ├── input_box.rs     (Single-line text input)
//! ├── stream_list.rs   (List-builder page)
//! ├── placeholder.rs   (Coming Soon pages)
//! └── not_found.rs     (Unmatched path view)
//! ```

pub mod input_box;
pub mod nav_bar;
pub mod not_found;
pub mod placeholder;
pub mod stream_list;

pub use input_box::{InputBox, InputEvent};
pub use nav_bar::{NAV_BAR_HEIGHT, NavBar};
pub use not_found::NotFound;
pub use placeholder::Placeholder;
pub use stream_list::{StreamItem, StreamListPage};
