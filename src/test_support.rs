//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::core::state::App;

/// Creates a test App with the default route table, starting at `path`.
pub fn test_app(path: &str) -> App {
    App::new(path).expect("default route table is valid")
}

/// Concatenates every cell symbol of the backend's buffer, row by row.
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}
