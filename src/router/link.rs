//! # Navigation Link
//!
//! A stateless trigger bound to one target path. Whether it is active is
//! derived from the router on every read.

use super::context::Router;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub to: String,
    pub label: String,
    /// Glyph drawn before the label (may be empty).
    pub icon: &'static str,
}

impl NavLink {
    pub fn new(to: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            label: label.into(),
            icon: "",
        }
    }

    pub fn with_icon(mut self, icon: &'static str) -> Self {
        self.icon = icon;
        self
    }

    /// Request navigation to this link's target.
    pub fn activate(&self, router: &mut Router) {
        router.navigate(self.to.as_str());
    }

    pub fn is_active(&self, router: &Router) -> bool {
        router.current_path() == self.to
    }
}
