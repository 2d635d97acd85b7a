//! StreamList library exports for testing

pub mod core;
pub mod router;
pub mod tui;

#[cfg(test)]
pub mod test_support;
