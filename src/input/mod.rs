//! Input adapters that turn user interaction into view events.

#[cfg(feature = "gui")]
pub mod gui;
