//! Windowed front end: winit for the window, pixels for the canvas and
//! egui for the control panel.

mod app;
mod panel;
mod ui_state;

pub use app::run_gui;
