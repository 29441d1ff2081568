//! A generative sketch wired to the view: handlers registered on the
//! lifecycle controller start, pause and resume runs of a seeded figure.

pub mod config;
pub mod driver;
pub mod rosette;

pub use config::{SketchConfig, SketchConfigError};
pub use driver::SketchDriver;
pub use rosette::RosetteSketch;
