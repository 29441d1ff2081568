mod cli;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod logging;
mod presenters;

pub use cli::SketchArgs;
pub use controllers::headless::{HeadlessReport, headless_controller};
pub use controllers::lifecycle::{
    Handlers, LifecycleController, SnapshotViewPort, ViewPort, ViewSnapshot,
};
pub use controllers::ports::FilePresenterPort;
pub use controllers::sketch::{RosetteSketch, SketchConfig, SketchConfigError, SketchDriver};
pub use controllers::surface::{CanvasBackend, CanvasSurface, DrawingSurface};
pub use controllers::view::{View, ViewEvent};
pub use crate::core::data::colour::{Colour, ColourParseError};
pub use crate::core::data::line::Line;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::seed::Seed;
pub use crate::core::drawing::{Fill, GradientStop, LinearGradient, ThickLine};
pub use crate::core::lifecycle::{
    LifecycleState, MAX_SEEDS, Options, SeedHistory, Transition, TransitionHandler,
};
pub use logging::init_logging;
pub use presenters::file::PpmFilePresenter;
pub use presenters::raster::{RasterCanvas, composite_over};

#[cfg(feature = "gui")]
pub use input::gui::run_gui;
