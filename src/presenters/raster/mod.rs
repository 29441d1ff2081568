pub mod canvas;
pub mod compose;

pub use canvas::RasterCanvas;
pub use compose::composite_over;
