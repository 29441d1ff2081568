//! The drawing surface: a capability trait plus a canvas-backed
//! implementation that defers host resizes to the next clear.

pub mod canvas_surface;
pub mod drawing_surface;
pub mod ports;

pub use canvas_surface::CanvasSurface;
pub use drawing_surface::DrawingSurface;
pub use ports::CanvasBackend;
