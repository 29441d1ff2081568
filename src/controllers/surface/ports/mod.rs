pub mod canvas_backend;

pub use canvas_backend::CanvasBackend;
