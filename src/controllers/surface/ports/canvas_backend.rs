use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::drawing::fill::Fill;

/// The host's pixel canvas, as seen by [`CanvasSurface`].
///
/// Mirrors a 2D canvas element: a host-reported client size that can drift
/// from the backing buffer's size until the buffer is explicitly resized.
///
/// [`CanvasSurface`]: crate::controllers::surface::canvas_surface::CanvasSurface
pub trait CanvasBackend {
    /// Current size of the host element the canvas is displayed in.
    fn client_size(&self) -> (u32, u32);

    /// Reallocates the backing buffer. Existing content is discarded.
    fn resize_buffer(&mut self, width: u32, height: u32);

    fn clear_rect(&mut self, x: u32, y: u32, width: u32, height: u32);

    /// Strokes a segment with the default one pixel width.
    fn stroke_line(&mut self, from: Point, to: Point, colour: Colour);

    /// Fills the closed polygon through `corners`.
    fn fill_polygon(&mut self, corners: &[Point], fill: &Fill);
}

impl<T: CanvasBackend + ?Sized> CanvasBackend for Box<T> {
    fn client_size(&self) -> (u32, u32) {
        (**self).client_size()
    }

    fn resize_buffer(&mut self, width: u32, height: u32) {
        (**self).resize_buffer(width, height);
    }

    fn clear_rect(&mut self, x: u32, y: u32, width: u32, height: u32) {
        (**self).clear_rect(x, y, width, height);
    }

    fn stroke_line(&mut self, from: Point, to: Point, colour: Colour) {
        (**self).stroke_line(from, to, colour);
    }

    fn fill_polygon(&mut self, corners: &[Point], fill: &Fill) {
        (**self).fill_polygon(corners, fill);
    }
}
