use crate::core::data::colour::Colour;
use crate::core::data::line::Line;

/// What a generative process draws through.
///
/// Any rendering backend can sit behind this: a software raster, a GPU
/// canvas or a vector exporter.
pub trait DrawingSurface {
    /// Blanks the whole surface, first picking up any pending host resize.
    fn clear(&mut self);

    /// One pixel wide segment from `line.p0` to `line.p1`.
    fn draw_line(&mut self, line: &Line, colour: Colour);

    /// Fills `line` extruded by `width` on both sides. With `with_gradient`
    /// the fill fades to transparent towards both long edges.
    fn draw_rect(&mut self, line: &Line, width: f64, colour: Colour, with_gradient: bool);

    /// `0 <= x < width && 0 <= y < height`, against the dimensions picked up
    /// by the last clear.
    fn is_visible(&self, x: f64, y: f64) -> bool;

    /// The host was resized. Dimensions are resynced on the next clear.
    fn notify_resize(&mut self);

    fn width(&self) -> u32;

    fn height(&self) -> u32;
}
