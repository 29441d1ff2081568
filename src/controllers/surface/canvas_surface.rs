use tracing::debug;

use crate::controllers::surface::drawing_surface::DrawingSurface;
use crate::controllers::surface::ports::canvas_backend::CanvasBackend;
use crate::core::data::colour::Colour;
use crate::core::data::line::Line;
use crate::core::drawing::thick_line::ThickLine;

/// [`DrawingSurface`] over a [`CanvasBackend`], with lazy dimension resync.
///
/// A resize notification only marks the dimensions dirty. They are re-read
/// from the host at the top of the next [`clear`](DrawingSurface::clear), so
/// a frame that is still being drawn never changes size underneath its
/// caller. Until that clear, `width`/`height` and [`is_visible`] answer with
/// the stale values.
///
/// [`is_visible`]: DrawingSurface::is_visible
#[derive(Debug)]
pub struct CanvasSurface<B: CanvasBackend> {
    backend: B,
    width: u32,
    height: u32,
    dimensions_dirty: bool,
}

impl<B: CanvasBackend> CanvasSurface<B> {
    /// Dimensions start at zero and are synced by the first clear.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            width: 0,
            height: 0,
            dimensions_dirty: true,
        }
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    #[must_use]
    pub fn dimensions_dirty(&self) -> bool {
        self.dimensions_dirty
    }

    fn sync_dimensions(&mut self) {
        let (width, height) = self.backend.client_size();

        self.backend.resize_buffer(width, height);
        self.width = width;
        self.height = height;
        self.dimensions_dirty = false;

        debug!(width, height, "surface dimensions synced");
    }
}

impl<B: CanvasBackend> DrawingSurface for CanvasSurface<B> {
    fn clear(&mut self) {
        if self.dimensions_dirty {
            self.sync_dimensions();
        }

        self.backend.clear_rect(0, 0, self.width, self.height);
    }

    fn draw_line(&mut self, line: &Line, colour: Colour) {
        self.backend.stroke_line(line.p0, line.p1, colour);
    }

    fn draw_rect(&mut self, line: &Line, width: f64, colour: Colour, with_gradient: bool) {
        let quad = ThickLine::new(line, width);
        let fill = quad.fill(colour, with_gradient);

        self.backend.fill_polygon(quad.corners(), &fill);
    }

    fn is_visible(&self, x: f64, y: f64) -> bool {
        x >= 0.0 && x < f64::from(self.width) && y >= 0.0 && y < f64::from(self.height)
    }

    fn notify_resize(&mut self) {
        self.dimensions_dirty = true;
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;
    use crate::core::drawing::fill::Fill;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        ResizeBuffer(u32, u32),
        ClearRect(u32, u32, u32, u32),
        StrokeLine(Point, Point, Colour),
        FillPolygon(Vec<Point>, Fill),
    }

    #[derive(Debug, Default)]
    struct RecordingBackend {
        client_size: (u32, u32),
        calls: Vec<Call>,
    }

    impl CanvasBackend for RecordingBackend {
        fn client_size(&self) -> (u32, u32) {
            self.client_size
        }

        fn resize_buffer(&mut self, width: u32, height: u32) {
            self.calls.push(Call::ResizeBuffer(width, height));
        }

        fn clear_rect(&mut self, x: u32, y: u32, width: u32, height: u32) {
            self.calls.push(Call::ClearRect(x, y, width, height));
        }

        fn stroke_line(&mut self, from: Point, to: Point, colour: Colour) {
            self.calls.push(Call::StrokeLine(from, to, colour));
        }

        fn fill_polygon(&mut self, corners: &[Point], fill: &Fill) {
            self.calls.push(Call::FillPolygon(corners.to_vec(), fill.clone()));
        }
    }

    fn surface_with_client(width: u32, height: u32) -> CanvasSurface<RecordingBackend> {
        CanvasSurface::new(RecordingBackend {
            client_size: (width, height),
            calls: Vec::new(),
        })
    }

    fn red() -> Colour {
        Colour::rgb(255, 0, 0)
    }

    #[test]
    fn test_first_clear_syncs_dimensions_before_blanking() {
        let mut surface = surface_with_client(640, 480);
        assert!(surface.dimensions_dirty());

        surface.clear();

        assert_eq!((surface.width(), surface.height()), (640, 480));
        assert!(!surface.dimensions_dirty());
        assert_eq!(
            surface.backend().calls,
            vec![Call::ResizeBuffer(640, 480), Call::ClearRect(0, 0, 640, 480)]
        );
    }

    #[test]
    fn test_resize_is_applied_exactly_once_on_next_clear() {
        let mut surface = surface_with_client(100, 50);
        surface.clear();

        surface.backend_mut().client_size = (300, 200);
        surface.notify_resize();

        // Stale until the next clear.
        assert_eq!((surface.width(), surface.height()), (100, 50));
        assert!(!surface.is_visible(150.0, 10.0));

        surface.clear();
        assert_eq!((surface.width(), surface.height()), (300, 200));
        assert!(surface.is_visible(150.0, 10.0));

        surface.backend_mut().calls.clear();
        surface.backend_mut().client_size = (10, 10);
        surface.clear();

        assert_eq!((surface.width(), surface.height()), (300, 200));
        assert_eq!(surface.backend().calls, vec![Call::ClearRect(0, 0, 300, 200)]);
    }

    #[test]
    fn test_host_size_change_without_notification_is_ignored() {
        let mut surface = surface_with_client(100, 50);
        surface.clear();

        surface.backend_mut().client_size = (1, 1);
        surface.clear();

        assert_eq!((surface.width(), surface.height()), (100, 50));
    }

    #[test]
    fn test_is_visible_bounds() {
        let mut surface = surface_with_client(100, 50);
        surface.clear();

        assert!(surface.is_visible(0.0, 0.0));
        assert!(surface.is_visible(99.0, 49.0));
        assert!(surface.is_visible(99.5, 49.5));
        assert!(!surface.is_visible(-1.0, 0.0));
        assert!(!surface.is_visible(100.0, 0.0));
        assert!(!surface.is_visible(0.0, 50.0));
        assert!(!surface.is_visible(0.0, -0.1));
    }

    #[test]
    fn test_nothing_is_visible_before_first_clear() {
        let surface = surface_with_client(100, 50);

        assert!(!surface.is_visible(0.0, 0.0));
    }

    #[test]
    fn test_draw_line_strokes_endpoints() {
        let mut surface = surface_with_client(10, 10);
        let line = Line::new(Point::new(1.0, 2.0), Point::new(3.0, 4.0));

        surface.draw_line(&line, red());

        assert_eq!(
            surface.backend().calls,
            vec![Call::StrokeLine(Point::new(1.0, 2.0), Point::new(3.0, 4.0), red())]
        );
    }

    #[test]
    fn test_draw_rect_without_gradient_fills_solid_quad() {
        let mut surface = surface_with_client(10, 10);
        let line = Line::with_angle(Point::new(2.0, 0.0), Point::new(2.0, 8.0), 0.0);

        surface.draw_rect(&line, 1.5, red(), false);

        assert_eq!(
            surface.backend().calls,
            vec![Call::FillPolygon(
                vec![
                    Point::new(0.5, 0.0),
                    Point::new(0.5, 8.0),
                    Point::new(3.5, 8.0),
                    Point::new(3.5, 0.0),
                ],
                Fill::Solid(red()),
            )]
        );
    }

    #[test]
    fn test_draw_rect_with_gradient_uses_three_stops_across_the_line() {
        let mut surface = surface_with_client(10, 10);
        let line = Line::with_angle(Point::new(2.0, 0.0), Point::new(2.0, 8.0), 0.0);

        surface.draw_rect(&line, 1.5, red(), true);

        let [Call::FillPolygon(_, Fill::LinearGradient(gradient))] = surface.backend().calls.as_slice() else {
            panic!("expected one gradient fill, got {:?}", surface.backend().calls);
        };

        let stops = gradient.stops();
        assert_eq!(stops.len(), 3);
        assert_eq!(stops[0].offset, 0.0);
        assert_eq!(stops[1].offset, 0.5);
        assert_eq!(stops[2].offset, 1.0);
        assert_eq!(stops[0].colour, Colour::TRANSPARENT_WHITE);
        assert_eq!(stops[1].colour, red());
        assert_eq!(stops[2].colour, Colour::TRANSPARENT_WHITE);

        // The axis is the extrusion offset, perpendicular to the vertical line.
        assert_eq!(gradient.start(), Point::new(0.5, 0.0));
        assert_eq!(gradient.end(), Point::new(3.5, 0.0));
    }

    #[test]
    fn test_huge_gradient_rect_on_raster_canvas_does_not_panic() {
        use crate::presenters::raster::canvas::RasterCanvas;

        let mut surface = CanvasSurface::new(RasterCanvas::new(8, 8));
        surface.clear();
        let line = Line::new(Point::new(1.0, 1.0), Point::new(6.0, 6.0));

        surface.draw_rect(&line, 1e160, red(), true);
        surface.draw_rect(&line, f64::MAX, red(), true);

        for px in surface.backend().buffer().buffer().chunks_exact(4) {
            if px[3] != 0 {
                assert_eq!(&px[..3], &[255, 0, 0]);
            }
        }
    }
}
