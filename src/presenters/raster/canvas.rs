use rayon::prelude::*;

use crate::controllers::surface::ports::canvas_backend::CanvasBackend;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, blend_into, write_pixel};
use crate::core::data::point::Point;
use crate::core::drawing::fill::Fill;

const BYTES_PER_PIXEL: usize = 4;

/// Software RGBA canvas.
///
/// Behaves like a browser canvas element: the host's client size is tracked
/// separately from the backing buffer, and the buffer only changes size when
/// [`CanvasBackend::resize_buffer`] is called. Drawing composites source-over
/// and samples fills at pixel centres; rows are filled in parallel.
#[derive(Debug, Clone)]
pub struct RasterCanvas {
    client_width: u32,
    client_height: u32,
    buffer: PixelBuffer,
}

impl RasterCanvas {
    /// A canvas hosted in a `client_width x client_height` element. The
    /// backing buffer is empty until the first resize.
    #[must_use]
    pub fn new(client_width: u32, client_height: u32) -> Self {
        Self {
            client_width,
            client_height,
            buffer: PixelBuffer::new(0, 0),
        }
    }

    /// The host element changed size. The buffer is left as is.
    pub fn set_client_size(&mut self, width: u32, height: u32) {
        self.client_width = width;
        self.client_height = height;
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    fn plot(&mut self, x: i64, y: i64, colour: Colour) {
        // Out-of-range pixels are clipped.
        let _ = self.buffer.blend_pixel(x, y, colour);
    }
}

impl CanvasBackend for RasterCanvas {
    fn client_size(&self) -> (u32, u32) {
        (self.client_width, self.client_height)
    }

    fn resize_buffer(&mut self, width: u32, height: u32) {
        self.buffer = PixelBuffer::new(width, height);
    }

    fn clear_rect(&mut self, x: u32, y: u32, width: u32, height: u32) {
        let x_start = (x.min(self.buffer.width())) as usize;
        let x_end = (x.saturating_add(width).min(self.buffer.width())) as usize;
        let y_start = (y.min(self.buffer.height())) as usize;
        let y_end = (y.saturating_add(height).min(self.buffer.height())) as usize;
        let row_bytes = self.buffer.row_bytes();

        if x_start >= x_end || y_start >= y_end {
            return;
        }

        self.buffer
            .buffer_mut()
            .par_chunks_exact_mut(row_bytes)
            .skip(y_start)
            .take(y_end - y_start)
            .for_each(|row| {
                row[x_start * BYTES_PER_PIXEL..x_end * BYTES_PER_PIXEL].fill(0);
            });
    }

    fn stroke_line(&mut self, from: Point, to: Point, colour: Colour) {
        let Some((from, to)) = clip_segment(
            from,
            to,
            f64::from(self.buffer.width()),
            f64::from(self.buffer.height()),
        ) else {
            return;
        };

        let (mut x, mut y) = (from.x.floor() as i64, from.y.floor() as i64);
        let (x1, y1) = (to.x.floor() as i64, to.y.floor() as i64);
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x, y, colour);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn fill_polygon(&mut self, corners: &[Point], fill: &Fill) {
        let width = self.buffer.width() as usize;
        let row_bytes = self.buffer.row_bytes();

        if corners.len() < 3 || width == 0 || self.buffer.height() == 0 {
            return;
        }

        let min_y = corners.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_y = corners.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

        if !min_y.is_finite() || !max_y.is_finite() {
            return;
        }

        self.buffer
            .buffer_mut()
            .par_chunks_exact_mut(row_bytes)
            .enumerate()
            .for_each(|(y, row)| {
                let centre_y = y as f64 + 0.5;
                if centre_y < min_y || centre_y > max_y {
                    return;
                }

                let crossings = scanline_crossings(corners, centre_y);

                for span in crossings.chunks_exact(2) {
                    let start = (span[0] - 0.5).ceil().clamp(0.0, width as f64) as usize;
                    let end = (span[1] - 0.5).ceil().clamp(0.0, width as f64) as usize;

                    for x in start..end {
                        let colour = fill.colour_at(Point::new(x as f64 + 0.5, centre_y));
                        if colour.is_transparent() {
                            continue;
                        }

                        let offset = x * BYTES_PER_PIXEL;
                        let pixel = &mut row[offset..offset + BYTES_PER_PIXEL];
                        if colour.a == 255 {
                            write_pixel(pixel, colour);
                        } else {
                            blend_into(pixel, colour);
                        }
                    }
                }
            });
    }
}

/// Sorted x positions where the polygon's edges cross the horizontal line
/// at `y` (even-odd rule, half-open in y so shared vertices count once).
fn scanline_crossings(corners: &[Point], y: f64) -> Vec<f64> {
    let mut crossings = Vec::with_capacity(corners.len());

    for (i, &a) in corners.iter().enumerate() {
        let b = corners[(i + 1) % corners.len()];

        if (a.y <= y && b.y > y) || (b.y <= y && a.y > y) {
            crossings.push(a.x + (y - a.y) / (b.y - a.y) * (b.x - a.x));
        }
    }

    crossings.sort_by(f64::total_cmp);
    crossings
}

/// Liang-Barsky clip of a segment to `[0, width] x [0, height]`.
fn clip_segment(from: Point, to: Point, width: f64, height: f64) -> Option<(Point, Point)> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }

    let delta = to - from;
    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;

    let checks = [
        (-delta.x, from.x),
        (delta.x, width - from.x),
        (-delta.y, from.y),
        (delta.y, height - from.y),
    ];

    for (p, q) in checks {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }

        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }

        if t0 > t1 {
            return None;
        }
    }

    Some((
        Point::new(from.x + t0 * delta.x, from.y + t0 * delta.y),
        Point::new(from.x + t1 * delta.x, from.y + t1 * delta.y),
    ))
}
