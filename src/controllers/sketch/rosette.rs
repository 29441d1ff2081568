use std::f64::consts::TAU;

use crate::controllers::surface::drawing_surface::DrawingSurface;
use crate::core::data::colour::Colour;
use crate::core::data::line::Line;
use crate::core::data::point::Point;
use crate::core::data::seed::Seed;

const OUTLINE_COLOUR: Colour = Colour::rgba(0, 0, 0, 96);

/// A small seed-driven figure used to exercise the view: a rotating
/// rosette traced with soft brush strokes.
#[derive(Debug, Clone)]
pub struct RosetteSketch {
    seed: Seed,
    phase: f64,
    spin: f64,
    petals: f64,
    inner: Colour,
    outer: Colour,
    step: usize,
    total_steps: usize,
    path: Vec<Point>,
}

impl RosetteSketch {
    #[must_use]
    pub fn new(seed: Seed, total_steps: usize) -> Self {
        let hash = seed.hash64();
        let unit = |shift: u32| ((hash >> shift) & 0xffff) as f64 / 65535.0;

        Self {
            phase: unit(0) * TAU,
            spin: 0.02 + unit(16) * 0.08,
            petals: (2 + (hash >> 32) % 7) as f64,
            inner: Colour::rgb((hash >> 40) as u8, (hash >> 48) as u8, 160),
            outer: Colour::rgb(40, (hash >> 56) as u8, (hash >> 8) as u8),
            seed,
            step: 0,
            total_steps,
            path: Vec::with_capacity(total_steps),
        }
    }

    #[must_use]
    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    #[must_use]
    pub fn steps_taken(&self) -> usize {
        self.step
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.step >= self.total_steps
    }

    /// Advances up to `strokes` steps, drawing one brush stroke per step.
    /// Strokes ending off the surface are skipped.
    pub fn draw_frame<S: DrawingSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        strokes: usize,
        brush_width: f64,
        gradient: bool,
    ) {
        for _ in 0..strokes {
            if self.is_finished() {
                break;
            }

            let point = self.point_at(self.step, surface.width(), surface.height());
            let progress = self.step as f64 / self.total_steps.max(1) as f64;

            if let Some(&previous) = self.path.last()
                && surface.is_visible(point.x, point.y)
            {
                let colour = self.inner.lerp(self.outer, progress);
                surface.draw_rect(&Line::new(previous, point), brush_width, colour, gradient);
            }

            self.path.push(point);
            self.step += 1;
        }
    }

    /// Traces the path walked so far with thin lines.
    pub fn draw_outline<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        for pair in self.path.windows(2) {
            surface.draw_line(&Line::new(pair[0], pair[1]), OUTLINE_COLOUR);
        }
    }

    fn point_at(&self, step: usize, width: u32, height: u32) -> Point {
        let centre = Point::new(f64::from(width) / 2.0, f64::from(height) / 2.0);
        let reach = f64::from(width.min(height)) * 0.45;
        let theta = step as f64 * self.spin + self.phase;
        let radius = reach * (0.55 + 0.4 * (self.petals * theta).sin());

        centre + Point::new(radius * theta.cos(), radius * theta.sin())
    }
}
