use crate::core::data::colour::Colour;
use crate::core::data::line::Line;
use crate::core::data::point::Point;
use crate::core::drawing::fill::{Fill, LinearGradient};

/// A segment extruded by `width` on each side into a quadrilateral.
///
/// The extrusion offset is `(width * cos(angle), -width * sin(angle))`; the
/// corners run `p0 - offset, p1 - offset, p1 + offset, p0 + offset`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ThickLine {
    corners: [Point; 4],
    p0: Point,
    offset: Point,
}

impl ThickLine {
    #[must_use]
    pub fn new(line: &Line, width: f64) -> Self {
        let offset = Point::new(width * line.angle.cos(), -width * line.angle.sin());

        Self {
            corners: [
                line.p0 - offset,
                line.p1 - offset,
                line.p1 + offset,
                line.p0 + offset,
            ],
            p0: line.p0,
            offset,
        }
    }

    #[must_use]
    pub fn corners(&self) -> &[Point; 4] {
        &self.corners
    }

    #[must_use]
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Solid `colour`, or a soft-edged gradient sampled across the
    /// extrusion axis through `p0`.
    #[must_use]
    pub fn fill(&self, colour: Colour, with_gradient: bool) -> Fill {
        if !with_gradient {
            return Fill::Solid(colour);
        }

        Fill::LinearGradient(LinearGradient::soft_edged(
            self.p0 - self.offset,
            self.p0 + self.offset,
            colour,
        ))
    }
}
