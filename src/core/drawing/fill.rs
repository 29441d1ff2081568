use crate::core::data::colour::Colour;
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub colour: Colour,
}

/// A linear gradient along the axis `start -> end`.
///
/// Stops are kept sorted by offset; offsets are clamped to `0.0..=1.0`.
/// Points are coloured by projecting onto the axis, so colour is constant
/// along lines perpendicular to it.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    start: Point,
    end: Point,
    stops: Vec<GradientStop>,
}

impl LinearGradient {
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            stops: Vec::new(),
        }
    }

    /// Transparent -> `colour` at the middle -> transparent, across the axis.
    #[must_use]
    pub fn soft_edged(start: Point, end: Point, colour: Colour) -> Self {
        let mut gradient = Self::new(start, end);
        gradient.add_stop(0.0, Colour::TRANSPARENT_WHITE);
        gradient.add_stop(0.5, colour);
        gradient.add_stop(1.0, Colour::TRANSPARENT_WHITE);
        gradient
    }

    pub fn add_stop(&mut self, offset: f64, colour: Colour) {
        let offset = offset.clamp(0.0, 1.0);
        let index = self.stops.partition_point(|stop| stop.offset <= offset);
        self.stops.insert(index, GradientStop { offset, colour });
    }

    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Point {
        self.end
    }

    #[must_use]
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    #[must_use]
    pub fn colour_at(&self, point: Point) -> Colour {
        let axis = self.end - self.start;
        let axis_length = axis.length();

        // A zero-length or unbounded axis paints nothing.
        if axis_length == 0.0 || !axis_length.is_finite() {
            return Colour::TRANSPARENT_WHITE;
        }

        // Project onto the unit axis first so huge axes do not overflow.
        let unit = Point::new(axis.x / axis_length, axis.y / axis_length);
        let t = (point - self.start).dot(unit) / axis_length;
        self.colour_at_offset(t.clamp(0.0, 1.0))
    }

    /// Colour at offset `t` along the axis. A NaN offset is transparent.
    #[must_use]
    pub fn colour_at_offset(&self, t: f64) -> Colour {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Colour::TRANSPARENT_WHITE;
        };

        if t.is_nan() {
            return Colour::TRANSPARENT_WHITE;
        }

        if t <= first.offset {
            return first.colour;
        }
        if t >= last.offset {
            return last.colour;
        }

        let upper = self.stops.partition_point(|stop| stop.offset <= t).max(1);
        let lo = self.stops[upper - 1];
        let hi = self.stops[upper];
        let span = hi.offset - lo.offset;

        if span <= 0.0 {
            return hi.colour;
        }

        lo.colour.lerp(hi.colour, (t - lo.offset) / span)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Solid(Colour),
    LinearGradient(LinearGradient),
}

impl Fill {
    #[must_use]
    pub fn colour_at(&self, point: Point) -> Colour {
        match self {
            Self::Solid(colour) => *colour,
            Self::LinearGradient(gradient) => gradient.colour_at(point),
        }
    }
}
