use crate::core::data::point::Point;

/// A straight segment with an orientation angle.
///
/// The angle orients the "thick line" quad built by
/// [`ThickLine`](crate::core::drawing::thick_line::ThickLine): the
/// extrusion offset is `(cos(angle), -sin(angle))`. [`Line::new`] derives an
/// angle that makes this offset perpendicular to the segment; callers that
/// track their own heading can pass it through [`Line::with_angle`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line {
    pub p0: Point,
    pub p1: Point,
    pub angle: f64,
}

impl Line {
    #[must_use]
    pub fn new(p0: Point, p1: Point) -> Self {
        let delta = p1 - p0;

        Self {
            p0,
            p1,
            angle: delta.x.atan2(delta.y),
        }
    }

    #[must_use]
    pub const fn with_angle(p0: Point, p1: Point, angle: f64) -> Self {
        Self { p0, p1, angle }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        (self.p1 - self.p0).length_squared().sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const EPSILON: f64 = 1e-12;

    fn offset_for(line: &Line) -> Point {
        Point::new(line.angle.cos(), -line.angle.sin())
    }

    #[test]
    fn test_horizontal_line_angle() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));

        assert!((line.angle - FRAC_PI_2).abs() < EPSILON);
        assert_eq!(line.length(), 10.0);
    }

    #[test]
    fn test_derived_angle_gives_perpendicular_offset() {
        let segments = [
            (Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
            (Point::new(0.0, 0.0), Point::new(0.0, 10.0)),
            (Point::new(3.0, 7.0), Point::new(-5.0, 2.0)),
            (Point::new(-1.0, -1.0), Point::new(4.0, 9.0)),
        ];

        for (p0, p1) in segments {
            let line = Line::new(p0, p1);
            let direction = p1 - p0;

            assert!(
                offset_for(&line).dot(direction).abs() < EPSILON,
                "offset not perpendicular for {:?}",
                line
            );
        }
    }

    #[test]
    fn test_with_angle_keeps_caller_angle() {
        let line = Line::with_angle(Point::new(1.0, 1.0), Point::new(2.0, 2.0), 0.25);

        assert_eq!(line.angle, 0.25);
    }
}
