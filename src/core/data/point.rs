use std::ops::{Add, Neg, Sub};

/// A position (or offset) in surface space, in pixels.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    #[must_use]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean length, without overflowing where `length_squared` would.
    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point {
            x: -self.x,
            y: -self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_does_not_overflow_for_huge_points() {
        assert_eq!(Point::new(3.0, 4.0).length(), 5.0);
        assert!(Point::new(1e160, 1e160).length().is_finite());
        assert!(Point::new(1e160, 1e160).length_squared().is_infinite());
    }

    #[test]
    fn test_add_and_sub_are_component_wise() {
        let a = Point::new(1.5, -2.0);
        let b = Point::new(0.5, 4.0);

        assert_eq!(a + b, Point::new(2.0, 2.0));
        assert_eq!(a - b, Point::new(1.0, -6.0));
        assert_eq!(-a, Point::new(-1.5, 2.0));
    }

    #[test]
    fn test_dot_product() {
        let a = Point::new(3.0, 4.0);

        assert_eq!(a.dot(Point::new(4.0, -3.0)), 0.0);
        assert_eq!(a.length_squared(), 25.0);
    }
}
