//! Core geometry types and the polar-to-Cartesian converter.

use std::f64::consts::PI;

/// A 2D point with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Convert polar coordinates to a Cartesian point in chart space.
///
/// Angles are in degrees, with 0° along +x and increasing counter-clockwise.
/// Chart space has y growing downward, so the y component is mirrored:
/// `x = cx + r·cosθ`, `y = cy − r·sinθ`.
///
/// No validation: radius 0 returns the center, a negative radius reflects
/// through the center, and NaN flows through to the result.
#[inline]
pub fn polar_to_cartesian(center: Point, radius: f64, angle_degrees: f64) -> Point {
    let theta = angle_degrees * PI / 180.0;
    Point::new(
        center.x + radius * theta.cos(),
        center.y - radius * theta.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert_eq!(p1.distance(p2), 5.0); // 3-4-5 triangle
    }

    #[test]
    fn cardinal_angles() {
        let c = Point::new(10.0, 20.0);
        let r = 5.0;

        let east = polar_to_cartesian(c, r, 0.0);
        assert_relative_eq!(east.x, 15.0, epsilon = 1e-9);
        assert_relative_eq!(east.y, 20.0, epsilon = 1e-9);

        // 90° points up in chart space (y decreases)
        let north = polar_to_cartesian(c, r, 90.0);
        assert_relative_eq!(north.x, 10.0, epsilon = 1e-9);
        assert_relative_eq!(north.y, 15.0, epsilon = 1e-9);

        let west = polar_to_cartesian(c, r, 180.0);
        assert_relative_eq!(west.x, 5.0, epsilon = 1e-9);
        assert_relative_eq!(west.y, 20.0, epsilon = 1e-9);

        let south = polar_to_cartesian(c, r, 270.0);
        assert_relative_eq!(south.x, 10.0, epsilon = 1e-9);
        assert_relative_eq!(south.y, 25.0, epsilon = 1e-9);
    }

    #[test]
    fn result_lies_at_radius_from_center() {
        let c = Point::new(-3.5, 7.25);
        for r in [0.0, 1.0, 2.5, 100.0] {
            for deg in [0.0, 17.0, 45.0, 133.7, 270.0, 359.0] {
                let p = polar_to_cartesian(c, r, deg);
                assert_relative_eq!(c.distance(p), r, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn zero_radius_returns_center() {
        let c = Point::new(42.0, -1.0);
        let p = polar_to_cartesian(c, 0.0, 123.0);
        assert_relative_eq!(p.x, c.x, epsilon = 1e-12);
        assert_relative_eq!(p.y, c.y, epsilon = 1e-12);
    }

    #[test]
    fn negative_radius_reflects_through_center() {
        let c = Point::new(0.0, 0.0);
        let p = polar_to_cartesian(c, 10.0, 30.0);
        let q = polar_to_cartesian(c, -10.0, 30.0);
        assert_relative_eq!(p.x, -q.x, epsilon = 1e-9);
        assert_relative_eq!(p.y, -q.y, epsilon = 1e-9);
    }

    #[test]
    fn angles_wrap_past_full_turn() {
        let c = Point::new(1.0, 1.0);
        let p = polar_to_cartesian(c, 7.0, 30.0);
        let q = polar_to_cartesian(c, 7.0, 390.0);
        assert_relative_eq!(p.x, q.x, epsilon = 1e-9);
        assert_relative_eq!(p.y, q.y, epsilon = 1e-9);
    }
}
