//! Ring and spoke shape builders.
//!
//! A ring is either a true circle or a polygon whose corners sit at the
//! grid's angular samples. A spoke is a thin triangular wedge from the
//! center region out to the outer radius, so that stroke rendering yields
//! a tapered line instead of a zero-width segment.

use crate::geometry::{polar_to_cartesian, Point};

/// Base half-width of a spoke as a fraction of its tip vector.
///
/// Spokes are drawn as thin triangles rather than true lines; the two base
/// corners sit at the center offset by this fraction of the tip vector,
/// rotated 90° either way. The ratio is part of the visual contract of the
/// grid: change it and every chart drawn with it changes weight.
pub const SPOKE_BASE_RATIO: f64 = 1.0 / 150.0;

/// A radial spoke as a 3-point closed outline.
///
/// Drawn as: move to `base_left`, line to `tip`, line to `base_right`,
/// close back to `base_left`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpokeShape {
    pub base_left: Point,
    pub tip: Point,
    pub base_right: Point,
}

/// A concentric ring at a fixed radius.
///
/// A circle ring needs no outline computation; a polygon ring carries one
/// vertex per sampled angle, implicitly closed back to the first vertex.
#[derive(Debug, Clone, PartialEq)]
pub enum RingShape {
    Circle {
        center: Point,
        radius: f64,
    },
    Polygon {
        center: Point,
        radius: f64,
        vertices: Vec<Point>,
    },
}

impl RingShape {
    /// The ring's radius, whichever variant it is.
    #[inline]
    pub fn radius(&self) -> f64 {
        match self {
            RingShape::Circle { radius, .. } => *radius,
            RingShape::Polygon { radius, .. } => *radius,
        }
    }

    /// The ring's center, whichever variant it is.
    #[inline]
    pub fn center(&self) -> Point {
        match self {
            RingShape::Circle { center, .. } => *center,
            RingShape::Polygon { center, .. } => *center,
        }
    }
}

/// Compute the outline of a polygon ring: one vertex per angle, in the
/// caller's order.
///
/// Repeated angles are not deduplicated and nothing is reordered; the
/// caller's angle ordering fully determines the polygon's silhouette. An
/// empty angle list yields an empty outline, which renderers must suppress.
pub fn ring_outline(center: Point, radius: f64, angles: &[f64]) -> Vec<Point> {
    angles
        .iter()
        .map(|&angle| polar_to_cartesian(center, radius, angle))
        .collect()
}

/// Build one spoke at the default base ratio.
pub fn spoke(center: Point, inner_radius: f64, outer_radius: f64, angle_degrees: f64) -> SpokeShape {
    spoke_with_base_ratio(center, inner_radius, outer_radius, angle_degrees, SPOKE_BASE_RATIO)
}

/// Build one spoke with an explicit base ratio.
///
/// The tip sits at the outer radius. The base corners are derived from the
/// vector between the inner-radius point and the tip (not from the inner
/// point itself), rotated 90° each way and scaled by `base_ratio`, then
/// anchored at the center. A zero-length spoke (inner == outer == 0 at the
/// center) collapses both base corners onto the center and is still emitted,
/// degenerating to a point.
pub fn spoke_with_base_ratio(
    center: Point,
    inner_radius: f64,
    outer_radius: f64,
    angle_degrees: f64,
    base_ratio: f64,
) -> SpokeShape {
    let start = polar_to_cartesian(center, inner_radius, angle_degrees);
    let tip = polar_to_cartesian(center, outer_radius, angle_degrees);

    let a = tip.x - start.x;
    let b = tip.y - start.y;

    SpokeShape {
        base_left: Point::new(center.x - b * base_ratio, center.y + a * base_ratio),
        tip,
        base_right: Point::new(center.x + b * base_ratio, center.y - a * base_ratio),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn outline_has_one_vertex_per_angle_in_order() {
        let c = Point::new(0.0, 0.0);
        let angles = [0.0, 90.0, 180.0, 270.0];
        let outline = ring_outline(c, 10.0, &angles);

        assert_eq!(outline.len(), 4);
        assert_relative_eq!(outline[0].x, 10.0, epsilon = 1e-9);
        assert_relative_eq!(outline[0].y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(outline[1].x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(outline[1].y, -10.0, epsilon = 1e-9);
        assert_relative_eq!(outline[2].x, -10.0, epsilon = 1e-9);
        assert_relative_eq!(outline[2].y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(outline[3].x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(outline[3].y, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn outline_keeps_repeated_angles() {
        let c = Point::new(0.0, 0.0);
        let outline = ring_outline(c, 5.0, &[45.0, 45.0, 45.0]);
        assert_eq!(outline.len(), 3);
        assert_eq!(outline[0], outline[1]);
        assert_eq!(outline[1], outline[2]);
    }

    #[test]
    fn empty_angles_give_empty_outline() {
        let outline = ring_outline(Point::new(1.0, 2.0), 5.0, &[]);
        assert!(outline.is_empty());
    }

    #[test]
    fn spoke_tip_sits_at_outer_radius() {
        let c = Point::new(0.0, 0.0);
        let s = spoke(c, 0.0, 10.0, 0.0);
        assert_relative_eq!(s.tip.x, 10.0, epsilon = 1e-9);
        assert_relative_eq!(s.tip.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn spoke_base_is_perpendicular_to_shaft() {
        let c = Point::new(3.0, -2.0);
        let s = spoke(c, 5.0, 40.0, 30.0);

        let start = polar_to_cartesian(c, 5.0, 30.0);
        let shaft = (s.tip.x - start.x, s.tip.y - start.y);
        let base = (s.base_right.x - s.base_left.x, s.base_right.y - s.base_left.y);

        let dot = shaft.0 * base.0 + shaft.1 * base.1;
        assert_relative_eq!(dot, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn spoke_base_width_follows_ratio() {
        let c = Point::new(0.0, 0.0);
        let s = spoke(c, 0.0, 150.0, 0.0);

        // Tip vector has length 150, so each base corner sits 1.0 from
        // the center and the full base is 2.0 wide.
        assert_relative_eq!(s.base_left.distance(s.base_right), 2.0, epsilon = 1e-9);
        assert_relative_eq!(c.distance(s.base_left), 1.0, epsilon = 1e-9);
        assert_relative_eq!(c.distance(s.base_right), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn custom_base_ratio_scales_base() {
        let c = Point::new(0.0, 0.0);
        let wide = spoke_with_base_ratio(c, 0.0, 100.0, 90.0, 1.0 / 50.0);
        let thin = spoke_with_base_ratio(c, 0.0, 100.0, 90.0, 1.0 / 200.0);
        assert_relative_eq!(wide.base_left.distance(wide.base_right), 4.0, epsilon = 1e-9);
        assert_relative_eq!(thin.base_left.distance(thin.base_right), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_length_spoke_collapses_to_center() {
        let c = Point::new(7.0, 7.0);
        let s = spoke(c, 0.0, 0.0, 45.0);
        assert_eq!(s.base_left, c);
        assert_eq!(s.base_right, c);
        assert_eq!(s.tip, c);
    }

    #[test]
    fn ring_shape_accessors() {
        let c = Point::new(1.0, 2.0);
        let circle = RingShape::Circle { center: c, radius: 9.0 };
        assert_eq!(circle.radius(), 9.0);
        assert_eq!(circle.center(), c);

        let poly = RingShape::Polygon {
            center: c,
            radius: 4.0,
            vertices: ring_outline(c, 4.0, &[0.0, 120.0, 240.0]),
        };
        assert_eq!(poly.radius(), 4.0);
        assert_eq!(poly.center(), c);
    }
}
