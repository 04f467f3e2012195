//! SVG path data for grid shapes.
//!
//! The drawing protocol is fixed: move to the first vertex, line to each
//! subsequent vertex, close back to the first. Circle rings need no path
//! data; renderers map them to a circle primitive directly.

use crate::geometry::Point;
use crate::shapes::SpokeShape;

/// Path data for a closed polygon outline: `M x,y L x,y … Z`.
///
/// An empty outline yields an empty string; renderers emit nothing for it.
pub fn polygon_path_data(points: &[Point]) -> String {
    if points.is_empty() {
        return String::new();
    }

    let mut path = String::new();
    for (i, pt) in points.iter().enumerate() {
        if i == 0 {
            path.push_str(&format!("M {:.2},{:.2}", pt.x, pt.y));
        } else {
            path.push_str(&format!(" L {:.2},{:.2}", pt.x, pt.y));
        }
    }
    path.push_str(" Z");
    path
}

/// Path data for a spoke's 3-point wedge: base-left, tip, base-right, closed.
pub fn spoke_path_data(spoke: &SpokeShape) -> String {
    format!(
        "M {:.2},{:.2} L {:.2},{:.2} L {:.2},{:.2} Z",
        spoke.base_left.x,
        spoke.base_left.y,
        spoke.tip.x,
        spoke.tip.y,
        spoke.base_right.x,
        spoke.base_right.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::spoke;

    #[test]
    fn square_outline_path() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        assert_eq!(
            polygon_path_data(&points),
            "M 0.00,0.00 L 10.00,0.00 L 10.00,10.00 L 0.00,10.00 Z"
        );
    }

    #[test]
    fn empty_outline_gives_empty_path() {
        assert_eq!(polygon_path_data(&[]), "");
    }

    #[test]
    fn single_point_still_closes() {
        let path = polygon_path_data(&[Point::new(1.0, 2.0)]);
        assert_eq!(path, "M 1.00,2.00 Z");
    }

    #[test]
    fn spoke_path_is_a_closed_wedge() {
        let s = spoke(Point::new(0.0, 0.0), 0.0, 150.0, 0.0);
        let path = spoke_path_data(&s);
        assert_eq!(path, "M 0.00,1.00 L 150.00,0.00 L 0.00,-1.00 Z");
    }
}
