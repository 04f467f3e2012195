//! Grid assembly: a fully-resolved spec in, drawable shapes out.

use crate::geometry::Point;
use crate::shapes::{ring_outline, spoke, RingShape, SpokeShape};

/// How concentric rings are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridType {
    /// Rings are polygons whose corners align with the spoke angles.
    #[default]
    Polygon,
    /// Rings are true circles.
    Circle,
}

impl GridType {
    /// All grid types.
    pub fn all() -> &'static [GridType] {
        &[GridType::Polygon, GridType::Circle]
    }

    /// Get the grid type name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            GridType::Polygon => "polygon",
            GridType::Circle => "circle",
        }
    }

    /// Parse a grid type from a string.
    pub fn from_name(name: &str) -> Option<GridType> {
        match name.to_lowercase().as_str() {
            "polygon" => Some(GridType::Polygon),
            "circle" => Some(GridType::Circle),
            _ => None,
        }
    }
}

/// A fully-resolved description of one polar grid.
///
/// Callers resolve defaults (counts to angle lists, missing center to the
/// origin) before building; the assembler does no validation and treats
/// malformed numbers as pass-through.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSpec {
    /// Center of the grid.
    pub center: Point,
    /// Radius where spokes conceptually begin.
    pub inner_radius: f64,
    /// Radius of the outermost boundary; the whole grid is degenerate
    /// when this is ≤ 0.
    pub outer_radius: f64,
    /// Angular samples in degrees, one spoke and one polygon-ring corner
    /// per entry, in this order.
    pub angles: Vec<f64>,
    /// Ring radii, one ring per entry, in this order.
    pub radii: Vec<f64>,
    /// Circle or polygon rings.
    pub grid_type: GridType,
    /// Whether spokes are emitted at all.
    pub radial_lines: bool,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            center: Point::new(0.0, 0.0),
            inner_radius: 0.0,
            outer_radius: 0.0,
            angles: Vec::new(),
            radii: Vec::new(),
            grid_type: GridType::Polygon,
            radial_lines: true,
        }
    }
}

/// The drawable shapes of one grid, in emission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridResult {
    pub spokes: Vec<SpokeShape>,
    pub rings: Vec<RingShape>,
}

impl GridResult {
    /// True when there is nothing to draw.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spokes.is_empty() && self.rings.is_empty()
    }

    /// Total number of drawable shapes.
    #[inline]
    pub fn shape_count(&self) -> usize {
        self.spokes.len() + self.rings.len()
    }
}

/// Build the full grid for a spec.
///
/// Degenerate inputs map to empty collections, never to errors: an outer
/// radius ≤ 0 produces an empty result, disabled radial lines or an empty
/// angle list produce no spokes, and an empty radius list produces no
/// rings. Renderers rely on "empty sequence ⇒ render nothing".
///
/// Polygon rings sample the same angle list as the spokes, so a polygon
/// ring always has exactly as many corners as there are spokes.
pub fn build_grid(spec: &GridSpec) -> GridResult {
    if spec.outer_radius <= 0.0 {
        return GridResult::default();
    }

    let spokes = if spec.radial_lines && !spec.angles.is_empty() {
        spec.angles
            .iter()
            .map(|&angle| spoke(spec.center, spec.inner_radius, spec.outer_radius, angle))
            .collect()
    } else {
        Vec::new()
    };

    let rings = spec
        .radii
        .iter()
        .map(|&radius| match spec.grid_type {
            GridType::Circle => RingShape::Circle {
                center: spec.center,
                radius,
            },
            GridType::Polygon => RingShape::Polygon {
                center: spec.center,
                radius,
                vertices: ring_outline(spec.center, radius, &spec.angles),
            },
        })
        .collect();

    GridResult { spokes, rings }
}
