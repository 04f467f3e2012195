//! Common utilities shared across CLI commands.
//!
//! The core library takes fully-resolved angle and radius lists; everything
//! here is caller-side plumbing that resolves counts, presets, and styling
//! into those lists and turns results back into SVG markup.

use spokes::{polygon_path_data, spoke_path_data, GridResult, GridSpec, GridType, Point, RingShape};

/// Output format for rendered grids.
#[derive(Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Svg,
    Json,
}

/// Evenly spaced spoke angles, first spoke pointing straight up and the
/// rest proceeding clockwise on screen.
pub fn evenly_spaced_angles(count: usize) -> Vec<f64> {
    let step = 360.0 / count.max(1) as f64;
    (0..count).map(|i| 90.0 - i as f64 * step).collect()
}

/// Evenly spaced ring radii between the inner and outer radius, with the
/// outermost ring exactly at the outer radius.
pub fn evenly_spaced_radii(count: usize, inner_radius: f64, outer_radius: f64) -> Vec<f64> {
    let span = outer_radius - inner_radius;
    (1..=count)
        .map(|i| inner_radius + span * i as f64 / count as f64)
        .collect()
}

/// Stroke styling applied to a whole grid.
#[derive(Debug, Clone)]
pub struct GridStyle {
    pub color: String,
    pub stroke_width: f64,
    pub opacity: f64,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            color: "#ccc".to_string(),
            stroke_width: 1.0,
            opacity: 1.0,
        }
    }
}

/// A named grid configuration.
pub struct Preset {
    pub name: &'static str,
    pub spokes: usize,
    pub rings: usize,
    /// Inner radius as a fraction of the outer radius.
    pub inner_fraction: f64,
    pub grid_type: GridType,
    pub radial_lines: bool,
    pub description: &'static str,
}

impl Preset {
    /// All built-in presets.
    pub fn all() -> &'static [Preset] {
        &[
            Preset { name: "triangle", spokes: 3, rings: 4, inner_fraction: 0.0, grid_type: GridType::Polygon, radial_lines: true, description: "3-axis polygon grid" },
            Preset { name: "diamond", spokes: 4, rings: 4, inner_fraction: 0.0, grid_type: GridType::Polygon, radial_lines: true, description: "4-axis polygon grid" },
            Preset { name: "pentagon", spokes: 5, rings: 4, inner_fraction: 0.0, grid_type: GridType::Polygon, radial_lines: true, description: "5-axis polygon grid" },
            Preset { name: "radar", spokes: 6, rings: 5, inner_fraction: 0.0, grid_type: GridType::Polygon, radial_lines: true, description: "Classic 6-axis radar grid" },
            Preset { name: "spider", spokes: 12, rings: 6, inner_fraction: 0.0, grid_type: GridType::Polygon, radial_lines: true, description: "Dense 12-axis spider web" },
            Preset { name: "web", spokes: 24, rings: 8, inner_fraction: 0.0, grid_type: GridType::Polygon, radial_lines: true, description: "Very dense 24-axis web" },
            Preset { name: "target", spokes: 8, rings: 5, inner_fraction: 0.0, grid_type: GridType::Circle, radial_lines: true, description: "Circle rings with 8 spokes" },
            Preset { name: "bullseye", spokes: 8, rings: 6, inner_fraction: 0.0, grid_type: GridType::Circle, radial_lines: false, description: "Concentric circles, no spokes" },
            Preset { name: "compass", spokes: 16, rings: 4, inner_fraction: 0.0, grid_type: GridType::Circle, radial_lines: true, description: "16-point compass rose grid" },
            Preset { name: "clock", spokes: 12, rings: 3, inner_fraction: 0.25, grid_type: GridType::Circle, radial_lines: true, description: "12 spokes with a hollow center" },
        ]
    }

    /// Look up a preset by name.
    pub fn from_name(name: &str) -> Option<&'static Preset> {
        Preset::all().iter().find(|p| p.name == name.to_lowercase())
    }

    /// Resolve this preset into a concrete spec at the given center and
    /// outer radius.
    pub fn spec(&self, center: Point, outer_radius: f64) -> GridSpec {
        let inner_radius = outer_radius * self.inner_fraction;
        GridSpec {
            center,
            inner_radius,
            outer_radius,
            angles: evenly_spaced_angles(self.spokes),
            radii: evenly_spaced_radii(self.rings, inner_radius, outer_radius),
            grid_type: self.grid_type,
            radial_lines: self.radial_lines,
        }
    }
}

/// Markup for one grid: a styled group wrapping a spokes group and a rings
/// group, mirroring the two groups the chart renderer draws.
///
/// Rings are always `fill="none"`; circle rings become `<circle>` elements
/// and everything else goes through the fixed path-data protocol. Empty
/// path data (a polygon ring with no sampled angles) emits nothing.
pub fn grid_markup(result: &GridResult, style: &GridStyle) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        "  <g stroke=\"{}\" stroke-width=\"{}\" opacity=\"{}\" fill=\"none\">\n",
        style.color, style.stroke_width, style.opacity
    ));

    if !result.spokes.is_empty() {
        svg.push_str("    <g class=\"spokes\">\n");
        for spoke in &result.spokes {
            svg.push_str(&format!("      <path d=\"{}\"/>\n", spoke_path_data(spoke)));
        }
        svg.push_str("    </g>\n");
    }

    if !result.rings.is_empty() {
        svg.push_str("    <g class=\"rings\">\n");
        for ring in &result.rings {
            match ring {
                RingShape::Circle { center, radius } => {
                    svg.push_str(&format!(
                        "      <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\"/>\n",
                        center.x, center.y, radius
                    ));
                }
                RingShape::Polygon { vertices, .. } => {
                    let d = polygon_path_data(vertices);
                    if !d.is_empty() {
                        svg.push_str(&format!("      <path d=\"{}\"/>\n", d));
                    }
                }
            }
        }
        svg.push_str("    </g>\n");
    }

    svg.push_str("  </g>\n");
    svg
}

/// A complete SVG document holding one grid.
pub fn grid_document(
    result: &GridResult,
    width: f64,
    height: f64,
    style: &GridStyle,
    background: &str,
) -> String {
    let mut svg = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{:.2}" height="{:.2}" viewBox="0 0 {:.2} {:.2}">
<rect width="100%" height="100%" fill="{}"/>
"#,
        width, height, width, height, background
    );
    svg.push_str(&grid_markup(result, style));
    svg.push_str("</svg>\n");
    svg
}

/// Rasterize SVG content to a PNG file using resvg.
pub fn render_png(svg_content: &str, png_path: &str, scale: f64, width: f64, height: f64) {
    use resvg::usvg;
    use tiny_skia::Pixmap;

    eprint!("Generating PNG at {}x scale...", scale);

    let options = usvg::Options::default();
    let tree = match usvg::Tree::from_str(svg_content, &options) {
        Ok(t) => t,
        Err(e) => {
            eprintln!(" failed: {}", e);
            return;
        }
    };

    let pixmap_width = (width * scale) as u32;
    let pixmap_height = (height * scale) as u32;

    let mut pixmap = match Pixmap::new(pixmap_width, pixmap_height) {
        Some(p) => p,
        None => {
            eprintln!(" failed: could not create pixmap");
            return;
        }
    };

    pixmap.fill(tiny_skia::Color::WHITE);

    let transform = tiny_skia::Transform::from_scale(scale as f32, scale as f32);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    match pixmap.save_png(png_path) {
        Ok(_) => eprintln!(" done!\nWrote: {} ({}x{})", png_path, pixmap_width, pixmap_height),
        Err(e) => eprintln!(" failed: {}", e),
    }
}
