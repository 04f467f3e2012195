//! Grid recipe system for declarative layer composition.
//!
//! Recipes are YAML files that define layered grid compositions. Each
//! layer resolves to one grid spec plus styling; layers render bottom to
//! top into a single SVG document.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use spokes::{build_grid, GridResult, GridSpec, GridType, Point};

use super::common::{evenly_spaced_angles, evenly_spaced_radii, grid_markup, GridStyle};

/// A complete recipe defining a layered grid composition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe name/title
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Canvas configuration
    pub canvas: Canvas,

    /// Default style applied to all layers (can be overridden)
    #[serde(default)]
    pub defaults: LayerStyle,

    /// Ordered list of grid layers (rendered bottom to top)
    pub layers: Vec<Layer>,
}

/// Canvas/output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Canvas {
    /// Width in user units
    pub width: f64,

    /// Height in user units
    pub height: f64,

    /// Background color (default: white)
    #[serde(default = "default_background")]
    pub background: String,
}

fn default_background() -> String {
    "white".to_string()
}

/// A single grid layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    /// Layer name (for identification)
    pub name: String,

    /// Number of evenly spaced spokes (ignored when `angles` is given)
    #[serde(default)]
    pub spokes: Option<usize>,

    /// Explicit spoke angles in degrees
    #[serde(default)]
    pub angles: Option<Vec<f64>>,

    /// Number of evenly spaced rings (ignored when `radii` is given)
    #[serde(default)]
    pub rings: Option<usize>,

    /// Explicit ring radii
    #[serde(default)]
    pub radii: Option<Vec<f64>>,

    /// Inner radius
    #[serde(default)]
    pub inner_radius: f64,

    /// Outer radius
    pub outer_radius: f64,

    /// Ring kind: "polygon" or "circle"
    #[serde(default = "default_grid")]
    pub grid: String,

    /// Whether spokes are drawn
    #[serde(default = "default_radial_lines")]
    pub radial_lines: bool,

    /// Center override as [x, y]; defaults to the canvas center
    #[serde(default)]
    pub center: Option<[f64; 2]>,

    /// Layer style (merged with defaults)
    #[serde(default)]
    pub style: LayerStyle,

    /// Whether this layer is enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_grid() -> String {
    "polygon".to_string()
}

fn default_radial_lines() -> bool {
    true
}

fn default_enabled() -> bool {
    true
}

const DEFAULT_LAYER_SPOKES: usize = 6;
const DEFAULT_LAYER_RINGS: usize = 5;

impl Layer {
    /// Resolve this layer into a concrete grid spec.
    ///
    /// Counts become evenly spaced lists here; the core only ever sees
    /// fully-resolved angle and radius sequences.
    fn to_spec(&self, canvas: &Canvas, grid_type: GridType) -> GridSpec {
        let center = match self.center {
            Some([x, y]) => Point::new(x, y),
            None => Point::new(canvas.width / 2.0, canvas.height / 2.0),
        };

        let angles = self
            .angles
            .clone()
            .unwrap_or_else(|| evenly_spaced_angles(self.spokes.unwrap_or(DEFAULT_LAYER_SPOKES)));

        let radii = self.radii.clone().unwrap_or_else(|| {
            evenly_spaced_radii(
                self.rings.unwrap_or(DEFAULT_LAYER_RINGS),
                self.inner_radius,
                self.outer_radius,
            )
        });

        GridSpec {
            center,
            inner_radius: self.inner_radius,
            outer_radius: self.outer_radius,
            angles,
            radii,
            grid_type,
            radial_lines: self.radial_lines,
        }
    }
}

/// Style properties for a layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayerStyle {
    /// Stroke color
    #[serde(default)]
    pub color: Option<String>,

    /// Stroke width
    #[serde(default)]
    pub stroke_width: Option<f64>,

    /// Opacity (0.0 to 1.0)
    #[serde(default)]
    pub opacity: Option<f64>,
}

impl LayerStyle {
    /// Merge this style with defaults, preferring self's values.
    pub fn merge_with(&self, defaults: &LayerStyle) -> LayerStyle {
        LayerStyle {
            color: self.color.clone().or_else(|| defaults.color.clone()),
            stroke_width: self.stroke_width.or(defaults.stroke_width),
            opacity: self.opacity.or(defaults.opacity),
        }
    }

    /// Resolve into a concrete grid style, falling back to the chart
    /// defaults (#ccc hairline).
    pub fn resolve(&self) -> GridStyle {
        let fallback = GridStyle::default();
        GridStyle {
            color: self.color.clone().unwrap_or(fallback.color),
            stroke_width: self.stroke_width.unwrap_or(fallback.stroke_width),
            opacity: self.opacity.unwrap_or(fallback.opacity),
        }
    }
}

/// Result of rendering a recipe.
pub struct RenderedRecipe {
    /// All layers with their generated shapes
    pub layers: Vec<RenderedLayer>,
    /// Canvas configuration
    pub canvas: Canvas,
    /// Recipe name
    pub name: String,
}

/// A rendered layer with shapes and style.
pub struct RenderedLayer {
    pub name: String,
    pub result: GridResult,
    pub style: GridStyle,
}

impl Recipe {
    /// Load a recipe from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read recipe file: {}", e))?;

        serde_yaml::from_str(&content).map_err(|e| format!("Failed to parse recipe YAML: {}", e))
    }

    /// Render the recipe to shapes.
    pub fn render(&self) -> RenderedRecipe {
        let mut rendered_layers = Vec::new();

        for layer in &self.layers {
            if !layer.enabled {
                continue;
            }

            let grid_type = match GridType::from_name(&layer.grid) {
                Some(t) => t,
                None => {
                    eprintln!(
                        "Warning: Unknown grid type '{}', skipping layer '{}'",
                        layer.grid, layer.name
                    );
                    continue;
                }
            };

            let result = build_grid(&layer.to_spec(&self.canvas, grid_type));
            let style = layer.style.merge_with(&self.defaults).resolve();

            rendered_layers.push(RenderedLayer {
                name: layer.name.clone(),
                result,
                style,
            });
        }

        RenderedRecipe {
            layers: rendered_layers,
            canvas: self.canvas.clone(),
            name: self.name.clone(),
        }
    }
}

impl RenderedRecipe {
    /// Export to SVG string.
    pub fn to_svg(&self) -> String {
        let mut svg = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{:.2}" height="{:.2}" viewBox="0 0 {:.2} {:.2}">
  <title>{}</title>
  <rect width="100%" height="100%" fill="{}"/>
"#,
            self.canvas.width,
            self.canvas.height,
            self.canvas.width,
            self.canvas.height,
            self.name,
            self.canvas.background
        );

        for layer in &self.layers {
            svg.push_str(&format!("  <g id=\"{}\">\n", layer.name));
            svg.push_str(&grid_markup(&layer.result, &layer.style));
            svg.push_str("  </g>\n");
        }

        svg.push_str("</svg>\n");
        svg
    }
}

/// Execute the recipe command.
pub fn cmd_recipe(args: &[String]) {
    if args.is_empty() {
        print_usage();
        return;
    }

    let mut recipe_path: Option<String> = None;
    let mut output_path = "output.svg".to_string();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = args[i].clone();
                }
            }
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "--example" => {
                print_example();
                return;
            }
            arg if !arg.starts_with('-') => {
                recipe_path = Some(arg.to_string());
            }
            _ => {}
        }
        i += 1;
    }

    let recipe_path = match recipe_path {
        Some(p) => p,
        None => {
            eprintln!("Error: No recipe file specified");
            print_usage();
            return;
        }
    };

    eprintln!("Loading recipe: {}", recipe_path);

    let recipe = match Recipe::load(&recipe_path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    eprintln!("Recipe: {}", recipe.name);
    eprintln!("Canvas: {} x {}", recipe.canvas.width, recipe.canvas.height);
    eprintln!("Layers: {}", recipe.layers.len());

    let rendered = recipe.render();

    let total_shapes: usize = rendered.layers.iter().map(|l| l.result.shape_count()).sum();
    eprintln!(
        "Generated {} shapes across {} layers",
        total_shapes,
        rendered.layers.len()
    );

    let svg = rendered.to_svg();
    fs::write(&output_path, &svg).expect("Failed to write SVG");
    eprintln!("Wrote: {}", output_path);
}

fn print_usage() {
    eprintln!("spokes recipe - Render layered grid compositions from YAML");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    spokes recipe <recipe.yaml> [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -o, --output <file>    Output SVG file (default: output.svg)");
    eprintln!("    --example              Print an example recipe YAML");
    eprintln!("    -h, --help             Show this help");
    eprintln!();
    eprintln!("EXAMPLE:");
    eprintln!("    spokes recipe dartboard.yaml -o dartboard.svg");
}

fn print_example() {
    println!(
        r##"# Example spokes recipe
name: "Radar Over Rings"
description: "A polygon radar grid layered over faint circle rings"

canvas:
  width: 300
  height: 300
  background: "white"

defaults:
  color: "#cccccc"
  stroke_width: 1.0
  opacity: 1.0

layers:
  - name: backdrop_rings
    rings: 8
    outer_radius: 130
    grid: circle
    radial_lines: false
    style:
      color: "#eeeeee"
      opacity: 0.8

  - name: radar
    spokes: 6
    rings: 5
    outer_radius: 120
    grid: polygon
    style:
      color: "#999999"

  - name: axis_ticks
    angles: [90, -30, -150]
    radii: [120]
    outer_radius: 120
    grid: polygon
    style:
      color: "#333333"
      stroke_width: 1.5
"##
    );
}
