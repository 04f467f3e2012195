//! Render command implementation.

use std::fs;

use serde::Serialize;

use spokes::{build_grid, GridResult, GridSpec, GridType, Point, RingShape};

use super::common::{
    evenly_spaced_angles, evenly_spaced_radii, grid_document, render_png, GridStyle, OutputFormat,
    Preset,
};

const DEFAULT_SPOKES: usize = 6;
const DEFAULT_RINGS: usize = 5;
const DEFAULT_OUTER_RADIUS: f64 = 100.0;
/// Whitespace around the grid in the generated document.
const CANVAS_MARGIN: f64 = 30.0;

/// A point in JSON output format.
#[derive(Serialize)]
struct JsonPoint {
    x: f64,
    y: f64,
}

impl From<Point> for JsonPoint {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// A spoke wedge in JSON output format.
#[derive(Serialize)]
struct JsonSpoke {
    base_left: JsonPoint,
    tip: JsonPoint,
    base_right: JsonPoint,
}

/// A ring in JSON output format; polygon rings carry vertices, circles
/// don't.
#[derive(Serialize)]
struct JsonRing {
    kind: &'static str,
    center: JsonPoint,
    radius: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    vertices: Option<Vec<JsonPoint>>,
}

/// JSON output for one grid.
#[derive(Serialize)]
struct JsonGrid {
    spokes: Vec<JsonSpoke>,
    rings: Vec<JsonRing>,
}

impl JsonGrid {
    fn from_result(result: &GridResult) -> Self {
        let spokes = result
            .spokes
            .iter()
            .map(|s| JsonSpoke {
                base_left: s.base_left.into(),
                tip: s.tip.into(),
                base_right: s.base_right.into(),
            })
            .collect();

        let rings = result
            .rings
            .iter()
            .map(|ring| match ring {
                RingShape::Circle { center, radius } => JsonRing {
                    kind: "circle",
                    center: (*center).into(),
                    radius: *radius,
                    vertices: None,
                },
                RingShape::Polygon { center, radius, vertices } => JsonRing {
                    kind: "polygon",
                    center: (*center).into(),
                    radius: *radius,
                    vertices: Some(vertices.iter().map(|&v| v.into()).collect()),
                },
            })
            .collect();

        Self { spokes, rings }
    }
}

/// Execute the render command.
pub fn cmd_render(args: &[String]) {
    let mut preset: Option<&'static Preset> = None;
    let mut spokes_count: Option<usize> = None;
    let mut rings_count: Option<usize> = None;
    let mut angles: Option<Vec<f64>> = None;
    let mut radii: Option<Vec<f64>> = None;
    let mut inner_radius: Option<f64> = None;
    let mut outer_radius = DEFAULT_OUTER_RADIUS;
    let mut grid_type: Option<GridType> = None;
    let mut radial_lines = true;
    let mut format = OutputFormat::Svg;
    let mut output_path: Option<String> = None;
    let mut png_output: Option<String> = None;
    let mut png_scale = 2.0_f64;
    let mut style = GridStyle::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--spokes" | "-n" => {
                i += 1;
                if i < args.len() {
                    spokes_count = args[i].parse().ok();
                }
            }
            "--rings" | "-r" => {
                i += 1;
                if i < args.len() {
                    rings_count = args[i].parse().ok();
                }
            }
            "--angles" => {
                i += 1;
                if i < args.len() {
                    angles = Some(parse_number_list(&args[i], "--angles"));
                }
            }
            "--radii" => {
                i += 1;
                if i < args.len() {
                    radii = Some(parse_number_list(&args[i], "--radii"));
                }
            }
            "--inner" => {
                i += 1;
                if i < args.len() {
                    inner_radius = args[i].parse().ok();
                }
            }
            "--outer" => {
                i += 1;
                if i < args.len() {
                    outer_radius = args[i].parse().unwrap_or(DEFAULT_OUTER_RADIUS);
                }
            }
            "-t" | "--type" => {
                i += 1;
                if i < args.len() {
                    grid_type = Some(GridType::from_name(&args[i]).unwrap_or_else(|| {
                        eprintln!("Unknown grid type: {}. Use 'polygon' or 'circle'.", args[i]);
                        std::process::exit(1);
                    }));
                }
            }
            "--no-radial" => {
                radial_lines = false;
            }
            "-f" | "--format" => {
                i += 1;
                if i < args.len() {
                    format = match args[i].to_lowercase().as_str() {
                        "json" => OutputFormat::Json,
                        "svg" => OutputFormat::Svg,
                        other => {
                            eprintln!("Unknown format: {}. Use 'svg' or 'json'.", other);
                            std::process::exit(1);
                        }
                    };
                }
            }
            "--json" => {
                format = OutputFormat::Json;
            }
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = Some(args[i].clone());
                }
            }
            "--png" => {
                i += 1;
                if i < args.len() {
                    png_output = Some(args[i].clone());
                }
            }
            "--png-scale" => {
                i += 1;
                if i < args.len() {
                    png_scale = args[i].parse().unwrap_or(2.0);
                }
            }
            "--stroke" => {
                i += 1;
                if i < args.len() {
                    style.color = args[i].clone();
                }
            }
            "--stroke-width" | "-w" => {
                i += 1;
                if i < args.len() {
                    style.stroke_width = args[i].parse().unwrap_or(1.0);
                }
            }
            "-h" | "--help" => {
                print_usage();
                return;
            }
            name if !name.starts_with('-') => {
                preset = Some(Preset::from_name(name).unwrap_or_else(|| {
                    eprintln!("Unknown preset: {}. Use 'spokes presets' to list available.", name);
                    std::process::exit(1);
                }));
            }
            unknown => {
                eprintln!("Unknown option: {}", unknown);
            }
        }
        i += 1;
    }

    // Resolve the spec: explicit lists beat counts, counts beat the preset,
    // the preset beats the defaults.
    let size = (outer_radius + CANVAS_MARGIN) * 2.0;
    let center = Point::new(size / 2.0, size / 2.0);

    let spec = if let Some(p) = preset {
        let mut spec = p.spec(center, outer_radius);
        if let Some(r) = inner_radius {
            spec.inner_radius = r;
            spec.radii = evenly_spaced_radii(spec.radii.len(), r, outer_radius);
        }
        if let Some(n) = spokes_count {
            spec.angles = evenly_spaced_angles(n);
        }
        if let Some(n) = rings_count {
            spec.radii = evenly_spaced_radii(n, spec.inner_radius, outer_radius);
        }
        if let Some(a) = angles {
            spec.angles = a;
        }
        if let Some(r) = radii {
            spec.radii = r;
        }
        if let Some(t) = grid_type {
            spec.grid_type = t;
        }
        spec.radial_lines = spec.radial_lines && radial_lines;
        spec
    } else {
        let inner_radius = inner_radius.unwrap_or(0.0);
        let angles =
            angles.unwrap_or_else(|| evenly_spaced_angles(spokes_count.unwrap_or(DEFAULT_SPOKES)));
        let radii = radii.unwrap_or_else(|| {
            evenly_spaced_radii(rings_count.unwrap_or(DEFAULT_RINGS), inner_radius, outer_radius)
        });
        GridSpec {
            center,
            inner_radius,
            outer_radius,
            angles,
            radii,
            grid_type: grid_type.unwrap_or_default(),
            radial_lines,
        }
    };

    let result = build_grid(&spec);

    if result.is_empty() {
        eprintln!(
            "Degenerate grid (outer radius {}): nothing to draw",
            spec.outer_radius
        );
    } else {
        eprintln!(
            "Built grid: {} spokes, {} rings ({})",
            result.spokes.len(),
            result.rings.len(),
            spec.grid_type.name()
        );
    }

    let output = match format {
        OutputFormat::Json => {
            serde_json::to_string(&JsonGrid::from_result(&result)).expect("Failed to serialize JSON")
        }
        OutputFormat::Svg => grid_document(&result, size, size, &style, "white"),
    };

    match output_path.as_deref() {
        Some("-") | None => {
            println!("{}", output);
        }
        Some(path) => {
            fs::write(path, &output).expect("Failed to write output file");
            eprintln!("Wrote: {}", path);
        }
    }

    if let Some(png_path) = png_output {
        let svg = match format {
            OutputFormat::Svg => output,
            // JSON was requested on stdout; rebuild the SVG for the raster.
            OutputFormat::Json => grid_document(&result, size, size, &style, "white"),
        };
        render_png(&svg, &png_path, png_scale, size, size);
    }
}

/// Parse a comma-separated number list, exiting on malformed entries.
fn parse_number_list(raw: &str, flag: &str) -> Vec<f64> {
    raw.split(',')
        .map(|s| {
            s.trim().parse().unwrap_or_else(|_| {
                eprintln!("Invalid number '{}' in {}", s.trim(), flag);
                std::process::exit(1);
            })
        })
        .collect()
}

fn print_usage() {
    eprintln!("Usage: spokes render [preset] [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -n, --spokes <n>        Number of evenly spaced spokes (default: {})", DEFAULT_SPOKES);
    eprintln!("  -r, --rings <n>         Number of evenly spaced rings (default: {})", DEFAULT_RINGS);
    eprintln!("  --angles <a,b,c>        Explicit spoke angles in degrees");
    eprintln!("  --radii <r1,r2>         Explicit ring radii");
    eprintln!("  --inner <r>             Inner radius (default: 0)");
    eprintln!("  --outer <r>             Outer radius (default: {})", DEFAULT_OUTER_RADIUS);
    eprintln!("  -t, --type <kind>       Ring kind: polygon, circle (default: polygon)");
    eprintln!("  --no-radial             Suppress spokes");
    eprintln!("  -o, --output <file>     Output file (- for stdout, default: stdout)");
    eprintln!("  -f, --format <fmt>      Output format: svg, json (default: svg)");
    eprintln!("  --json                  Shorthand for --format json");
    eprintln!("  --png <file>            Also rasterize to PNG");
    eprintln!("  --png-scale <n>         PNG scale factor (default: 2.0)");
    eprintln!("  --stroke <color>        Stroke color (default: #ccc)");
    eprintln!("  -w, --stroke-width <n>  Stroke width (default: 1.0)");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  spokes render radar -o radar.svg");
    eprintln!("  spokes render --spokes 8 --rings 4 -t circle --png target.png");
    eprintln!("  spokes render --angles 0,120,240 --radii 40,80 --json");
}
