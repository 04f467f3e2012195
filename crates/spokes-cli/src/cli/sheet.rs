//! Generate a preset reference sheet for documentation.
//!
//! Creates a grid of swatches showing every built-in preset with labels
//! below each swatch. Fits on 8.5"×11" letter paper.

use std::fs;

use chrono::Local;

use spokes::{build_grid, Point};

use super::common::{grid_markup, render_png, GridStyle, Preset};

/// Page size constants (8.5" × 11" letter)
const PAGE_WIDTH: f64 = 8.5 * 72.0; // 612 pts
const PAGE_HEIGHT: f64 = 11.0 * 72.0; // 792 pts

/// Swatch configuration for a 2×5 grid on letter paper
const SWATCH_SIZE: f64 = 216.0; // 3 inches = 216 pts
const LABEL_HEIGHT: f64 = 16.0; // Space for text below swatch
const GUTTER: f64 = 18.0; // Space between swatches
const MARGIN: f64 = 36.0; // Page margins (0.5")

const COLUMNS: usize = 2;
const ROWS: usize = 5;

/// Execute the sheet command.
pub fn cmd_sheet(args: &[String]) {
    let mut output_path = "preset_sheet.svg".to_string();
    let mut stroke_color = "#999999".to_string();
    let mut stroke_width = 1.0_f64;
    let mut png_output: Option<String> = None;
    let mut png_scale = 2.0_f64;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = args[i].clone();
                }
            }
            "--stroke" => {
                i += 1;
                if i < args.len() {
                    stroke_color = args[i].clone();
                }
            }
            "--stroke-width" | "-w" => {
                i += 1;
                if i < args.len() {
                    stroke_width = args[i].parse().unwrap_or(1.0);
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
            "-h" | "--help" => {
                print_usage();
                return;
            }
            _ => {}
        }
        i += 1;
    }

    let presets = Preset::all();
    let cell_width = SWATCH_SIZE + GUTTER;
    let cell_height = SWATCH_SIZE + LABEL_HEIGHT + GUTTER;

    eprintln!("Generating preset sheet...");
    eprintln!("  Page: 8.5\" × 11\" (letter)");
    eprintln!("  Grid: {}×{} ({} presets)", COLUMNS, ROWS, presets.len());

    let style = GridStyle {
        color: stroke_color,
        stroke_width,
        opacity: 1.0,
    };

    let mut svg_content = String::new();
    svg_content.push_str(&format!(
        r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{:.2}" height="{:.2}"
     viewBox="0 0 {:.2} {:.2}">
  <title>Preset Sheet - spokes</title>
  <desc>All {} grid presets, generated {}</desc>

  <!-- Background -->
  <rect width="100%" height="100%" fill="white"/>

  <!-- Swatches -->
"##,
        PAGE_WIDTH,
        PAGE_HEIGHT,
        PAGE_WIDTH,
        PAGE_HEIGHT,
        presets.len(),
        Local::now().format("%Y-%m-%d %H:%M")
    ));

    for (idx, preset) in presets.iter().enumerate() {
        let col = idx % COLUMNS;
        let row = idx / COLUMNS;

        if row >= ROWS {
            break; // Don't exceed grid
        }

        let x = MARGIN + (col as f64 * cell_width);
        let y = MARGIN + (row as f64 * cell_height);

        // Build the preset's grid centered in this cell.
        let center = Point::new(x + SWATCH_SIZE / 2.0, y + SWATCH_SIZE / 2.0);
        let outer_radius = SWATCH_SIZE / 2.0 - 6.0;
        let result = build_grid(&preset.spec(center, outer_radius));

        svg_content.push_str(&format!(
            r##"  <g id="swatch-{}">
    <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}"
          fill="none" stroke="#eeeeee" stroke-width="0.5"/>
"##,
            preset.name, x, y, SWATCH_SIZE, SWATCH_SIZE
        ));

        svg_content.push_str(&grid_markup(&result, &style));

        // Label below the swatch
        let label_x = x + SWATCH_SIZE / 2.0;
        let label_y = y + SWATCH_SIZE + LABEL_HEIGHT - 4.0;
        svg_content.push_str(&format!(
            r##"    <text x="{:.2}" y="{:.2}"
          font-family="system-ui, -apple-system, sans-serif"
          font-size="11"
          text-anchor="middle"
          fill="#333333">{}: {}</text>
  </g>
"##,
            label_x, label_y, preset.name, preset.description
        ));

        eprint!(".");
    }

    svg_content.push_str("</svg>\n");
    eprintln!(" done!");

    fs::write(&output_path, &svg_content).expect("Failed to write SVG");
    eprintln!("Wrote: {}", output_path);

    if let Some(png_path) = png_output {
        render_png(&svg_content, &png_path, png_scale, PAGE_WIDTH, PAGE_HEIGHT);
    }
}

fn print_usage() {
    eprintln!("spokes sheet - Generate a preset reference sheet");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    spokes sheet [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -o, --output <file>    Output SVG file (default: preset_sheet.svg)");
    eprintln!("    --stroke <color>       Grid color (default: #999999)");
    eprintln!("    -w, --stroke-width <n> Stroke width (default: 1.0)");
    eprintln!("    --png <file>           Also generate PNG output");
    eprintln!("    --png-scale <n>        PNG scale factor (default: 2.0)");
    eprintln!();
    eprintln!("OUTPUT:");
    eprintln!(
        "    A {}×{} grid of labelled preset swatches on an 8.5\"×11\" page.",
        COLUMNS, ROWS
    );
}
