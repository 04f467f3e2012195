//! Integration tests for spokes CLI commands.
//!
//! These tests run the actual binary and verify end-to-end behavior.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

/// Path to the spokes binary, built by cargo for this test run.
fn binary_path() -> &'static str {
    env!("CARGO_BIN_EXE_spokes")
}

/// A unique scratch path for a test output file.
fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("spokes-test-{}-{}", std::process::id(), name))
}

#[test]
fn help_shows_usage() {
    let output = Command::new(binary_path())
        .arg("help")
        .output()
        .expect("Failed to execute command");

    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(stderr.contains("render"), "Should mention render command");
    assert!(stderr.contains("recipe"), "Should mention recipe command");
    assert!(stderr.contains("sheet"), "Should mention sheet command");
    assert!(stderr.contains("benchmark"), "Should mention benchmark command");
}

#[test]
fn presets_command_lists_presets() {
    let output = Command::new(binary_path())
        .arg("presets")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("radar"), "Should list 'radar' preset");
    assert!(stdout.contains("bullseye"), "Should list 'bullseye' preset");
    assert!(stdout.contains("compass"), "Should list 'compass' preset");

    // Header plus at least 10 presets
    let line_count = stdout.lines().count();
    assert!(line_count >= 11, "Should list at least 10 presets, got {} lines", line_count);
}

#[test]
fn render_produces_svg() {
    let output = Command::new(binary_path())
        .args(["render", "radar"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("<?xml"), "Should have XML declaration");
    assert!(stdout.contains("<svg"), "Should have SVG element");
    assert!(stdout.contains("class=\"spokes\""), "Should have spokes group");
    assert!(stdout.contains("class=\"rings\""), "Should have rings group");
    assert!(stdout.contains("<path"), "Should have path elements");
    assert!(stdout.contains("</svg>"), "Should close SVG element");
}

#[test]
fn render_circle_grid_uses_circle_elements() {
    let output = Command::new(binary_path())
        .args(["render", "--type", "circle", "--no-radial"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("<circle"), "Circle rings should be circle elements");
    assert!(!stdout.contains("<path"), "No paths without spokes or polygon rings");
}

#[test]
fn render_no_radial_suppresses_spokes_only() {
    let output = Command::new(binary_path())
        .args(["render", "radar", "--no-radial"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(!stdout.contains("class=\"spokes\""), "Spokes group should be absent");
    assert!(stdout.contains("class=\"rings\""), "Rings group should remain");
}

#[test]
fn render_degenerate_outer_radius_draws_nothing() {
    let output = Command::new(binary_path())
        .args(["render", "--outer", "0"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(stdout.contains("<svg"), "Document is still emitted");
    assert!(!stdout.contains("<path"), "No shapes in a degenerate grid");
    assert!(!stdout.contains("<circle"), "No shapes in a degenerate grid");
    assert!(stderr.contains("Degenerate"), "Should warn about the degenerate grid");
}

#[test]
fn render_json_has_shape_collections() {
    let output = Command::new(binary_path())
        .args(["render", "radar", "--json"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let grid: serde_json::Value = serde_json::from_str(&stdout).expect("Output should be JSON");

    let spokes = grid["spokes"].as_array().expect("spokes array");
    let rings = grid["rings"].as_array().expect("rings array");
    assert_eq!(spokes.len(), 6, "radar preset has 6 spokes");
    assert_eq!(rings.len(), 5, "radar preset has 5 rings");

    assert_eq!(rings[0]["kind"], "polygon");
    let vertices = rings[0]["vertices"].as_array().expect("polygon vertices");
    assert_eq!(vertices.len(), 6, "polygon rings share the spoke angles");

    assert!(spokes[0]["tip"]["x"].is_number());
    assert!(spokes[0]["base_left"]["y"].is_number());
}

#[test]
fn render_explicit_lists_override_counts() {
    let output = Command::new(binary_path())
        .args(["render", "--angles", "0,120,240", "--radii", "40,80", "--json"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let grid: serde_json::Value = serde_json::from_str(&stdout).expect("Output should be JSON");

    assert_eq!(grid["spokes"].as_array().unwrap().len(), 3);
    let rings = grid["rings"].as_array().unwrap();
    assert_eq!(rings.len(), 2);
    assert_eq!(rings[0]["radius"], 40.0);
    assert_eq!(rings[1]["radius"], 80.0);
    assert_eq!(rings[0]["vertices"].as_array().unwrap().len(), 3);
}

#[test]
fn render_circle_json_omits_vertices() {
    let output = Command::new(binary_path())
        .args(["render", "--type", "circle", "--json"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let grid: serde_json::Value = serde_json::from_str(&stdout).expect("Output should be JSON");

    let rings = grid["rings"].as_array().unwrap();
    assert!(!rings.is_empty());
    assert_eq!(rings[0]["kind"], "circle");
    assert!(rings[0].get("vertices").is_none(), "Circle rings carry no vertices");
}

#[test]
fn render_writes_output_file() {
    let out = scratch_path("render.svg");

    let output = Command::new(binary_path())
        .args(["render", "pentagon", "-o", out.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let content = fs::read_to_string(&out).expect("Output file should exist");
    assert!(content.starts_with("<?xml"));

    let _ = fs::remove_file(&out);
}

#[test]
fn recipe_example_prints_yaml() {
    let output = Command::new(binary_path())
        .args(["recipe", "--example"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("layers:"), "Example should contain a layers block");
    assert!(stdout.contains("canvas:"), "Example should contain a canvas block");
}

#[test]
fn recipe_renders_layered_svg() {
    let recipe_path = scratch_path("recipe.yaml");
    let out = scratch_path("recipe.svg");

    fs::write(
        &recipe_path,
        r##"
name: "Layer Test"
canvas:
  width: 200
  height: 200
defaults:
  color: "#888888"
layers:
  - name: rings_only
    rings: 4
    outer_radius: 90
    grid: circle
    radial_lines: false
  - name: radar
    spokes: 5
    rings: 3
    outer_radius: 80
"##,
    )
    .expect("Failed to write recipe");

    let output = Command::new(binary_path())
        .args([
            "recipe",
            recipe_path.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());

    let content = fs::read_to_string(&out).expect("Output file should exist");
    assert!(content.contains("id=\"rings_only\""));
    assert!(content.contains("id=\"radar\""));
    assert!(content.contains("<circle"));
    assert!(content.contains("class=\"spokes\""));

    let _ = fs::remove_file(&recipe_path);
    let _ = fs::remove_file(&out);
}

#[test]
fn sheet_writes_reference_sheet() {
    let out = scratch_path("sheet.svg");

    let output = Command::new(binary_path())
        .args(["sheet", "-o", out.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());

    let content = fs::read_to_string(&out).expect("Output file should exist");
    assert!(content.contains("Preset Sheet"));
    assert!(content.contains("swatch-radar"));
    assert!(content.contains("swatch-bullseye"));

    let _ = fs::remove_file(&out);
}

#[test]
fn benchmark_command_runs() {
    let output = Command::new(binary_path())
        .arg("benchmark")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("BENCHMARK"), "Should show benchmark header");
    assert!(stdout.contains("Spokes"), "Should show table header");
}
