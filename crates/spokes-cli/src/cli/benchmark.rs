//! Benchmark command: time grid generation across spoke counts.

use std::time::Instant;

use spokes::{build_grid, GridSpec, GridType, Point};

use super::common::{evenly_spaced_angles, evenly_spaced_radii};

const SPOKE_COUNTS: &[usize] = &[4, 8, 16, 32, 64, 128];
const RING_COUNT: usize = 8;
const ITERATIONS: usize = 10_000;

/// Execute the benchmark command.
pub fn cmd_benchmark(args: &[String]) {
    let mut grid_type = GridType::Polygon;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-t" | "--type" => {
                i += 1;
                if i < args.len() {
                    grid_type = GridType::from_name(&args[i]).unwrap_or_else(|| {
                        eprintln!("Unknown grid type: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            _ => {}
        }
        i += 1;
    }

    println!("═══════════════════════════════════════════════");
    println!("  GRID BENCHMARK: {} rings, {} builds", RING_COUNT, ITERATIONS);
    println!("═══════════════════════════════════════════════");
    println!("  {:>8}  {:>10}  {:>12}", "Spokes", "Shapes", "Per build");

    for &count in SPOKE_COUNTS {
        let spec = GridSpec {
            center: Point::new(0.0, 0.0),
            inner_radius: 0.0,
            outer_radius: 100.0,
            angles: evenly_spaced_angles(count),
            radii: evenly_spaced_radii(RING_COUNT, 0.0, 100.0),
            grid_type,
            radial_lines: true,
        };

        let shapes = build_grid(&spec).shape_count();

        let start = Instant::now();
        for _ in 0..ITERATIONS {
            // The result is dropped immediately; we only measure assembly.
            let result = build_grid(&spec);
            std::hint::black_box(&result);
        }
        let elapsed = start.elapsed();
        let per_build_us = elapsed.as_secs_f64() * 1_000_000.0 / ITERATIONS as f64;

        println!("  {:>8}  {:>10}  {:>9.2} µs", count, shapes, per_build_us);
    }

    println!("═══════════════════════════════════════════════");
}
