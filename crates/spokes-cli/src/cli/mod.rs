//! CLI command implementations.
//!
//! This module contains the implementations for the various CLI subcommands:
//! - `render` - Render one polar grid to SVG/JSON/PNG
//! - `recipe` - Render layered grid compositions from YAML
//! - `sheet` - Generate a preset reference sheet
//! - `benchmark` - Time grid generation across spoke counts

pub mod benchmark;
pub mod common;
pub mod recipe;
pub mod render;
pub mod sheet;

pub use benchmark::cmd_benchmark;
pub use common::{evenly_spaced_angles, evenly_spaced_radii, GridStyle, Preset};
pub use recipe::cmd_recipe;
pub use render::cmd_render;
pub use sheet::cmd_sheet;
