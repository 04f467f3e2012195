//! # spokes
//!
//! Core geometry for the background grid of polar (radar/spider) charts:
//! concentric rings and radial spokes around a shared center.
//!
//! The library is a set of pure functions. A fully-resolved [`GridSpec`]
//! goes in, a [`GridResult`] of drawable shape descriptors comes out; no
//! state is shared or mutated between calls, and malformed numeric input
//! flows through as malformed output rather than an error.

pub mod geometry;
pub mod grid;
pub mod path;
pub mod shapes;

// Re-export common types at crate root for convenience.
pub use geometry::{polar_to_cartesian, Point};
pub use grid::{build_grid, GridResult, GridSpec, GridType};
pub use path::{polygon_path_data, spoke_path_data};
pub use shapes::{ring_outline, spoke, spoke_with_base_ratio, RingShape, SpokeShape, SPOKE_BASE_RATIO};
