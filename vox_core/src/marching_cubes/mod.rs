//! Marching Cubes lookup tables and per-cell math.
//!
//! This module provides:
//!
//! - Compile-time lookup tables for the 256 cube configurations
//! - Edge crossing interpolation and configuration indexing
//! - A no-alloc single-cell triangulation used as a reference path
//!
//! # Example
//!
//! ```
//! use vox_core::marching_cubes::{cell_triangles, compute_cube_index};
//!
//! // One solid corner in an otherwise empty cell
//! let densities = [200u8, 0, 0, 0, 0, 0, 0, 0];
//! let config = compute_cube_index(&densities, 127);
//! assert_eq!(config, 254);
//! assert_eq!(cell_triangles(config).count(), 1);
//! ```

mod algorithm;
mod tables;

pub use algorithm::{
    cell_triangles, compute_cube_index, edge_crossing, interpolate_vertex, process_cell,
    MAX_CELL_TRIANGLES,
};
pub use tables::{CORNER_OFFSETS, EDGE_TABLE, EDGE_VERTICES, TRI_TABLE};
