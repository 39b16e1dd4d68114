//! Per-cell marching cubes math.
//!
//! These functions work on a single cell in isolation. The indexed,
//! vertex-sharing extractor in `vox_rs` builds on them; [`process_cell`] is the
//! unshared "triangle soup" form, useful as a reference.

use crate::vector::Vector3f;
use crate::voxel::Density;

use super::tables::{CORNER_OFFSETS, EDGE_TABLE, EDGE_VERTICES, TRI_TABLE};

/// Maximum number of triangles any configuration produces.
pub const MAX_CELL_TRIANGLES: usize = 5;

/// Interpolation factor along an edge where the field crosses `iso_value`.
///
/// Returns `0.5` when both ends have (nearly) the same value, and is clamped to
/// `[0, 1]` otherwise.
#[inline]
pub fn edge_crossing(v0: f32, v1: f32, iso_value: f32) -> f32 {
    let denom = v1 - v0;
    if denom.abs() < 1e-10 {
        return 0.5;
    }

    ((iso_value - v0) / denom).clamp(0.0, 1.0)
}

/// Interpolate vertex position along an edge where the field crosses the iso-value.
///
/// # Arguments
/// * `p0` - Position of the first corner
/// * `p1` - Position of the second corner
/// * `v0` - Field value at the first corner
/// * `v1` - Field value at the second corner
/// * `iso_value` - The iso-surface value
#[inline]
pub fn interpolate_vertex(p0: Vector3f, p1: Vector3f, v0: f32, v1: f32, iso_value: f32) -> Vector3f {
    p0.lerp(p1, edge_crossing(v0, v1, iso_value))
}

/// Compute the cube configuration index from corner densities.
///
/// Bit `i` is set when corner `i` is outside the surface, i.e. when
/// [`Density::is_inside`] is false for it.
#[inline]
pub fn compute_cube_index<D: Density>(corner_values: &[D; 8], threshold: D) -> usize {
    let mut index = 0;
    for (i, &val) in corner_values.iter().enumerate() {
        if !val.is_inside(threshold) {
            index |= 1 << i;
        }
    }
    index
}

/// Iterate over the triangles of a configuration as triples of edge indices.
#[inline]
pub fn cell_triangles(cube_index: usize) -> impl Iterator<Item = [usize; 3]> {
    TRI_TABLE[cube_index]
        .chunks_exact(3)
        .take_while(|tri| tri[0] != -1)
        .map(|tri| [tri[0] as usize, tri[1] as usize, tri[2] as usize])
}

/// Process a single unit cell without allocating.
///
/// # Arguments
/// * `origin` - Position of corner 0
/// * `corner_values` - Field values at the 8 corners, in [`CORNER_OFFSETS`] order
/// * `iso_value` - The iso-surface value; corners below it are outside
///
/// # Returns
/// A tuple of (triangles, count) where only the first `count` triangles are valid.
/// Vertices are not shared, so adjacent triangles repeat positions.
pub fn process_cell(
    origin: Vector3f,
    corner_values: &[f32; 8],
    iso_value: f32,
) -> ([[Vector3f; 3]; MAX_CELL_TRIANGLES], usize) {
    let mut triangles = [[Vector3f::default(); 3]; MAX_CELL_TRIANGLES];

    let cube_index = compute_cube_index(corner_values, iso_value);
    let edge_flags = EDGE_TABLE[cube_index];
    if edge_flags == 0 {
        return (triangles, 0);
    }

    let corner_positions = CORNER_OFFSETS.map(|(dx, dy, dz)| {
        origin + Vector3f::new(dx as f32, dy as f32, dz as f32)
    });

    let mut edge_vertices = [Vector3f::default(); 12];
    for (edge_idx, vertex) in edge_vertices.iter_mut().enumerate() {
        if (edge_flags & (1 << edge_idx)) != 0 {
            let (v0_idx, v1_idx) = EDGE_VERTICES[edge_idx];
            *vertex = interpolate_vertex(
                corner_positions[v0_idx],
                corner_positions[v1_idx],
                corner_values[v0_idx],
                corner_values[v1_idx],
                iso_value,
            );
        }
    }

    let mut count = 0;
    for [e0, e1, e2] in cell_triangles(cube_index) {
        triangles[count] = [edge_vertices[e0], edge_vertices[e1], edge_vertices[e2]];
        count += 1;
    }

    (triangles, count)
}
