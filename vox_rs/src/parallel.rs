//! Slab-parallel surface extraction.
//!
//! The cell range of a region is cut into slabs along z. Each slab is meshed
//! independently on the rayon pool, then the slab meshes are stitched in z
//! order. Vertices on the plane between two slabs are created by both; they
//! are matched by edge key and only the first copy is kept, so the result is
//! identical to a sequential extraction.

use std::collections::HashMap;
use std::ops::Range;

use log::{debug, trace, warn};
use rayon::prelude::*;
use vox_core::{MarchingCubesController, Region, Result, VoxelSource, WrapMode};

use crate::config::ParallelConfig;
use crate::extractor::{march, validate_region, Axis, EdgeKey};
use crate::mesh::SurfaceMesh;

struct Slab<M> {
    cells: Range<i32>,
    mesh: SurfaceMesh<M>,
    keys: Vec<EdgeKey>,
}

fn slab_ranges(region: &Region, depth: u32) -> Vec<Range<i32>> {
    let start = region.lower().z;
    let end = region.upper().z;
    let depth = depth.min(i32::MAX as u32) as i32;

    let mut ranges = Vec::new();
    let mut z = start;
    while z < end {
        let next = z.saturating_add(depth).min(end);
        ranges.push(z..next);
        z = next;
    }
    ranges
}

/// Extract `region` of `volume` using several threads.
///
/// Produces the same mesh as [`MarchingCubesExtractor`](crate::MarchingCubesExtractor)
/// with the same controller: equal vertex order, positions, normals, materials
/// and triangles. Gradient samples outside the volume are clamped to its
/// border; see [`extract_parallel_with_wrap_mode`] for the alternative.
///
/// # Errors
/// Returns `InvalidRegion` if `region` is not inside the volume's region.
///
/// # Example
///
/// ```
/// use vox_core::{DefaultController, Region, Vector3i};
/// use vox_rs::{extract_parallel, DenseVolume, ParallelConfig};
///
/// let region = Region::new(Vector3i::splat(0), Vector3i::splat(31))?;
/// let mut volume = DenseVolume::<u8>::new(region);
/// volume.set_voxel_at(Vector3i::new(5, 5, 5), 200)?;
///
/// let config = ParallelConfig::default().with_slab_depth(4);
/// let mesh = extract_parallel(&volume, region, &DefaultController::new(), &config)?;
/// assert_eq!(mesh.vertex_count(), 6);
/// assert_eq!(mesh.triangle_count(), 8);
/// # Ok::<(), vox_core::VoxError>(())
/// ```
pub fn extract_parallel<S, C>(
    volume: &S,
    region: Region,
    controller: &C,
    config: &ParallelConfig,
) -> Result<SurfaceMesh<C::Material>>
where
    S: VoxelSource + Sync,
    S::Voxel: Sync,
    C: MarchingCubesController<S::Voxel> + Sync,
{
    extract_parallel_with_wrap_mode(volume, region, controller, &WrapMode::Clamp, config)
}

/// [`extract_parallel`] with an explicit wrap mode for gradient samples
/// outside the volume, matching
/// [`MarchingCubesExtractor::with_wrap_mode`](crate::MarchingCubesExtractor::with_wrap_mode).
///
/// # Errors
/// Returns `InvalidRegion` if `region` is not inside the volume's region.
pub fn extract_parallel_with_wrap_mode<S, C>(
    volume: &S,
    region: Region,
    controller: &C,
    wrap: &WrapMode<S::Voxel>,
    config: &ParallelConfig,
) -> Result<SurfaceMesh<C::Material>>
where
    S: VoxelSource + Sync,
    S::Voxel: Sync,
    C: MarchingCubesController<S::Voxel> + Sync,
{
    validate_region(&volume.region(), &region)?;

    let ranges = slab_ranges(&region, config.effective_slab_depth());
    debug!(
        "Extracting region {} in {} slabs ({} threads requested)",
        region,
        ranges.len(),
        config.num_threads
    );

    let run = || {
        ranges
            .par_iter()
            .map(|cells| {
                let mut mesh = SurfaceMesh::new();
                let mut keys = Vec::new();
                let stats = march(
                    volume,
                    controller,
                    wrap,
                    &region,
                    cells.clone(),
                    &mut mesh,
                    Some(&mut keys),
                )?;
                trace!(
                    "Slab z {}..{}: {} vertices, {} triangles",
                    cells.start,
                    cells.end,
                    stats.vertices_added,
                    stats.triangles_added
                );
                Ok(Slab {
                    cells: cells.clone(),
                    mesh,
                    keys,
                })
            })
            .collect::<Result<Vec<_>>>()
    };

    let slabs = if config.num_threads > 0 {
        match rayon::ThreadPoolBuilder::new()
            .num_threads(config.num_threads)
            .build()
        {
            Ok(pool) => pool.install(run),
            Err(e) => {
                warn!(
                    "Failed to build a {}-thread pool, using the global pool: {}",
                    config.num_threads, e
                );
                run()
            }
        }
    } else {
        run()
    }?;

    let mesh = stitch(region, slabs)?;
    debug!(
        "Parallel extraction finished: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Concatenate slab meshes in z order, merging vertices on shared planes.
fn stitch<M: Copy>(region: Region, slabs: Vec<Slab<M>>) -> Result<SurfaceMesh<M>> {
    let vertices = slabs.iter().map(|s| s.mesh.vertices().len()).sum();
    let triangles = slabs.iter().map(|s| s.mesh.triangle_count()).sum();
    let mut merged = SurfaceMesh::with_capacity(vertices, triangles);
    merged.set_offset(region.lower());

    // Vertices on the top plane of the previous slab, by edge key.
    let mut boundary: HashMap<EdgeKey, u32> = HashMap::new();

    for slab in slabs {
        let mut next_boundary = HashMap::new();
        let mut remap = Vec::with_capacity(slab.keys.len());

        for (vertex, key) in slab.mesh.vertices().iter().zip(&slab.keys) {
            let planar = key.axis != Axis::Z;
            let shared = if planar && key.origin.z == slab.cells.start {
                boundary.get(key).copied()
            } else {
                None
            };
            let index = match shared {
                Some(index) => index,
                None => merged.add_vertex(vertex.position, vertex.material, vertex.normal),
            };
            if planar && key.origin.z == slab.cells.end {
                next_boundary.insert(*key, index);
            }
            remap.push(index);
        }

        for [a, b, c] in slab.mesh.triangles() {
            merged.add_triangle(remap[a as usize], remap[b as usize], remap[c as usize])?;
        }

        boundary = next_boundary;
    }

    Ok(merged)
}
