//! # vox_rs
//!
//! Dense voxel volumes and indexed marching cubes surface extraction.
//!
//! This crate provides the storage and meshing side of the `vox` libraries:
//!
//! - **Storage**: [`DenseVolume`] holds one voxel per integer position of a
//!   [`Region`](vox_core::Region), in a single contiguous allocation
//! - **Meshing**: [`MarchingCubesExtractor`] turns a region of a volume into an
//!   indexed [`SurfaceMesh`] with per-vertex normals and materials
//! - **Parallelism**: [`extract_parallel`] meshes z-slabs on the rayon pool and
//!   stitches them into the same mesh the sequential extractor produces
//!
//! ## Quick Start
//!
//! ```
//! use vox_core::{Region, Vector3i};
//! use vox_rs::{extract_marching_cubes_mesh, DenseVolume, MeshStats};
//!
//! let region = Region::new(Vector3i::splat(0), Vector3i::splat(31))?;
//! let centre = Vector3i::splat(16);
//! let volume = DenseVolume::from_fn(region, |p| {
//!     let d = p - centre;
//!     if d.dot(d) <= 100 { 255u8 } else { 0 }
//! });
//!
//! let mesh = extract_marching_cubes_mesh(&volume, region)?;
//! let stats = MeshStats::from_mesh(&mesh);
//! assert!(stats.triangle_count > 0);
//! # Ok::<(), vox_core::VoxError>(())
//! ```
//!
//! ## Conventions
//!
//! A voxel is inside the surface when its density is at least the controller's
//! threshold. Triangles wind counter-clockwise seen from outside, and normals
//! point from the solid towards empty space. Normals near the volume's faces
//! depend on the [`WrapMode`](vox_core::WrapMode): clamped by default, or a
//! fixed border voxel.
//!
//! ## Feature Flags
//!
//! - `parallel` (default): slab-parallel extraction via rayon
//! - `serde`: derive `Serialize`/`Deserialize` for meshes and configuration

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod extractor;
mod mesh;
mod volume;

#[cfg(feature = "parallel")]
mod parallel;

pub use config::ParallelConfig;
pub use extractor::{
    extract_marching_cubes_mesh, extract_with_controller, extract_with_wrap_mode,
    ExtractionStats, MarchingCubesExtractor,
};
pub use mesh::{MeshStats, SurfaceMesh, SurfaceVertex, Triangle};
pub use volume::DenseVolume;

#[cfg(feature = "parallel")]
pub use parallel::{extract_parallel, extract_parallel_with_wrap_mode};

// Re-export vox_core types for convenience
pub use vox_core::{
    DefaultController, MarchingCubesController, Region, Result, Vector3f, Vector3i, VoxError,
    VoxelSource, WrapMode,
};

/// Prelude module for convenient imports.
///
/// ```
/// use vox_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::extractor::{extract_marching_cubes_mesh, MarchingCubesExtractor};
    pub use crate::mesh::{MeshStats, SurfaceMesh, SurfaceVertex};
    pub use crate::volume::DenseVolume;

    pub use crate::config::ParallelConfig;
    #[cfg(feature = "parallel")]
    pub use crate::parallel::extract_parallel;

    pub use vox_core::prelude::*;
}
