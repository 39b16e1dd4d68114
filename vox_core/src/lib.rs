//! # vox_core
//!
//! Value types and algorithms for meshing dense voxel volumes.
//!
//! This crate holds everything that does not depend on how voxels are stored:
//! vectors, regions, voxel/density traits, extraction controllers and the
//! marching cubes tables. Storage and mesh assembly live in `vox_rs`.
//!
//! ## Modules
//!
//! - [`vector`]: `Vector3<T>` with arithmetic and equality
//! - [`region`]: inclusive integer bounding boxes
//! - [`voxel`]: `Density` and `Voxel` traits, `MaterialDensityPair`
//! - [`controller`]: `MarchingCubesController` and its default implementation
//! - [`traits`]: `VoxelSource` storage abstraction and `WrapMode`
//! - [`gradient`]: central-difference normals
//! - [`marching_cubes`]: lookup tables and per-cell math
//! - [`error`]: error types
//!
//! ## Feature Flags
//!
//! - `serde`: derive `Serialize`/`Deserialize` for value types
//!
//! ## Usage
//!
//! ```
//! use vox_core::prelude::*;
//!
//! let region = Region::new(Vector3i::new(0, 0, 0), Vector3i::new(31, 31, 31))?;
//! assert_eq!(region.dimensions_in_voxels(), Vector3i::splat(32));
//! assert!(region.contains(Vector3i::new(31, 31, 31)));
//! assert!(!region.contains(Vector3i::new(32, 0, 0)));
//! # Ok::<(), vox_core::VoxError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod controller;
pub mod error;
pub mod gradient;
pub mod marching_cubes;
pub mod region;
pub mod traits;
pub mod vector;
pub mod voxel;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::controller::{DefaultController, MarchingCubesController};
    pub use crate::error::{Result, VoxError};
    pub use crate::gradient::central_difference_gradient;
    pub use crate::marching_cubes::{
        cell_triangles, compute_cube_index, edge_crossing, interpolate_vertex, process_cell,
    };
    pub use crate::region::Region;
    pub use crate::traits::{VoxelSource, WrapMode};
    pub use crate::vector::{Vector3, Vector3f, Vector3i, Vector3u16};
    pub use crate::voxel::{
        Density, MaterialDensityPair, MaterialDensityPair168, MaterialDensityPair88, Voxel,
    };
}

pub use controller::{DefaultController, MarchingCubesController};
pub use error::{Result, VoxError};
pub use gradient::central_difference_gradient;
pub use region::Region;
pub use traits::{VoxelSource, WrapMode};
pub use vector::{Vector3, Vector3f, Vector3i, Vector3u16};
pub use voxel::{
    Density, MaterialDensityPair, MaterialDensityPair168, MaterialDensityPair88, Voxel,
};
