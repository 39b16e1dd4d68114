//! Error types for volume, region, mesh and extraction operations.

use thiserror::Error;

use crate::vector::Vector3i;

/// Errors that can occur while building regions, accessing volumes or extracting meshes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VoxError {
    /// A voxel coordinate lies outside the volume's region.
    #[error("voxel position {position} is outside region {lower}..={upper}")]
    OutOfRange {
        /// The offending coordinate.
        position: Vector3i,
        /// Lower corner of the region that was accessed.
        lower: Vector3i,
        /// Upper corner of the region that was accessed.
        upper: Vector3i,
    },

    /// A region is malformed or does not fit the volume it is bound to.
    #[error("invalid region {lower}..={upper}: {reason}")]
    InvalidRegion {
        /// Lower corner of the rejected region.
        lower: Vector3i,
        /// Upper corner of the rejected region.
        upper: Vector3i,
        /// Why the region was rejected.
        reason: &'static str,
    },

    /// A triangle referenced a vertex that has not been added.
    #[error("triangle references vertex {index} but mesh has {vertex_count} vertices")]
    InvalidMeshReference {
        /// The out-of-range vertex index.
        index: u32,
        /// Number of vertices in the mesh at the time of the call.
        vertex_count: u32,
    },

    /// An index list does not divide into whole triangles.
    #[error("mesh has {index_count} indices, not a multiple of three")]
    IncompleteTriangle {
        /// Length of the rejected index list.
        index_count: usize,
    },

    /// An extractor was bound to a mesh that already holds vertices.
    #[error("output mesh already holds {vertex_count} vertices")]
    MeshNotEmpty {
        /// Number of vertices found in the mesh.
        vertex_count: u32,
    },

    /// `execute()` was called on an extractor that already ran.
    #[error("extractor has already been executed")]
    AlreadyExecuted,
}

/// Result type alias for vox operations.
pub type Result<T> = core::result::Result<T, VoxError>;
