//! Storage abstraction.
//!
//! Algorithms in this crate read voxels through [`VoxelSource`] so that
//! `vox_rs` (or any other crate) can supply its own storage.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, VoxError};
use crate::region::Region;
use crate::vector::Vector3i;

/// How reads outside a source's region are answered.
///
/// Extraction only visits voxels inside the volume, but the gradient stencil
/// behind vertex normals reaches one voxel further.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WrapMode<V> {
    /// Repeat the nearest voxel on the region's border.
    #[default]
    Clamp,
    /// Treat everything outside the region as this voxel.
    Border(V),
}

/// Read access to a bounded grid of voxels.
pub trait VoxelSource {
    /// The stored voxel type.
    type Voxel: Copy;

    /// The region of addressable voxels.
    fn region(&self) -> Region;

    /// Read the voxel at `position` after clamping it into [`region`](Self::region).
    ///
    /// Used by gradient estimation at the volume border, and by algorithms that
    /// have already validated their access pattern against the region.
    fn voxel_clamped(&self, position: Vector3i) -> Self::Voxel;

    /// Read the voxel at `position`.
    ///
    /// # Errors
    /// Returns `OutOfRange` if `position` is outside [`region`](Self::region).
    fn voxel(&self, position: Vector3i) -> Result<Self::Voxel> {
        let region = self.region();
        if !region.contains(position) {
            return Err(VoxError::OutOfRange {
                position,
                lower: region.lower(),
                upper: region.upper(),
            });
        }
        Ok(self.voxel_clamped(position))
    }
}

impl<S: VoxelSource + ?Sized> VoxelSource for &S {
    type Voxel = S::Voxel;

    #[inline]
    fn region(&self) -> Region {
        (**self).region()
    }

    #[inline]
    fn voxel_clamped(&self, position: Vector3i) -> Self::Voxel {
        (**self).voxel_clamped(position)
    }
}
