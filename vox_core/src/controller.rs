//! Extraction controllers.
//!
//! A controller tells the surface extractor how to read a voxel: which scalar
//! to threshold, what material to attach to vertices, and where the iso
//! surface sits. Custom controllers let the same volume be meshed at
//! different thresholds or with materials derived from other voxel data.

use core::marker::PhantomData;

use crate::voxel::{Density, Voxel};

/// Controls how marching cubes interprets voxels of type `V`.
pub trait MarchingCubesController<V> {
    /// Scalar compared against [`threshold`](Self::threshold).
    type Density: Density;
    /// Per-vertex payload.
    type Material: Copy + Default + Send + Sync + 'static;

    /// The density of a voxel.
    fn convert_to_density(&self, voxel: V) -> Self::Density;

    /// The material of a voxel.
    fn convert_to_material(&self, voxel: V) -> Self::Material;

    /// The iso value. A corner is inside the surface when its density is
    /// greater than or equal to this.
    fn threshold(&self) -> Self::Density;

    /// True if `density` counts as inside the surface.
    ///
    /// Uses the same comparison as the cube index, so a NaN density is outside.
    #[inline]
    fn is_inside(&self, density: Self::Density) -> bool {
        density.is_inside(self.threshold())
    }
}

/// Controller that reads density and material straight from a [`Voxel`].
#[derive(Debug)]
pub struct DefaultController<V: Voxel> {
    threshold: V::Density,
    _voxel: PhantomData<fn() -> V>,
}

impl<V: Voxel> DefaultController<V> {
    /// Controller using the density type's default threshold, the midpoint of its range.
    pub fn new() -> Self {
        Self::with_threshold(V::Density::default_threshold())
    }

    /// Controller with an explicit threshold.
    pub fn with_threshold(threshold: V::Density) -> Self {
        Self {
            threshold,
            _voxel: PhantomData,
        }
    }
}

impl<V: Voxel> Default for DefaultController<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Voxel> Clone for DefaultController<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: Voxel> Copy for DefaultController<V> {}

impl<V: Voxel> MarchingCubesController<V> for DefaultController<V> {
    type Density = V::Density;
    type Material = V::Material;

    #[inline]
    fn convert_to_density(&self, voxel: V) -> V::Density {
        voxel.density()
    }

    #[inline]
    fn convert_to_material(&self, voxel: V) -> V::Material {
        voxel.material()
    }

    #[inline]
    fn threshold(&self) -> V::Density {
        self.threshold
    }
}
