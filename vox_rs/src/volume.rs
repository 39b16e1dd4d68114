//! Dense voxel storage.

use vox_core::{Region, Result, Vector3i, VoxError, VoxelSource};

/// A dense 3D array of voxels covering a [`Region`].
///
/// Storage is a single `Vec<V>` in x-fastest order:
/// `index = (x - lx) + (y - ly) * width + (z - lz) * width * height`.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseVolume<V> {
    region: Region,
    width: usize,
    slice_area: usize,
    data: Vec<V>,
}

impl<V: Copy + Default> DenseVolume<V> {
    /// Create a volume covering `region`, with every voxel set to `V::default()`.
    pub fn new(region: Region) -> Self {
        Self::filled(region, V::default())
    }

    /// Create a volume covering `region`, with every voxel set to `value`.
    pub fn filled(region: Region, value: V) -> Self {
        let width = region.width_in_voxels() as usize;
        let slice_area = width * region.height_in_voxels() as usize;
        Self {
            region,
            width,
            slice_area,
            data: vec![value; region.voxel_count()],
        }
    }

    /// Create a volume whose voxels are computed from their positions.
    ///
    /// # Example
    ///
    /// ```
    /// use vox_core::{Region, Vector3i};
    /// use vox_rs::DenseVolume;
    ///
    /// let region = Region::new(Vector3i::splat(0), Vector3i::splat(15))?;
    /// let centre = Vector3i::splat(8);
    /// let volume = DenseVolume::from_fn(region, |p| {
    ///     let d = p - centre;
    ///     if d.dot(d) <= 25 { 255u8 } else { 0 }
    /// });
    /// assert_eq!(volume.voxel_at(centre)?, 255);
    /// # Ok::<(), vox_core::VoxError>(())
    /// ```
    pub fn from_fn<F>(region: Region, mut f: F) -> Self
    where
        F: FnMut(Vector3i) -> V,
    {
        let mut volume = Self::new(region);
        for (slot, point) in volume.data.iter_mut().zip(region.points()) {
            *slot = f(point);
        }
        volume
    }
}

impl<V: Copy> DenseVolume<V> {
    /// The region covered by this volume.
    #[inline]
    pub fn region(&self) -> Region {
        self.region
    }

    /// Number of stored voxels.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: a region holds at least one voxel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The raw voxel data in storage order.
    #[inline]
    pub fn as_slice(&self) -> &[V] {
        &self.data
    }

    /// Read the voxel at `position`.
    ///
    /// # Errors
    /// Returns `OutOfRange` if `position` lies outside the volume's region.
    #[inline]
    pub fn voxel_at(&self, position: Vector3i) -> Result<V> {
        let index = self.checked_index(position)?;
        Ok(self.data[index])
    }

    /// Write the voxel at `position`.
    ///
    /// # Errors
    /// Returns `OutOfRange` if `position` lies outside the volume's region.
    #[inline]
    pub fn set_voxel_at(&mut self, position: Vector3i, value: V) -> Result<()> {
        let index = self.checked_index(position)?;
        self.data[index] = value;
        Ok(())
    }

    /// Set every voxel to `value`.
    pub fn fill(&mut self, value: V) {
        self.data.fill(value);
    }

    #[inline]
    fn checked_index(&self, position: Vector3i) -> Result<usize> {
        if !self.region.contains(position) {
            return Err(VoxError::OutOfRange {
                position,
                lower: self.region.lower(),
                upper: self.region.upper(),
            });
        }
        Ok(self.index_of(position))
    }

    /// Linear index of a position already known to be inside the region.
    #[inline]
    fn index_of(&self, position: Vector3i) -> usize {
        let local = position - self.region.lower();
        local.x as usize + local.y as usize * self.width + local.z as usize * self.slice_area
    }
}

impl<V: Copy> VoxelSource for DenseVolume<V> {
    type Voxel = V;

    #[inline]
    fn region(&self) -> Region {
        self.region
    }

    #[inline]
    fn voxel_clamped(&self, position: Vector3i) -> V {
        self.data[self.index_of(self.region.clamp(position))]
    }

    #[inline]
    fn voxel(&self, position: Vector3i) -> Result<V> {
        self.voxel_at(position)
    }
}
