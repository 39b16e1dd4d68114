//! Axis-aligned integer bounding boxes.
//!
//! A [`Region`] describes a box of voxels with *inclusive* lower and upper
//! corners, so `Region::new((0,0,0), (31,31,31))` spans 32 voxels per axis.
//! The same box spans 31 cells per axis, since a marching cubes cell needs a
//! voxel on both sides.
//!
//! Regions are immutable; every modifier returns a new region.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, VoxError};
use crate::vector::{Vector3f, Vector3i};

/// An inclusive axis-aligned box of integer voxel coordinates.
///
/// Invariants: `lower <= upper` on every axis, and every per-axis voxel extent
/// fits in an `i32`. Constructors reject boxes that violate either rather than
/// swapping or truncating the corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RegionRepr"))]
pub struct Region {
    lower: Vector3i,
    upper: Vector3i,
}

/// Unchecked wire form; deserialization goes through [`Region::new`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RegionRepr {
    lower: Vector3i,
    upper: Vector3i,
}

#[cfg(feature = "serde")]
impl TryFrom<RegionRepr> for Region {
    type Error = VoxError;

    fn try_from(repr: RegionRepr) -> Result<Self> {
        Region::new(repr.lower, repr.upper)
    }
}

/// Largest distance between `lower` and `upper` on one axis.
const MAX_SPAN: i64 = i32::MAX as i64 - 1;

#[inline]
fn span(lower: i32, upper: i32) -> i64 {
    i64::from(upper) - i64::from(lower)
}

impl Region {
    /// Create a region from its lower and upper corners.
    ///
    /// # Errors
    /// Returns `InvalidRegion` if `lower` exceeds `upper` on any axis, or if the
    /// region would be more than `i32::MAX` voxels wide on any axis.
    pub fn new(lower: Vector3i, upper: Vector3i) -> Result<Self> {
        if !lower.all_le(upper) {
            return Err(VoxError::InvalidRegion {
                lower,
                upper,
                reason: "lower corner exceeds upper corner",
            });
        }
        if span(lower.x, upper.x) > MAX_SPAN
            || span(lower.y, upper.y) > MAX_SPAN
            || span(lower.z, upper.z) > MAX_SPAN
        {
            return Err(VoxError::InvalidRegion {
                lower,
                upper,
                reason: "extent exceeds i32::MAX voxels",
            });
        }
        Ok(Self { lower, upper })
    }

    /// Build a region from corners that may have overflowed.
    fn checked_region(&self, lower: Option<Vector3i>, upper: Option<Vector3i>) -> Result<Self> {
        match (lower, upper) {
            (Some(lower), Some(upper)) => Region::new(lower, upper),
            _ => Err(VoxError::InvalidRegion {
                lower: self.lower,
                upper: self.upper,
                reason: "corner coordinate overflows i32",
            }),
        }
    }

    /// Create a region from individual corner coordinates.
    pub fn from_coords(
        lower_x: i32,
        lower_y: i32,
        lower_z: i32,
        upper_x: i32,
        upper_y: i32,
        upper_z: i32,
    ) -> Result<Self> {
        Self::new(
            Vector3i::new(lower_x, lower_y, lower_z),
            Vector3i::new(upper_x, upper_y, upper_z),
        )
    }

    /// A region containing exactly one voxel.
    #[inline]
    pub const fn single(point: Vector3i) -> Self {
        Self {
            lower: point,
            upper: point,
        }
    }

    /// Lower (inclusive) corner.
    #[inline]
    pub const fn lower(&self) -> Vector3i {
        self.lower
    }

    /// Upper (inclusive) corner.
    #[inline]
    pub const fn upper(&self) -> Vector3i {
        self.upper
    }

    /// Number of voxels along X.
    #[inline]
    pub const fn width_in_voxels(&self) -> i32 {
        self.upper.x - self.lower.x + 1
    }

    /// Number of voxels along Y.
    #[inline]
    pub const fn height_in_voxels(&self) -> i32 {
        self.upper.y - self.lower.y + 1
    }

    /// Number of voxels along Z.
    #[inline]
    pub const fn depth_in_voxels(&self) -> i32 {
        self.upper.z - self.lower.z + 1
    }

    /// Per-axis voxel extent (`upper - lower + 1`).
    #[inline]
    pub fn dimensions_in_voxels(&self) -> Vector3i {
        self.upper - self.lower + Vector3i::splat(1)
    }

    /// Per-axis cell extent (`upper - lower`).
    #[inline]
    pub fn dimensions_in_cells(&self) -> Vector3i {
        self.upper - self.lower
    }

    /// Total number of voxels in the region, saturating at `usize::MAX`.
    #[inline]
    pub fn voxel_count(&self) -> usize {
        (self.width_in_voxels() as usize)
            .saturating_mul(self.height_in_voxels() as usize)
            .saturating_mul(self.depth_in_voxels() as usize)
    }

    /// Total number of marching cubes cells in the region, saturating at `usize::MAX`.
    #[inline]
    pub fn cell_count(&self) -> usize {
        let cells = self.dimensions_in_cells();
        (cells.x as usize)
            .saturating_mul(cells.y as usize)
            .saturating_mul(cells.z as usize)
    }

    /// Centre of the region in voxel space.
    #[inline]
    pub fn centre(&self) -> Vector3f {
        (self.lower.as_f32() + self.upper.as_f32()) * 0.5
    }

    /// True if `point` lies inside the region, corners included.
    #[inline]
    pub fn contains(&self, point: Vector3i) -> bool {
        self.contains_with_boundary(point, 0)
    }

    /// True if `point` lies at least `boundary` voxels inside the region's faces.
    #[inline]
    pub fn contains_with_boundary(&self, point: Vector3i, boundary: i32) -> bool {
        self.contains_in_x(point.x, boundary)
            && self.contains_in_y(point.y, boundary)
            && self.contains_in_z(point.z, boundary)
    }

    /// Containment test on the X axis only.
    #[inline]
    pub fn contains_in_x(&self, x: i32, boundary: i32) -> bool {
        within(x, self.lower.x, self.upper.x, boundary)
    }

    /// Containment test on the Y axis only.
    #[inline]
    pub fn contains_in_y(&self, y: i32, boundary: i32) -> bool {
        within(y, self.lower.y, self.upper.y, boundary)
    }

    /// Containment test on the Z axis only.
    #[inline]
    pub fn contains_in_z(&self, z: i32, boundary: i32) -> bool {
        within(z, self.lower.z, self.upper.z, boundary)
    }

    /// Containment test for a float position.
    pub fn contains_f32(&self, point: Vector3f, boundary: f32) -> bool {
        let lower = self.lower.as_f32();
        let upper = self.upper.as_f32();
        point.x <= upper.x - boundary
            && point.y <= upper.y - boundary
            && point.z <= upper.z - boundary
            && point.x >= lower.x + boundary
            && point.y >= lower.y + boundary
            && point.z >= lower.z + boundary
    }

    /// True if `other` lies entirely inside this region.
    #[inline]
    pub fn contains_region(&self, other: &Region) -> bool {
        self.contains(other.lower) && self.contains(other.upper)
    }

    /// The nearest point inside the region.
    #[inline]
    pub fn clamp(&self, point: Vector3i) -> Vector3i {
        point.max(self.lower).min(self.upper)
    }

    /// Overlap of two regions, or `None` if they are disjoint.
    pub fn intersection(&self, other: &Region) -> Option<Region> {
        let lower = self.lower.max(other.lower);
        let upper = self.upper.min(other.upper);
        Region::new(lower, upper).ok()
    }

    /// Grow the region by `amount` on every face.
    ///
    /// Negative components shrink the region, like [`Region::erode`].
    ///
    /// # Errors
    /// Returns `InvalidRegion` if the region would invert, outgrow the `i32`
    /// extent limit, or move a corner past the `i32` range.
    pub fn dilate(&self, amount: Vector3i) -> Result<Region> {
        self.checked_region(self.lower.checked_sub(amount), self.upper.checked_add(amount))
    }

    /// Shrink the region by `amount` on every face.
    ///
    /// # Errors
    /// Returns `InvalidRegion` if the region would invert or a corner overflows.
    pub fn erode(&self, amount: Vector3i) -> Result<Region> {
        self.checked_region(self.lower.checked_add(amount), self.upper.checked_sub(amount))
    }

    /// Move both corners by `amount`.
    ///
    /// # Errors
    /// Returns `InvalidRegion` if a corner would leave the `i32` range.
    pub fn shift(&self, amount: Vector3i) -> Result<Region> {
        self.checked_region(self.lower.checked_add(amount), self.upper.checked_add(amount))
    }

    /// Move only the lower corner.
    pub fn shift_lower(&self, amount: Vector3i) -> Result<Region> {
        self.checked_region(self.lower.checked_add(amount), Some(self.upper))
    }

    /// Move only the upper corner.
    pub fn shift_upper(&self, amount: Vector3i) -> Result<Region> {
        self.checked_region(Some(self.lower), self.upper.checked_add(amount))
    }

    /// Iterate over every voxel position, X fastest, then Y, then Z.
    pub fn points(&self) -> impl Iterator<Item = Vector3i> {
        let (lower, upper) = (self.lower, self.upper);
        (lower.z..=upper.z).flat_map(move |z| {
            (lower.y..=upper.y)
                .flat_map(move |y| (lower.x..=upper.x).map(move |x| Vector3i::new(x, y, z)))
        })
    }
}

/// One-axis containment, computed in `i64` so extreme boundaries cannot overflow.
#[inline]
fn within(v: i32, lower: i32, upper: i32, boundary: i32) -> bool {
    let (v, boundary) = (i64::from(v), i64::from(boundary));
    v <= i64::from(upper) - boundary && v >= i64::from(lower) + boundary
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} .. {}]", self.lower, self.upper)
    }
}
