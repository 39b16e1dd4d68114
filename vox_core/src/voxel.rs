//! Voxel value types.
//!
//! Marching cubes only needs two things from a voxel: a scalar *density* to
//! compare against the iso threshold, and a *material* to copy into the
//! vertices it produces. Primitive numbers are their own density and material;
//! [`MaterialDensityPair`] stores the two separately.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A scalar type usable as a density.
pub trait Density: Copy + PartialOrd + Default + Send + Sync + 'static {
    /// Smallest representable value.
    const MIN: Self;
    /// Largest representable value.
    const MAX: Self;

    /// Default iso threshold: the value halfway through the representable
    /// range, 127 for `u8` and 0 for signed and float types.
    fn default_threshold() -> Self;

    /// True if a sample of this density lies inside a surface at `threshold`.
    ///
    /// Inside means `self >= threshold`. Anything that fails the comparison,
    /// including a NaN sample, is outside.
    #[inline]
    fn is_inside(self, threshold: Self) -> bool {
        self >= threshold
    }

    /// Convert to `f32` for interpolation and gradient estimation.
    fn to_f32(self) -> f32;
}

macro_rules! impl_density_int {
    ($($t:ty),*) => {
        $(
            impl Density for $t {
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn default_threshold() -> Self {
                    ((<$t>::MIN as i64 + <$t>::MAX as i64) / 2) as $t
                }

                #[inline]
                fn to_f32(self) -> f32 {
                    self as f32
                }
            }
        )*
    };
}

macro_rules! impl_density_float {
    ($($t:ty),*) => {
        $(
            impl Density for $t {
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn default_threshold() -> Self {
                    0.0
                }

                #[inline]
                fn to_f32(self) -> f32 {
                    self as f32
                }
            }
        )*
    };
}

impl_density_int!(u8, u16, u32, i8, i16, i32);
impl_density_float!(f32, f64);

/// A value stored in a volume.
pub trait Voxel: Copy + Default + Send + Sync + 'static {
    /// Scalar compared against the iso threshold.
    type Density: Density;
    /// Per-vertex payload copied into the mesh.
    type Material: Copy + Default + Send + Sync + 'static;

    /// The voxel's density.
    fn density(&self) -> Self::Density;

    /// The voxel's material.
    fn material(&self) -> Self::Material;
}

macro_rules! impl_voxel_primitive {
    ($($t:ty),*) => {
        $(
            impl Voxel for $t {
                type Density = $t;
                type Material = $t;

                #[inline]
                fn density(&self) -> $t {
                    *self
                }

                #[inline]
                fn material(&self) -> $t {
                    *self
                }
            }
        )*
    };
}

impl_voxel_primitive!(u8, u16, u32, i8, i16, i32, f32, f64);

/// A voxel carrying an independent material id and density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MaterialDensityPair<M, D> {
    /// Material id copied into extracted vertices.
    pub material: M,
    /// Density compared against the iso threshold.
    pub density: D,
}

impl<M, D> MaterialDensityPair<M, D> {
    /// Create a new pair.
    #[inline]
    pub const fn new(material: M, density: D) -> Self {
        Self { material, density }
    }
}

/// Eight-bit material with eight-bit density.
pub type MaterialDensityPair88 = MaterialDensityPair<u8, u8>;

/// Sixteen-bit material with eight-bit density.
pub type MaterialDensityPair168 = MaterialDensityPair<u16, u8>;

impl<M, D> Voxel for MaterialDensityPair<M, D>
where
    M: Copy + Default + Send + Sync + 'static,
    D: Density,
{
    type Density = D;
    type Material = M;

    #[inline]
    fn density(&self) -> D {
        self.density
    }

    #[inline]
    fn material(&self) -> M {
        self.material
    }
}
