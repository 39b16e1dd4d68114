//! Three-component vector type used for voxel coordinates, positions and normals.
//!
//! `Vector3<T>` is a plain value type: every operation returns a new vector and
//! nothing mutates in place except the compound-assignment operators.

use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A vector with three components of the same scalar type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector3<T> {
    /// X component.
    pub x: T,
    /// Y component.
    pub y: T,
    /// Z component.
    pub z: T,
}

/// Integer vector, used for voxel coordinates and region corners.
pub type Vector3i = Vector3<i32>;

/// Float vector, used for vertex positions and normals.
pub type Vector3f = Vector3<f32>;

/// Unsigned 16-bit vector.
pub type Vector3u16 = Vector3<u16>;

impl<T> Vector3<T> {
    /// Create a new vector.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Copy> Vector3<T> {
    /// Create a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: T) -> Self {
        Self { x: v, y: v, z: v }
    }

    /// The X component.
    #[inline]
    pub const fn x(&self) -> T {
        self.x
    }

    /// The Y component.
    #[inline]
    pub const fn y(&self) -> T {
        self.y
    }

    /// The Z component.
    #[inline]
    pub const fn z(&self) -> T {
        self.z
    }

    /// Convert to an array.
    #[inline]
    pub const fn as_array(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }
}

impl<T: Copy + PartialEq> Vector3<T> {
    /// Component-wise equality against a possibly absent vector.
    ///
    /// Returns `false` when `other` is `None`.
    #[inline]
    pub fn equals(&self, other: Option<&Self>) -> bool {
        match other {
            Some(o) => self.x == o.x && self.y == o.y && self.z == o.z,
            None => false,
        }
    }
}

impl<T: Copy + Add<Output = T>> Vector3<T> {
    /// Component-wise sum.
    #[inline]
    pub fn add(self, other: Self) -> Self {
        self + other
    }
}

impl<T: Copy + Mul<Output = T>> Vector3<T> {
    /// Multiply every component by `k`.
    #[inline]
    pub fn scale(self, k: T) -> Self {
        self * k
    }
}

impl<T: Copy + Add<Output = T> + Mul<Output = T>> Vector3<T> {
    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl<T: Copy + PartialOrd> Vector3<T> {
    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self {
            x: if self.x < other.x { self.x } else { other.x },
            y: if self.y < other.y { self.y } else { other.y },
            z: if self.z < other.z { self.z } else { other.z },
        }
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self {
            x: if self.x > other.x { self.x } else { other.x },
            y: if self.y > other.y { self.y } else { other.y },
            z: if self.z > other.z { self.z } else { other.z },
        }
    }

    /// True if every component of `self` is less than or equal to the matching one in `other`.
    #[inline]
    pub fn all_le(self, other: Self) -> bool {
        self.x <= other.x && self.y <= other.y && self.z <= other.z
    }
}

impl Vector3i {
    /// Convert to a float vector.
    #[inline]
    pub fn as_f32(self) -> Vector3f {
        Vector3f::new(self.x as f32, self.y as f32, self.z as f32)
    }

    /// Component-wise addition, or `None` if any component overflows.
    #[inline]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        Some(Self::new(
            self.x.checked_add(other.x)?,
            self.y.checked_add(other.y)?,
            self.z.checked_add(other.z)?,
        ))
    }

    /// Component-wise addition, saturating at the `i32` bounds.
    #[inline]
    pub fn saturating_add(self, other: Self) -> Self {
        Self::new(
            self.x.saturating_add(other.x),
            self.y.saturating_add(other.y),
            self.z.saturating_add(other.z),
        )
    }

    /// Component-wise subtraction, or `None` if any component overflows.
    #[inline]
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        Some(Self::new(
            self.x.checked_sub(other.x)?,
            self.y.checked_sub(other.y)?,
            self.z.checked_sub(other.z)?,
        ))
    }
}

impl Vector3f {
    /// Cross product.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Squared length.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length (magnitude).
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Normalize to unit length.
    /// Returns a zero vector if the length is zero.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == 0.0 {
            Self::splat(0.0)
        } else {
            self / len
        }
    }

    /// Linear interpolation between two vectors.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            z: self.z + (other.z - self.z) * t,
        }
    }

    /// True if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl<T> From<[T; 3]> for Vector3<T> {
    #[inline]
    fn from([x, y, z]: [T; 3]) -> Self {
        Self { x, y, z }
    }
}

impl<T> From<(T, T, T)> for Vector3<T> {
    #[inline]
    fn from((x, y, z): (T, T, T)) -> Self {
        Self { x, y, z }
    }
}

impl<T> From<Vector3<T>> for [T; 3] {
    #[inline]
    fn from(v: Vector3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

impl<T: fmt::Display> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl<T: Add<Output = T>> Add for Vector3<T> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl<T: Sub<Output = T>> Sub for Vector3<T> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl<T: Copy + Mul<Output = T>> Mul<T> for Vector3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: T) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl Mul<Vector3f> for f32 {
    type Output = Vector3f;

    #[inline]
    fn mul(self, v: Vector3f) -> Vector3f {
        v * self
    }
}

impl<T: Copy + Div<Output = T>> Div<T> for Vector3<T> {
    type Output = Self;

    #[inline]
    fn div(self, scalar: T) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}

impl<T: Neg<Output = T>> Neg for Vector3<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl<T: AddAssign> AddAssign for Vector3<T> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl<T: SubAssign> SubAssign for Vector3<T> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}
