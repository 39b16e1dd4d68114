//! Density gradient estimation for vertex normals.

use crate::controller::MarchingCubesController;
use crate::traits::{VoxelSource, WrapMode};
use crate::vector::{Vector3f, Vector3i};
use crate::voxel::Density;

/// Central-difference gradient of the density field at a voxel.
///
/// Each axis uses `(f(p + 1) - f(p - 1)) / 2`. Samples outside the source's
/// region are answered by `wrap`: [`WrapMode::Clamp`] repeats the border voxel,
/// which turns the stencil into a one-sided difference there, while
/// [`WrapMode::Border`] reads the given voxel instead.
///
/// The gradient points towards increasing density, i.e. into the solid.
pub fn central_difference_gradient<S, C>(
    source: &S,
    controller: &C,
    p: Vector3i,
    wrap: &WrapMode<S::Voxel>,
) -> Vector3f
where
    S: VoxelSource,
    C: MarchingCubesController<S::Voxel>,
{
    let sample = |offset: Vector3i| -> f32 {
        let voxel = match wrap {
            WrapMode::Clamp => source.voxel_clamped(p.saturating_add(offset)),
            WrapMode::Border(border) => match p.checked_add(offset) {
                Some(q) if source.region().contains(q) => source.voxel_clamped(q),
                _ => *border,
            },
        };
        controller.convert_to_density(voxel).to_f32()
    };

    let dx = sample(Vector3i::new(1, 0, 0)) - sample(Vector3i::new(-1, 0, 0));
    let dy = sample(Vector3i::new(0, 1, 0)) - sample(Vector3i::new(0, -1, 0));
    let dz = sample(Vector3i::new(0, 0, 1)) - sample(Vector3i::new(0, 0, -1));

    Vector3f::new(dx, dy, dz) * 0.5
}
