//! Indexed marching cubes surface extraction.
//!
//! [`MarchingCubesExtractor`] walks every cell of a region, classifies its
//! eight corners against the controller's threshold and emits triangles from
//! the lookup tables in `vox_core::marching_cubes`. Each crossed edge becomes
//! exactly one vertex: cells that share an edge share the vertex through an
//! [`EdgeCache`] that only remembers the two z-planes currently being scanned.

use std::ops::Range;

use log::debug;
use vox_core::marching_cubes::{
    cell_triangles, compute_cube_index, edge_crossing, CORNER_OFFSETS, EDGE_TABLE,
};
use vox_core::{
    central_difference_gradient, DefaultController, Density, MarchingCubesController, Region,
    Result, Vector3i, VoxError, Voxel, VoxelSource, WrapMode,
};

use crate::mesh::SurfaceMesh;

/// Direction of a cell edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    #[inline]
    fn unit(self) -> Vector3i {
        match self {
            Axis::X => Vector3i::new(1, 0, 0),
            Axis::Y => Vector3i::new(0, 1, 0),
            Axis::Z => Vector3i::new(0, 0, 1),
        }
    }
}

/// Identity of a grid edge independent of the cell that visits it:
/// its lower endpoint and the axis it runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct EdgeKey {
    pub(crate) origin: Vector3i,
    pub(crate) axis: Axis,
}

/// For each of the 12 cell edges: the corner at its lower end and its axis.
const EDGE_ORIGINS: [(usize, Axis); 12] = [
    (0, Axis::X),
    (1, Axis::Y),
    (3, Axis::X),
    (0, Axis::Y),
    (4, Axis::X),
    (5, Axis::Y),
    (7, Axis::X),
    (4, Axis::Y),
    (0, Axis::Z),
    (1, Axis::Z),
    (2, Axis::Z),
    (3, Axis::Z),
];

const NO_VERTEX: u32 = u32::MAX;

#[inline]
fn corner_offset(corner: usize) -> Vector3i {
    let (dx, dy, dz) = CORNER_OFFSETS[corner];
    Vector3i::new(dx as i32, dy as i32, dz as i32)
}

/// Vertex indices of the edges touching the layer of cells being scanned.
///
/// X and Y edges are kept for the bottom and top plane of the layer, Z edges
/// for the layer itself. Advancing to the next layer turns the top plane into
/// the bottom plane, so memory stays proportional to one slice of the region.
struct EdgeCache {
    lower: Vector3i,
    width: usize,
    bottom_x: Vec<u32>,
    bottom_y: Vec<u32>,
    top_x: Vec<u32>,
    top_y: Vec<u32>,
    vertical: Vec<u32>,
}

impl EdgeCache {
    fn new(region: &Region) -> Self {
        let width = region.width_in_voxels() as usize;
        let plane = width * region.height_in_voxels() as usize;
        Self {
            lower: region.lower(),
            width,
            bottom_x: vec![NO_VERTEX; plane],
            bottom_y: vec![NO_VERTEX; plane],
            top_x: vec![NO_VERTEX; plane],
            top_y: vec![NO_VERTEX; plane],
            vertical: vec![NO_VERTEX; plane],
        }
    }

    #[inline]
    fn slot(&mut self, key: EdgeKey, layer_z: i32) -> &mut u32 {
        let local = key.origin - self.lower;
        let i = local.x as usize + local.y as usize * self.width;
        let bottom = key.origin.z == layer_z;
        match (key.axis, bottom) {
            (Axis::Z, _) => &mut self.vertical[i],
            (Axis::X, true) => &mut self.bottom_x[i],
            (Axis::X, false) => &mut self.top_x[i],
            (Axis::Y, true) => &mut self.bottom_y[i],
            (Axis::Y, false) => &mut self.top_y[i],
        }
    }

    fn advance(&mut self) {
        std::mem::swap(&mut self.bottom_x, &mut self.top_x);
        std::mem::swap(&mut self.bottom_y, &mut self.top_y);
        self.top_x.fill(NO_VERTEX);
        self.top_y.fill(NO_VERTEX);
        self.vertical.fill(NO_VERTEX);
    }
}

/// Counters reported by an extraction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Cells examined.
    pub cells_visited: usize,
    /// Cells whose configuration was neither empty nor full.
    pub active_cells: usize,
    /// Vertices appended to the mesh.
    pub vertices_added: usize,
    /// Triangles appended to the mesh.
    pub triangles_added: usize,
}

/// Check that an extraction may write into `mesh`.
pub(crate) fn validate_mesh<M: Copy>(mesh: &SurfaceMesh<M>) -> Result<()> {
    if mesh.vertex_count() > 0 {
        return Err(VoxError::MeshNotEmpty {
            vertex_count: mesh.vertex_count(),
        });
    }
    Ok(())
}

/// Check that `region` can be extracted from a volume covering `bounds`.
pub(crate) fn validate_region(bounds: &Region, region: &Region) -> Result<()> {
    if !bounds.contains_region(region) {
        return Err(VoxError::InvalidRegion {
            lower: region.lower(),
            upper: region.upper(),
            reason: "extraction region is not contained in the volume",
        });
    }
    Ok(())
}

/// Run marching cubes over the cells of `region` whose z origin lies in `cell_z`.
///
/// Positions are relative to `region.lower()`. Gradient samples beyond the
/// volume follow `wrap`. When `edge_keys` is given, the key of every new
/// vertex is pushed to it in vertex order.
pub(crate) fn march<S, C>(
    volume: &S,
    controller: &C,
    wrap: &WrapMode<S::Voxel>,
    region: &Region,
    cell_z: Range<i32>,
    mesh: &mut SurfaceMesh<C::Material>,
    mut edge_keys: Option<&mut Vec<EdgeKey>>,
) -> Result<ExtractionStats>
where
    S: VoxelSource,
    C: MarchingCubesController<S::Voxel>,
{
    let lower = region.lower();
    let upper = region.upper();
    let threshold = controller.threshold();
    let iso = threshold.to_f32();

    let mut cache = EdgeCache::new(region);
    let mut stats = ExtractionStats::default();
    let mut cell_vertices = [NO_VERTEX; 12];

    for z in cell_z.clone() {
        if z != cell_z.start {
            cache.advance();
        }

        for y in lower.y..upper.y {
            for x in lower.x..upper.x {
                stats.cells_visited += 1;

                let cell = Vector3i::new(x, y, z);
                let voxels = CORNER_OFFSETS.map(|(dx, dy, dz)| {
                    volume.voxel_clamped(cell + Vector3i::new(dx as i32, dy as i32, dz as i32))
                });
                let densities = voxels.map(|v| controller.convert_to_density(v));

                let cube_index = compute_cube_index(&densities, threshold);
                let edge_flags = EDGE_TABLE[cube_index];
                if edge_flags == 0 {
                    continue;
                }
                stats.active_cells += 1;

                for (edge, &(corner, axis)) in EDGE_ORIGINS.iter().enumerate() {
                    if edge_flags & (1 << edge) == 0 {
                        continue;
                    }

                    let key = EdgeKey {
                        origin: cell + corner_offset(corner),
                        axis,
                    };
                    let slot = cache.slot(key, z);
                    if *slot == NO_VERTEX {
                        let far = far_corner(corner, axis);
                        let f0 = densities[corner].to_f32();
                        let f1 = densities[far].to_f32();
                        let t = edge_crossing(f0, f1, iso);

                        let p0 = key.origin;
                        let p1 = key.origin + axis.unit();
                        let position = (p0 - lower).as_f32().lerp((p1 - lower).as_f32(), t);

                        let g0 = central_difference_gradient(volume, controller, p0, wrap);
                        let g1 = central_difference_gradient(volume, controller, p1, wrap);
                        let normal = -g0.lerp(g1, t).normalize();

                        let inside = if cube_index & (1 << corner) == 0 {
                            voxels[corner]
                        } else {
                            voxels[far]
                        };
                        let material = controller.convert_to_material(inside);

                        *slot = mesh.add_vertex(position, material, normal);
                        stats.vertices_added += 1;
                        if let Some(keys) = edge_keys.as_deref_mut() {
                            keys.push(key);
                        }
                    }
                    cell_vertices[edge] = *slot;
                }

                for [e0, e1, e2] in cell_triangles(cube_index) {
                    mesh.add_triangle(cell_vertices[e0], cell_vertices[e1], cell_vertices[e2])?;
                    stats.triangles_added += 1;
                }
            }
        }
    }

    Ok(stats)
}

/// The corner one step along `axis` from `corner`.
#[inline]
fn far_corner(corner: usize, axis: Axis) -> usize {
    let target = corner_offset(corner) + axis.unit();
    (0..8)
        .find(|&c| corner_offset(c) == target)
        .unwrap_or(corner)
}

/// Extracts an iso-surface from a bound volume region into a mesh.
///
/// The extractor is single-use: the first [`execute`](Self::execute) fills the
/// mesh, later calls fail with `AlreadyExecuted` and leave the mesh untouched.
/// The mesh must start without vertices, since extraction sets its offset.
///
/// Gradient samples that fall outside the volume are clamped to its border
/// unless [`with_wrap_mode`](Self::with_wrap_mode) chooses a border voxel.
///
/// # Example
///
/// ```
/// use vox_core::{Region, Vector3i};
/// use vox_rs::{DenseVolume, MarchingCubesExtractor, SurfaceMesh};
///
/// let region = Region::new(Vector3i::new(0, 0, 0), Vector3i::new(31, 31, 31))?;
/// let mut volume = DenseVolume::<u8>::new(region);
/// volume.set_voxel_at(Vector3i::new(5, 5, 5), 200)?;
///
/// let mut mesh = SurfaceMesh::new();
/// let mut extractor = MarchingCubesExtractor::new(&volume, region, &mut mesh)?;
/// extractor.execute()?;
///
/// assert_eq!(mesh.vertex_count(), 6);
/// assert_eq!(mesh.triangle_count(), 8);
/// # Ok::<(), vox_core::VoxError>(())
/// ```
pub struct MarchingCubesExtractor<'a, S, C>
where
    S: VoxelSource,
    C: MarchingCubesController<S::Voxel>,
{
    volume: &'a S,
    region: Region,
    mesh: &'a mut SurfaceMesh<C::Material>,
    controller: C,
    wrap: WrapMode<S::Voxel>,
    executed: bool,
}

impl<'a, S> MarchingCubesExtractor<'a, S, DefaultController<S::Voxel>>
where
    S: VoxelSource,
    S::Voxel: Voxel,
{
    /// Bind a volume, region and output mesh using the default controller.
    ///
    /// # Errors
    /// Returns `InvalidRegion` if `region` is not inside the volume's region,
    /// and `MeshNotEmpty` if `mesh` already holds vertices.
    pub fn new(
        volume: &'a S,
        region: Region,
        mesh: &'a mut SurfaceMesh<<S::Voxel as Voxel>::Material>,
    ) -> Result<Self> {
        Self::with_controller(volume, region, mesh, DefaultController::new())
    }
}

impl<'a, S, C> MarchingCubesExtractor<'a, S, C>
where
    S: VoxelSource,
    C: MarchingCubesController<S::Voxel>,
{
    /// Bind a volume, region and output mesh with a custom controller.
    ///
    /// # Errors
    /// Returns `InvalidRegion` if `region` is not inside the volume's region,
    /// and `MeshNotEmpty` if `mesh` already holds vertices.
    pub fn with_controller(
        volume: &'a S,
        region: Region,
        mesh: &'a mut SurfaceMesh<C::Material>,
        controller: C,
    ) -> Result<Self> {
        validate_region(&volume.region(), &region)?;
        validate_mesh(mesh)?;
        Ok(Self {
            volume,
            region,
            mesh,
            controller,
            wrap: WrapMode::Clamp,
            executed: false,
        })
    }

    /// Choose how gradient samples outside the volume are read.
    pub fn with_wrap_mode(mut self, wrap: WrapMode<S::Voxel>) -> Self {
        self.wrap = wrap;
        self
    }

    /// The wrap mode used for gradient samples outside the volume.
    #[inline]
    pub fn wrap_mode(&self) -> &WrapMode<S::Voxel> {
        &self.wrap
    }

    /// The region being extracted.
    #[inline]
    pub fn region(&self) -> Region {
        self.region
    }

    /// The controller in use.
    #[inline]
    pub fn controller(&self) -> &C {
        &self.controller
    }

    /// True once [`execute`](Self::execute) has run.
    #[inline]
    pub fn is_executed(&self) -> bool {
        self.executed
    }

    /// Run the extraction, appending vertices and triangles to the bound mesh.
    ///
    /// Sets the mesh offset to the region's lower corner; vertex positions are
    /// relative to it.
    ///
    /// # Errors
    /// Returns `AlreadyExecuted` on every call after the first.
    pub fn execute(&mut self) -> Result<ExtractionStats> {
        if self.executed {
            return Err(VoxError::AlreadyExecuted);
        }
        self.executed = true;

        let lower = self.region.lower();
        let upper = self.region.upper();
        debug!(
            "Extracting region {} ({} cells)",
            self.region,
            self.region.cell_count()
        );

        self.mesh.set_offset(lower);
        let stats = march(
            self.volume,
            &self.controller,
            &self.wrap,
            &self.region,
            lower.z..upper.z,
            self.mesh,
            None,
        )?;

        debug!(
            "Extraction finished: {} active cells, {} vertices, {} triangles",
            stats.active_cells, stats.vertices_added, stats.triangles_added
        );
        Ok(stats)
    }
}

/// Extract `region` of `volume` into a new mesh using the default controller.
pub fn extract_marching_cubes_mesh<S>(
    volume: &S,
    region: Region,
) -> Result<SurfaceMesh<<S::Voxel as Voxel>::Material>>
where
    S: VoxelSource,
    S::Voxel: Voxel,
{
    extract_with_controller(volume, region, DefaultController::new())
}

/// Extract `region` of `volume` into a new mesh using `controller`.
pub fn extract_with_controller<S, C>(
    volume: &S,
    region: Region,
    controller: C,
) -> Result<SurfaceMesh<C::Material>>
where
    S: VoxelSource,
    C: MarchingCubesController<S::Voxel>,
{
    extract_with_wrap_mode(volume, region, controller, WrapMode::Clamp)
}

/// Extract `region` of `volume` into a new mesh using `controller`, reading
/// gradient samples outside the volume according to `wrap`.
pub fn extract_with_wrap_mode<S, C>(
    volume: &S,
    region: Region,
    controller: C,
    wrap: WrapMode<S::Voxel>,
) -> Result<SurfaceMesh<C::Material>>
where
    S: VoxelSource,
    C: MarchingCubesController<S::Voxel>,
{
    let mut mesh = SurfaceMesh::new();
    MarchingCubesExtractor::with_controller(volume, region, &mut mesh, controller)?
        .with_wrap_mode(wrap)
        .execute()?;
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::volume::DenseVolume;
    use vox_core::marching_cubes::EDGE_VERTICES;
    use vox_core::Vector3f;

    fn single_voxel_volume() -> (DenseVolume<u8>, Region) {
        let region = Region::from_coords(0, 0, 0, 31, 31, 31).unwrap();
        let mut volume = DenseVolume::new(region);
        volume.set_voxel_at(Vector3i::new(5, 5, 5), 200).unwrap();
        (volume, region)
    }

    #[test]
    fn test_edge_origins_match_tables() {
        for (edge, &(corner, axis)) in EDGE_ORIGINS.iter().enumerate() {
            let far = far_corner(corner, axis);
            assert_ne!(far, corner, "edge {} has no far corner", edge);

            let (a, b) = EDGE_VERTICES[edge];
            assert!(
                (a, b) == (corner, far) || (a, b) == (far, corner),
                "edge {} joins {:?}, origin table says {}->{}",
                edge,
                (a, b),
                corner,
                far
            );
        }
    }

    #[test]
    fn test_single_voxel_reference_scenario() {
        let (volume, region) = single_voxel_volume();
        let mut mesh = SurfaceMesh::new();

        let stats = MarchingCubesExtractor::new(&volume, region, &mut mesh)
            .unwrap()
            .execute()
            .unwrap();

        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangle_count(), 8);
        assert_eq!(stats.active_cells, 8);
        assert_eq!(stats.cells_visited, 31 * 31 * 31);
        assert_eq!(stats.vertices_added, 6);
        assert_eq!(stats.triangles_added, 8);
    }

    #[test]
    fn test_single_voxel_vertex_positions_normals_materials() {
        let (volume, region) = single_voxel_volume();
        let mesh = extract_marching_cubes_mesh(&volume, region).unwrap();
        let centre = Vector3f::splat(5.0);

        for v in mesh.vertices() {
            let d = v.position - centre;
            // One crossing on each of the six edges leaving the solid voxel,
            // 0.365 of the way from the solid (200) to the empty (0) neighbour.
            assert!((d.length() - 0.365).abs() < 1e-4, "vertex at {:?}", v.position);
            assert!((v.normal.length() - 1.0).abs() < 1e-5);
            assert!(v.normal.dot(d) > 0.0, "normal should point away from the solid");
            assert_eq!(v.material, 200);
        }
    }

    #[test]
    fn test_triangles_wind_outward() {
        let (volume, region) = single_voxel_volume();
        let mesh = extract_marching_cubes_mesh(&volume, region).unwrap();
        let centre = Vector3f::splat(5.0);

        for i in 0..mesh.triangle_count() {
            let [a, b, c] = mesh.triangle_positions(i).unwrap();
            let face_normal = (b - a).cross(c - a);
            let centroid = (a + b + c) * (1.0 / 3.0);
            assert!(face_normal.dot(centroid - centre) > 0.0, "triangle {} faces inward", i);
        }
    }

    #[test]
    fn test_uniform_volumes_produce_nothing() {
        let region = Region::from_coords(0, 0, 0, 7, 7, 7).unwrap();
        for value in [0u8, 126, 127, 255] {
            let volume = DenseVolume::filled(region, value);
            let mesh = extract_marching_cubes_mesh(&volume, region).unwrap();
            assert_eq!(mesh.vertex_count(), 0, "value {}", value);
            assert_eq!(mesh.triangle_count(), 0, "value {}", value);
        }
    }

    #[test]
    fn test_second_execute_fails_fast() {
        let (volume, region) = single_voxel_volume();
        let mut mesh = SurfaceMesh::new();
        {
            let mut extractor = MarchingCubesExtractor::new(&volume, region, &mut mesh).unwrap();
            assert!(!extractor.is_executed());
            extractor.execute().unwrap();
            assert!(extractor.is_executed());
            assert_eq!(extractor.execute(), Err(VoxError::AlreadyExecuted));
        }
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangle_count(), 8);
    }

    #[test]
    fn test_region_outside_volume_is_rejected() {
        let (volume, _) = single_voxel_volume();
        let region = Region::from_coords(16, 16, 16, 40, 20, 20).unwrap();
        let mut mesh = SurfaceMesh::new();

        let result = MarchingCubesExtractor::new(&volume, region, &mut mesh);
        assert!(matches!(result, Err(VoxError::InvalidRegion { .. })));
        assert_eq!(mesh.vertex_count(), 0);
    }

    #[test]
    fn test_thin_regions_have_no_cells() {
        let (volume, _) = single_voxel_volume();
        let thin = [
            Region::from_coords(0, 0, 5, 31, 31, 5).unwrap(),
            Region::from_coords(5, 0, 0, 5, 31, 31).unwrap(),
            Region::single(Vector3i::new(5, 5, 5)),
        ];
        for region in thin {
            let mut mesh = SurfaceMesh::new();
            let stats = MarchingCubesExtractor::new(&volume, region, &mut mesh)
                .unwrap()
                .execute()
                .unwrap();
            assert_eq!(stats.cells_visited, 0);
            assert!(mesh.is_empty());
            assert_eq!(mesh.vertex_count(), 0);
        }
    }

    #[test]
    fn test_offset_is_region_lower_corner() {
        let (volume, _) = single_voxel_volume();
        let region = Region::from_coords(4, 4, 4, 8, 8, 8).unwrap();
        let mesh = extract_marching_cubes_mesh(&volume, region).unwrap();

        assert_eq!(mesh.offset(), Vector3i::splat(4));
        assert_eq!(mesh.vertex_count(), 6);
        for i in 0..mesh.vertex_count() {
            let world = mesh.world_position(i).unwrap();
            assert!(((world - Vector3f::splat(5.0)).length() - 0.365).abs() < 1e-4);
        }
    }

    #[test]
    fn test_custom_threshold_moves_crossings() {
        let (volume, region) = single_voxel_volume();
        let mesh =
            extract_with_controller(&volume, region, DefaultController::<u8>::with_threshold(100))
                .unwrap();

        assert_eq!(mesh.vertex_count(), 6);
        for v in mesh.vertices() {
            // (100 - 200) / (0 - 200) = 0.5
            assert!(((v.position - Vector3f::splat(5.0)).length() - 0.5).abs() < 1e-5);
        }
    }

    #[test]
    fn test_non_empty_mesh_is_rejected() {
        let (volume, region) = single_voxel_volume();
        let mut mesh = SurfaceMesh::new();
        mesh.add_vertex(Vector3f::splat(1.0), 7, Vector3f::default());
        mesh.set_offset(Vector3i::splat(-3));

        let result = MarchingCubesExtractor::new(&volume, region, &mut mesh);
        assert!(matches!(result, Err(VoxError::MeshNotEmpty { vertex_count: 1 })));
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.offset(), Vector3i::splat(-3));
    }

    #[test]
    fn test_face_voxel_normals_follow_wrap_mode() {
        // Solid voxel on the x = 0 face; the stencil at x = 0 reads x = -1.
        let region = Region::from_coords(0, 0, 0, 7, 7, 7).unwrap();
        let mut volume = DenseVolume::<u8>::new(region);
        volume.set_voxel_at(Vector3i::new(0, 4, 4), 200).unwrap();

        // The crossing on the +y edge, 0.365 from the solid voxel.
        let plus_y = |mesh: &SurfaceMesh<u8>| {
            *mesh
                .vertices()
                .iter()
                .find(|v| (v.position - Vector3f::new(0.0, 4.365, 4.0)).length() < 1e-4)
                .unwrap()
        };

        let clamped = extract_marching_cubes_mesh(&volume, region).unwrap();
        let bordered =
            extract_with_wrap_mode(&volume, region, DefaultController::new(), WrapMode::Border(0))
                .unwrap();
        assert_eq!(clamped.vertex_count(), 5);
        assert_eq!(bordered.vertex_count(), 5);
        assert_eq!(clamped.indices(), bordered.indices());

        // Clamping repeats the solid voxel at x = -1, so f(1) - f(-1) tilts the normal along +x.
        let n = plus_y(&clamped).normal;
        assert!(n.x > 0.8 && n.y > 0.4, "clamped normal {:?}", n);

        // An empty border cancels the x difference and leaves a pure +y normal.
        let n = plus_y(&bordered).normal;
        assert!(n.x.abs() < 1e-5 && (n.y - 1.0).abs() < 1e-5, "border normal {:?}", n);
    }

    #[test]
    fn test_nan_corner_is_outside_for_classification_and_material() {
        let region = Region::from_coords(0, 0, 0, 11, 11, 11).unwrap();
        let mut volume = DenseVolume::<f32>::filled(region, -1.0);
        volume.set_voxel_at(Vector3i::new(5, 5, 5), f32::NAN).unwrap();
        volume.set_voxel_at(Vector3i::new(6, 5, 5), 1.0).unwrap();

        let mesh = extract_marching_cubes_mesh(&volume, region).unwrap();

        // Only the voxel at 1.0 is solid: one crossing on each of its six edges.
        assert_eq!(mesh.vertex_count(), 6);
        for v in mesh.vertices() {
            assert_eq!(v.material, 1.0);
        }
    }

    #[test]
    fn test_shared_edges_are_not_duplicated() {
        // A 2x2x2 solid block in the middle of the volume.
        let region = Region::from_coords(0, 0, 0, 7, 7, 7).unwrap();
        let volume = DenseVolume::from_fn(region, |p| {
            let inside = (3..=4).contains(&p.x) && (3..=4).contains(&p.y) && (3..=4).contains(&p.z);
            if inside { 255u8 } else { 0 }
        });
        let mesh = extract_marching_cubes_mesh(&volume, region).unwrap();

        let positions: Vec<_> = mesh.vertices().iter().map(|v| v.position).collect();
        for (i, a) in positions.iter().enumerate() {
            for b in &positions[i + 1..] {
                assert!((*a - *b).length() > 1e-4, "duplicate vertex at {:?}", a);
            }
        }

        // Closed surface: every edge is used by exactly two triangles.
        let mut edges = std::collections::HashMap::new();
        for [a, b, c] in mesh.triangles() {
            for (p, q) in [(a, b), (b, c), (c, a)] {
                *edges.entry((p.min(q), p.max(q))).or_insert(0) += 1;
            }
        }
        assert!(edges.values().all(|&n| n == 2));
    }
}
