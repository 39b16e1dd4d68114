//! Indexed triangle meshes produced by surface extraction.

use vox_core::{Result, Vector3f, Vector3i, VoxError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A triangle represented by three vertex positions.
pub type Triangle = [Vector3f; 3];

/// A mesh vertex: position, normal and a material payload.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SurfaceVertex<M> {
    /// Position relative to the owning mesh's offset.
    pub position: Vector3f,
    /// Unit surface normal pointing out of the solid (zero if undefined).
    pub normal: Vector3f,
    /// Material copied from the voxel data.
    pub material: M,
}

/// A growable indexed triangle mesh.
///
/// Vertices are appended with [`add_vertex`](Self::add_vertex) and triangles with
/// [`add_triangle`](Self::add_triangle); nothing is removed individually.
/// Vertex positions are relative to [`offset`](Self::offset).
///
/// Every index refers to an existing vertex and the index list holds whole
/// triangles; deserialization checks both.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SurfaceMeshRepr<M>"))]
pub struct SurfaceMesh<M> {
    vertices: Vec<SurfaceVertex<M>>,
    indices: Vec<u32>,
    offset: Vector3i,
}

/// Unchecked wire form of [`SurfaceMesh`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct SurfaceMeshRepr<M> {
    vertices: Vec<SurfaceVertex<M>>,
    indices: Vec<u32>,
    offset: Vector3i,
}

#[cfg(feature = "serde")]
impl<M> TryFrom<SurfaceMeshRepr<M>> for SurfaceMesh<M> {
    type Error = VoxError;

    fn try_from(repr: SurfaceMeshRepr<M>) -> Result<Self> {
        if repr.indices.len() % 3 != 0 {
            return Err(VoxError::IncompleteTriangle {
                index_count: repr.indices.len(),
            });
        }
        let vertex_count = u32::try_from(repr.vertices.len()).unwrap_or(u32::MAX);
        if let Some(&index) = repr.indices.iter().find(|&&i| i >= vertex_count) {
            return Err(VoxError::InvalidMeshReference {
                index,
                vertex_count,
            });
        }
        Ok(Self {
            vertices: repr.vertices,
            indices: repr.indices,
            offset: repr.offset,
        })
    }
}

impl<M> Default for SurfaceMesh<M> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            offset: Vector3i::default(),
        }
    }
}

impl<M: Copy> SurfaceMesh<M> {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mesh with room for the given number of vertices and triangles.
    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(triangles * 3),
            offset: Vector3i::default(),
        }
    }

    /// Append a vertex and return its index.
    #[inline]
    pub fn add_vertex(&mut self, position: Vector3f, material: M, normal: Vector3f) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(SurfaceVertex {
            position,
            normal,
            material,
        });
        index
    }

    /// Append a triangle referencing three existing vertices.
    ///
    /// # Errors
    /// Returns `InvalidMeshReference` if any index is not below
    /// [`vertex_count`](Self::vertex_count). The mesh is left unchanged.
    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) -> Result<()> {
        let vertex_count = self.vertex_count();
        for index in [i0, i1, i2] {
            if index >= vertex_count {
                return Err(VoxError::InvalidMeshReference {
                    index,
                    vertex_count,
                });
            }
        }
        self.indices.extend_from_slice(&[i0, i1, i2]);
        Ok(())
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of indices (three per triangle).
    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// True if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The vertex at `index`.
    #[inline]
    pub fn vertex(&self, index: u32) -> Option<&SurfaceVertex<M>> {
        self.vertices.get(index as usize)
    }

    /// The vertex indices of triangle `index`.
    #[inline]
    pub fn triangle(&self, index: usize) -> Option<[u32; 3]> {
        let base = index.checked_mul(3)?;
        let tri = self.indices.get(base..base + 3)?;
        Some([tri[0], tri[1], tri[2]])
    }

    /// The vertex positions of triangle `index`.
    pub fn triangle_positions(&self, index: usize) -> Option<Triangle> {
        let [a, b, c] = self.triangle(index)?;
        Some([
            self.vertices[a as usize].position,
            self.vertices[b as usize].position,
            self.vertices[c as usize].position,
        ])
    }

    /// All vertices.
    #[inline]
    pub fn vertices(&self) -> &[SurfaceVertex<M>] {
        &self.vertices
    }

    /// All indices, three per triangle.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Iterate over triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Offset added to vertex positions to obtain volume-space positions.
    #[inline]
    pub fn offset(&self) -> Vector3i {
        self.offset
    }

    /// Set the offset.
    #[inline]
    pub fn set_offset(&mut self, offset: Vector3i) {
        self.offset = offset;
    }

    /// Position of vertex `index` in volume space (position plus offset).
    pub fn world_position(&self, index: u32) -> Option<Vector3f> {
        self.vertex(index)
            .map(|v| v.position + self.offset.as_f32())
    }

    /// Remove all vertices and triangles. The offset is kept.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    /// Drop vertices that no triangle references, remapping indices.
    ///
    /// Returns the number of vertices removed.
    pub fn remove_unused_vertices(&mut self) -> usize {
        let mut remap = vec![u32::MAX; self.vertices.len()];
        for &index in &self.indices {
            remap[index as usize] = 0;
        }

        let mut kept = Vec::with_capacity(self.vertices.len());
        for (old, vertex) in self.vertices.iter().enumerate() {
            if remap[old] != u32::MAX {
                remap[old] = kept.len() as u32;
                kept.push(*vertex);
            }
        }

        for index in &mut self.indices {
            *index = remap[*index as usize];
        }

        let removed = self.vertices.len() - kept.len();
        self.vertices = kept;
        removed
    }
}

/// Mesh statistics after extraction.
#[derive(Debug, Clone, Copy)]
pub struct MeshStats {
    /// Total number of triangles.
    pub triangle_count: usize,
    /// Number of distinct vertices.
    pub vertex_count: usize,
    /// Sum of triangle areas.
    pub surface_area: f32,
    /// Bounding box minimum (mesh-relative positions, zero for an empty mesh).
    pub bbox_min: Vector3f,
    /// Bounding box maximum (mesh-relative positions, zero for an empty mesh).
    pub bbox_max: Vector3f,
}

impl MeshStats {
    /// Compute statistics for a mesh.
    pub fn from_mesh<M: Copy>(mesh: &SurfaceMesh<M>) -> Self {
        let mut surface_area = 0.0;
        let (bbox_min, bbox_max) = match mesh.vertices().split_first() {
            Some((first, rest)) => rest.iter().fold(
                (first.position, first.position),
                |(lo, hi), v| (lo.min(v.position), hi.max(v.position)),
            ),
            None => (Vector3f::default(), Vector3f::default()),
        };

        for i in 0..mesh.triangle_count() {
            if let Some([a, b, c]) = mesh.triangle_positions(i) {
                surface_area += (b - a).cross(c - a).length() * 0.5;
            }
        }

        Self {
            triangle_count: mesh.triangle_count(),
            vertex_count: mesh.vertices().len(),
            surface_area,
            bbox_min,
            bbox_max,
        }
    }
}
