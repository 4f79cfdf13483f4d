use crate::math::{Point, Real, Transform};
use crate::shape::{TriMesh, Triangle};

/// A triangle mesh being built, one triangle at a time.
///
/// Each pushed triangle appends three fresh vertices: vertices are never welded, even when two
/// triangles share a position. This guarantees that every index stays smaller than the number
/// of vertices, so [`TriMeshBuffers::build`] never fails.
///
/// Indices are `u32`, so the buffers hold at most `u32::MAX + 1` vertices, that is
/// `(u32::MAX + 1) / 3` triangles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriMeshBuffers {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
}

impl TriMeshBuffers {
    /// Creates empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates empty buffers with room for `num_triangles` triangles.
    pub fn with_capacity(num_triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(num_triangles * 3),
            indices: Vec::with_capacity(num_triangles),
        }
    }

    /// Appends a triangle expressed in world-space, re-expressing its vertices in the local
    /// frame of `frame`.
    ///
    /// # Panics
    ///
    /// Panics if the new vertices cannot be addressed with `u32` indices.
    pub fn push_triangle(&mut self, tri: &Triangle, frame: &Transform) {
        self.push_local_triangle(&Triangle::new(
            frame.inverse_transform_point(&tri.a),
            frame.inverse_transform_point(&tri.b),
            frame.inverse_transform_point(&tri.c),
        ));
    }

    /// Appends a triangle already expressed in the local frame of the mesh being built.
    ///
    /// # Panics
    ///
    /// Panics if the new vertices cannot be addressed with `u32` indices.
    pub fn push_local_triangle(&mut self, tri: &Triangle) {
        let Some(base) = next_base_index(self.vertices.len()) else {
            panic!(
                "a triangle soup cannot hold more than {} vertices.",
                u64::from(u32::MAX) + 1
            );
        };
        self.vertices.extend_from_slice(&tri.vertices());
        self.indices.push([base, base + 1, base + 2]);
    }

    /// The number of triangles pushed so far.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// Has no triangle been pushed yet?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The vertices pushed so far.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The indices pushed so far.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// Turns these buffers into a finished mesh, with recomputed normals and bounds.
    pub fn build(self) -> TriMesh {
        TriMesh::from_buffers_unchecked(self.vertices, self.indices)
    }
}

/// The index of the first of three vertices appended after `num_vertices` existing ones, if
/// all three fit in `u32` indices.
fn next_base_index(num_vertices: usize) -> Option<u32> {
    let base = u32::try_from(num_vertices).ok()?;
    let _ = base.checked_add(2)?;
    Some(base)
}
