use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Transform, Vector, DEFAULT_EPSILON};
use crate::shape::Triangle;
use core::fmt;

/// Indicated an inconsistency while building a triangle mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriMeshBuilderError {
    /// A triangle references a vertex that does not exist.
    #[error("the triangle {triangle} references the vertex {index} but there are only {num_vertices} vertices.")]
    IndexOutOfBounds {
        /// The index of the faulty triangle.
        triangle: u32,
        /// The out-of-bounds vertex index.
        index: u32,
        /// The number of vertices of the mesh.
        num_vertices: usize,
    },
}

#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq)]
/// A triangle mesh.
///
/// Every fragment produced by the fracturing pipeline is a `TriMesh`. The mesh is allowed to
/// have no triangle at all: a plane missing a fragment yields an empty half.
///
/// Per-vertex normals and the local-space AABB are recomputed whenever a mesh is built. The
/// normal of a vertex is the normalized, area-weighted sum of the normals of the triangles
/// referencing it. For triangle soups, where no vertex is shared, this is the face normal.
pub struct TriMesh {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
    normals: Vec<Vector<Real>>,
    aabb: Aabb,
}

impl fmt::Debug for TriMesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriMesh")
            .field("num_vertices", &self.vertices.len())
            .field("num_triangles", &self.indices.len())
            .field("aabb", &self.aabb)
            .finish()
    }
}

impl Default for TriMesh {
    fn default() -> Self {
        Self::from_buffers_unchecked(Vec::new(), Vec::new())
    }
}

impl TriMesh {
    /// Creates a new triangle mesh from a vertex buffer and an index buffer.
    ///
    /// Fails if one of the indices is not smaller than the number of vertices.
    pub fn new(
        vertices: Vec<Point<Real>>,
        indices: Vec<[u32; 3]>,
    ) -> Result<Self, TriMeshBuilderError> {
        for (i, idx) in indices.iter().enumerate() {
            if let Some(bad) = idx.iter().find(|id| **id as usize >= vertices.len()) {
                return Err(TriMeshBuilderError::IndexOutOfBounds {
                    triangle: i as u32,
                    index: *bad,
                    num_vertices: vertices.len(),
                });
            }
        }

        Ok(Self::from_buffers_unchecked(vertices, indices))
    }

    /// Builds the mesh without validating the index buffer.
    pub(crate) fn from_buffers_unchecked(
        vertices: Vec<Point<Real>>,
        indices: Vec<[u32; 3]>,
    ) -> Self {
        let normals = compute_vertex_normals(&vertices, &indices);
        let aabb = if vertices.is_empty() {
            Aabb::new(Point::origin(), Point::origin())
        } else {
            Aabb::from_points(vertices.iter().copied())
        };

        Self {
            vertices,
            indices,
            normals,
            aabb,
        }
    }

    /// The vertex buffer of this mesh.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The index buffer of this mesh.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The per-vertex normals of this mesh, one per vertex.
    ///
    /// A vertex only touching degenerate triangles has a zero normal.
    #[inline]
    pub fn normals(&self) -> &[Vector<Real>] {
        &self.normals
    }

    /// The number of triangles of this mesh.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// Does this mesh have no triangle?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The local-space AABB of this mesh.
    ///
    /// A mesh without vertices has a zero-sized AABB at the origin.
    #[inline]
    pub fn local_aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// The world-space AABB of this mesh placed with `transform`.
    #[inline]
    pub fn aabb(&self, transform: &Transform) -> Aabb {
        self.aabb.transform_by(transform)
    }

    /// An iterator through all the triangles of this mesh.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = Triangle> + '_ {
        self.indices.iter().map(move |idx| {
            Triangle::new(
                self.vertices[idx[0] as usize],
                self.vertices[idx[1] as usize],
                self.vertices[idx[2] as usize],
            )
        })
    }

    /// The total area of the triangles of this mesh, in its local frame.
    pub fn area(&self) -> Real {
        self.triangles().map(|tri| tri.area()).sum()
    }
}

fn compute_vertex_normals(vertices: &[Point<Real>], indices: &[[u32; 3]]) -> Vec<Vector<Real>> {
    let mut normals = vec![Vector::zeros(); vertices.len()];

    for idx in indices {
        let tri = Triangle::new(
            vertices[idx[0] as usize],
            vertices[idx[1] as usize],
            vertices[idx[2] as usize],
        );
        // Not normalized so larger faces weigh more.
        let scaled_normal = tri.scaled_normal();

        for id in idx {
            normals[*id as usize] += scaled_normal;
        }
    }

    for normal in &mut normals {
        *normal = normal
            .try_normalize(DEFAULT_EPSILON)
            .unwrap_or_else(Vector::zeros);
    }

    normals
}
