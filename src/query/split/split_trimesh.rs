use crate::math::Transform;
use crate::query::TriMeshSplit;
use crate::shape::{Plane, TriMesh, TriMeshBuffers};

impl TriMesh {
    /// Splits this mesh, placed in world-space with `transform`, by the world-space `plane`.
    ///
    /// Every triangle is mapped to world-space, classified and clipped against the plane (see
    /// [`Triangle::split_by_plane`](crate::shape::Triangle::split_by_plane)), then mapped back to
    /// the local frame of `transform`. Both resulting meshes are therefore meant to be placed with
    /// the same `transform` as `self`.
    ///
    /// The result is two triangle soups: vertices are never shared between triangles, and the
    /// cross-section along the plane is left open. Either half may be empty if the plane does
    /// not cross the mesh.
    pub fn split_by_plane(&self, transform: &Transform, plane: &Plane) -> TriMeshSplit {
        let mut positive = TriMeshBuffers::with_capacity(self.num_triangles());
        let mut negative = TriMeshBuffers::with_capacity(self.num_triangles());

        for tri in self.triangles() {
            let split = tri.transformed(transform).split_by_plane(plane);

            for piece in &split.positive {
                positive.push_triangle(piece, transform);
            }

            for piece in &split.negative {
                negative.push_triangle(piece, transform);
            }
        }

        TriMeshSplit {
            positive: positive.build(),
            negative: negative.build(),
        }
    }

    /// Splits this mesh by a plane expressed in its local frame.
    pub fn local_split_by_plane(&self, plane: &Plane) -> TriMeshSplit {
        self.split_by_plane(&Transform::identity(), plane)
    }
}
