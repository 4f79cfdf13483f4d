use crate::bounding_volume::Aabb;
use crate::math::{Real, Transform, Vector};
use crate::shape::TriMesh;

/// A piece of a fractured object.
///
/// A fragment is a triangle mesh expressed in the local frame of `transform`. Fragments created
/// by a [`Slicer`](crate::fracture::Slicer) keep the transform of their parent and record the
/// separation impulse the host should hand to its physics engine.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    /// The geometry of this fragment.
    ///
    /// `None` if the host object has no geometry attached. Such a fragment cannot be sliced.
    pub mesh: Option<TriMesh>,
    /// The local-to-world transform of this fragment.
    pub transform: Transform,
    /// A human-readable name, suffixed with `_pos` or `_neg` at each slice.
    pub name: String,
    /// The impulse applied to this fragment when it was created.
    ///
    /// Zero for a fragment that was not produced by slicing.
    pub impulse: Vector<Real>,
}

impl Fragment {
    /// Creates a fragment from a mesh and its transform.
    pub fn new(mesh: TriMesh, transform: Transform) -> Self {
        Self {
            mesh: Some(mesh),
            transform,
            name: String::new(),
            impulse: Vector::zeros(),
        }
    }

    /// Creates a fragment with no geometry attached.
    pub fn without_geometry(transform: Transform) -> Self {
        Self {
            mesh: None,
            transform,
            name: String::new(),
            impulse: Vector::zeros(),
        }
    }

    /// Returns `self` with the given name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Does this fragment have a mesh?
    #[inline]
    pub fn has_geometry(&self) -> bool {
        self.mesh.is_some()
    }

    /// The number of triangles of this fragment's mesh, zero if it has none.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.mesh.as_ref().map_or(0, TriMesh::num_triangles)
    }

    /// The world-space AABB of this fragment's mesh.
    pub fn world_aabb(&self) -> Option<Aabb> {
        self.mesh.as_ref().map(|mesh| mesh.aabb(&self.transform))
    }
}
