//! Non-persistent geometric queries.
//!
//! The queries of this module split shapes by a [`Plane`](crate::shape::Plane):
//!
//! * [`Plane::classify_triangle`](crate::shape::Plane::classify_triangle) tells on which side of
//!   a plane a triangle lies.
//! * [`Segment::plane_intersection`](crate::shape::Segment::plane_intersection) computes where an
//!   edge crosses a plane.
//! * [`Triangle::split_by_plane`](crate::shape::Triangle::split_by_plane) clips one triangle.
//! * [`TriMesh::split_by_plane`](crate::shape::TriMesh::split_by_plane) clips a whole mesh into
//!   two triangle soups.

pub use self::split::{TriMeshSplit, TriangleSide, TriangleSplit};

mod split;
