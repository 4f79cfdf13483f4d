use crate::shape::{TriMesh, Triangle};
use arrayvec::ArrayVec;

/// The position of a triangle relative to a plane.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TriangleSide {
    /// Every vertex has a signed distance `≤ 0`.
    ///
    /// A triangle lying exactly on the plane is classified as `Negative`.
    Negative,
    /// Every vertex has a signed distance `≥ 0`, and at least one is `> 0`.
    Positive,
    /// The triangle has vertices strictly on both sides of the plane.
    Straddling,
}

/// The result of splitting one triangle by a plane.
///
/// A triangle lying on one side of the plane ends up, unmodified, in the matching list. A
/// straddling triangle is clipped into one triangle on one side and two on the other side.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriangleSplit {
    /// The pieces lying on the positive half-space of the plane.
    pub positive: ArrayVec<Triangle, 2>,
    /// The pieces lying on the negative half-space of the plane.
    pub negative: ArrayVec<Triangle, 2>,
}

/// The result of splitting a triangle mesh by a plane.
///
/// Both halves always exist, but either may have no triangle. The cut is not capped: both
/// halves are open along the plane.
#[derive(Clone, Debug, PartialEq)]
pub struct TriMeshSplit {
    /// The triangle soup lying on the positive half-space of the plane.
    pub positive: TriMesh,
    /// The triangle soup lying on the negative half-space of the plane.
    pub negative: TriMesh,
}
