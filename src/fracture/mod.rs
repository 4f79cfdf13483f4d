//! Recursive fracturing of triangle meshes.
//!
//! The pipeline has two stages:
//!
//! * A [`Slicer`] turns one [`Fragment`] into two. The default [`PlaneSlicer`] samples a random
//!   cutting plane inside the fragment's bounds with a [`PlaneSampler`] and clips the fragment's
//!   mesh with [`TriMesh::split_by_plane`](crate::shape::TriMesh::split_by_plane).
//! * [`slice_into_pieces`] drives a slicer until the requested number of pieces is reached,
//!   splitting the number of pieces each fragment still owes between its two children.
//!
//! Deciding how many pieces to request is left to the caller. [`ImpactThresholds`] maps a
//! collision impulse magnitude to a piece count.

pub use self::fragment::Fragment;
pub use self::plane_sampler::{
    generate_cutting_plane, random_point_in_aabb, random_unit_vector, PlaneSampler,
    RandomPlaneSampler,
};
#[cfg(feature = "parallel")]
pub use self::scheduler::slice_into_pieces_parallel;
pub use self::scheduler::{slice_into_pieces, split_piece_count};
pub use self::slicer::{PlaneSlicer, SliceError, SliceOptions, SlicedFragments, Slicer};
pub use self::trigger::{ImpactThresholds, ImpactThresholdsError, SliceRequest};

mod fragment;
mod plane_sampler;
mod scheduler;
mod slicer;
mod trigger;
