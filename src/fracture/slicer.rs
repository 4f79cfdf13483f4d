use crate::fracture::{Fragment, PlaneSampler};
use crate::math::Real;
use crate::query::TriMeshSplit;
use crate::shape::Plane;
use smallvec::{smallvec, SmallVec};

/// The fragments produced by one slicing operation.
///
/// A successful slice yields exactly two fragments: the positive one first, then the negative
/// one.
pub type SlicedFragments = SmallVec<[Fragment; 2]>;

/// Errors preventing a fragment from being sliced further.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum SliceError {
    /// The fragment has no geometry attached.
    #[error("the fragment has no geometry to slice.")]
    MissingGeometry,
    /// The slicer produced something else than two fragments.
    #[error("slicing produced {pieces} fragments instead of 2.")]
    UnexpectedSplitShape {
        /// The number of fragments that were produced.
        pieces: usize,
    },
}

/// An operation turning a fragment into two.
///
/// This is the seam between [`slice_into_pieces`](crate::fracture::slice_into_pieces) and the
/// geometry: [`PlaneSlicer`] is the default implementation, and any
/// `FnMut(&Fragment) -> Result<SlicedFragments, SliceError>` closure can stand in for it, for
/// example to let a host veto some slices.
pub trait Slicer {
    /// Slices `fragment` into two new fragments.
    ///
    /// On success the original fragment is meant to be discarded by the caller.
    fn slice(&mut self, fragment: &Fragment) -> Result<SlicedFragments, SliceError>;
}

impl<F> Slicer for F
where
    F: FnMut(&Fragment) -> Result<SlicedFragments, SliceError>,
{
    fn slice(&mut self, fragment: &Fragment) -> Result<SlicedFragments, SliceError> {
        self(fragment)
    }
}

/// Options of a [`PlaneSlicer`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SliceOptions {
    /// The magnitude of the impulse pushing the two halves apart along the plane normal.
    ///
    /// Set to zero to disable the separation impulse.
    pub impulse: Real,
}

impl Default for SliceOptions {
    fn default() -> Self {
        Self { impulse: 4.0 }
    }
}

/// Slices fragments with planes drawn from a [`PlaneSampler`].
#[derive(Clone, Debug)]
pub struct PlaneSlicer<S> {
    sampler: S,
    options: SliceOptions,
}

impl<S: PlaneSampler> PlaneSlicer<S> {
    /// Creates a slicer with default options.
    pub fn new(sampler: S) -> Self {
        Self::with_options(sampler, SliceOptions::default())
    }

    /// Creates a slicer with the given options.
    pub fn with_options(sampler: S, options: SliceOptions) -> Self {
        Self { sampler, options }
    }

    /// Slices `fragment` with the world-space `plane`.
    ///
    /// Returns the positive then the negative fragment. Both keep the transform of `fragment`
    /// and receive opposite impulses along the plane normal. Either may have an empty mesh.
    pub fn slice_with_plane(
        &self,
        fragment: &Fragment,
        plane: &Plane,
    ) -> Result<[Fragment; 2], SliceError> {
        let mesh = fragment.mesh.as_ref().ok_or(SliceError::MissingGeometry)?;
        let TriMeshSplit { positive, negative } = mesh.split_by_plane(&fragment.transform, plane);

        log::debug!(
            "Sliced `{}` ({} triangles) into {} positive and {} negative triangles.",
            fragment.name,
            mesh.num_triangles(),
            positive.num_triangles(),
            negative.num_triangles()
        );

        let impulse = plane.normal.into_inner() * self.options.impulse;
        let positive = Fragment {
            mesh: Some(positive),
            transform: fragment.transform,
            name: format!("{}_pos", fragment.name),
            impulse,
        };
        let negative = Fragment {
            mesh: Some(negative),
            transform: fragment.transform,
            name: format!("{}_neg", fragment.name),
            impulse: -impulse,
        };

        Ok([positive, negative])
    }
}

impl<S: PlaneSampler> Slicer for PlaneSlicer<S> {
    fn slice(&mut self, fragment: &Fragment) -> Result<SlicedFragments, SliceError> {
        let bounds = fragment
            .world_aabb()
            .ok_or(SliceError::MissingGeometry)?;
        let plane = self.sampler.sample_plane(&bounds);
        log::trace!(
            "Cutting plane for `{}`: normal {:?}, bias {}.",
            fragment.name,
            plane.normal,
            plane.bias
        );

        let [positive, negative] = self.slice_with_plane(fragment, &plane)?;
        Ok(smallvec![positive, negative])
    }
}
