use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Transform, UnitVector, Vector, DIM};
use crate::shape::{Plane, TriMesh};
use na::RealField;
use rand::Rng;

/// A source of cutting planes.
///
/// The plane returned for a fragment is expected to be expressed in world-space, and `bounds`
/// is the world-space AABB of the fragment being sliced.
///
/// Any `FnMut(&Aabb) -> Plane` closure is a `PlaneSampler`, which is convenient to slice with
/// predetermined planes.
pub trait PlaneSampler {
    /// Returns a cutting plane for a fragment bounded by `bounds`.
    fn sample_plane(&mut self, bounds: &Aabb) -> Plane;
}

impl<F: FnMut(&Aabb) -> Plane> PlaneSampler for F {
    fn sample_plane(&mut self, bounds: &Aabb) -> Plane {
        self(bounds)
    }
}

/// Samples planes passing through a uniformly random point of the bounds, with a normal
/// uniformly distributed over the unit sphere.
#[derive(Clone, Debug)]
pub struct RandomPlaneSampler<R> {
    rng: R,
}

impl<R: Rng> RandomPlaneSampler<R> {
    /// Creates a sampler drawing its randomness from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PlaneSampler for RandomPlaneSampler<R> {
    fn sample_plane(&mut self, bounds: &Aabb) -> Plane {
        let point = random_point_in_aabb(&mut self.rng, bounds);
        let normal = random_unit_vector(&mut self.rng);
        Plane::from_unit_normal(normal, &point)
    }
}

/// A point uniformly distributed inside `aabb`.
///
/// Each coordinate is sampled independently. A zero-sized axis yields its only valid
/// coordinate, and an invalid or non-finite axis yields the coordinate of the AABB center, so
/// this never panics.
pub fn random_point_in_aabb<R: Rng + ?Sized>(rng: &mut R, aabb: &Aabb) -> Point<Real> {
    let mut result = aabb.center();

    for i in 0..DIM {
        let (min, max) = (aabb.mins[i], aabb.maxs[i]);

        if min.is_finite() && max.is_finite() && min <= max {
            result[i] = rng.gen_range(min..=max);
        }
    }

    result
}

/// A unit vector uniformly distributed over the unit sphere.
///
/// The height is uniform in `[-1, 1]` and the azimuth is uniform in `[0, 2π)`, which gives a
/// uniform distribution over the sphere (Archimedes' hat-box theorem).
pub fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> UnitVector<Real> {
    let z: Real = rng.gen_range(-1.0..=1.0);
    let azimuth: Real = rng.gen_range(0.0..Real::two_pi());
    let radius = (1.0 - z * z).max(0.0).sqrt();
    let dir = Vector::new(radius * azimuth.cos(), radius * azimuth.sin(), z);

    UnitVector::new_normalize(dir)
}

/// Generates a random cutting plane for `mesh` placed in world-space with `transform`.
///
/// The plane passes through a random point of the world-space AABB of the mesh and has a
/// uniformly random orientation.
pub fn generate_cutting_plane<R: Rng + ?Sized>(
    mesh: &TriMesh,
    transform: &Transform,
    rng: &mut R,
) -> Plane {
    let bounds = mesh.aabb(transform);
    let point = random_point_in_aabb(rng, &bounds);
    Plane::from_unit_normal(random_unit_vector(rng), &point)
}
