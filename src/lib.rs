/*!
fracture3d
==========

**fracture3d** is a 3-dimensional mesh fracturing library written with
the rust programming language.

It splits triangle meshes by arbitrary cutting planes, clipping every
triangle that straddles the plane, and recursively re-slices the resulting
fragments until a requested number of pieces is reached.

```rust
# #[cfg(feature = "f32")] {
use fracture3d::fracture::{slice_into_pieces, Fragment, PlaneSlicer, RandomPlaneSampler};
use fracture3d::math::{Point, Transform};
use fracture3d::shape::TriMesh;
use rand::SeedableRng;

let mesh = TriMesh::new(
    vec![
        Point::new(-1.0, -1.0, 0.0),
        Point::new(1.0, -1.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
    ],
    vec![[0, 1, 2]],
)
.unwrap();

let sampler = RandomPlaneSampler::new(rand::rngs::StdRng::seed_from_u64(42));
let mut slicer = PlaneSlicer::new(sampler);
let pieces = slice_into_pieces(Fragment::new(mesh, Transform::identity()), 4, &mut slicer);
assert_eq!(pieces.len(), 4);
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;
pub extern crate rand;

pub mod bounding_volume;
pub mod fracture;
pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub type Real = f64;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub type Real = f32;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use crate::utils::Transform;
    pub use na::{Isometry3, Point3, UnitVector3, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The rigid transformation type.
    pub use Isometry3 as Isometry;
}
