//! Various unsorted geometrical and logical operators.

pub(crate) use self::inv::inv;
pub use self::transform::Transform;

mod inv;
mod transform;
