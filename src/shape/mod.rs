//! Shapes manipulated by the fracturing pipeline.

pub use self::plane::Plane;
pub use self::segment::Segment;
pub use self::triangle::Triangle;
pub use self::trimesh::{TriMesh, TriMeshBuilderError};
pub use self::trimesh_buffers::TriMeshBuffers;

mod plane;
mod segment;
mod triangle;
mod trimesh;
mod trimesh_buffers;
