pub use self::split::{TriMeshSplit, TriangleSide, TriangleSplit};

mod split;
mod split_segment;
mod split_triangle;
mod split_trimesh;
