mod common;
mod cutting_plane;
mod fracture_scheduler;
mod trimesh_split;
