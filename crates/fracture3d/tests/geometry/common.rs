use fracture3d::math::{Isometry, Point, Transform, Vector};
use fracture3d::shape::TriMesh;

/// An axis-aligned cube of side 2 centered at the origin, with outward ccw faces.
pub fn build_cube() -> TriMesh {
    let points = vec![
        Point::new(-1.0, -1.0, -1.0),
        Point::new(1.0, -1.0, -1.0),
        Point::new(1.0, 1.0, -1.0),
        Point::new(-1.0, 1.0, -1.0),
        Point::new(-1.0, -1.0, 1.0),
        Point::new(1.0, -1.0, 1.0),
        Point::new(1.0, 1.0, 1.0),
        Point::new(-1.0, 1.0, 1.0),
    ];

    let indices = vec![
        [0u32, 2, 1],
        [0, 3, 2],
        [4, 5, 6],
        [4, 6, 7],
        [0, 1, 5],
        [0, 5, 4],
        [3, 7, 6],
        [3, 6, 2],
        [0, 4, 7],
        [0, 7, 3],
        [1, 2, 6],
        [1, 6, 5],
    ];

    TriMesh::new(points, indices).unwrap()
}

/// A transform with a rotation, a translation and a non-uniform scale.
pub fn skewed_transform() -> Transform {
    Transform::new(
        Isometry::new(Vector::new(3.0, -1.0, 2.0), Vector::new(0.4, 0.9, -0.2)),
        Vector::new(1.5, 0.5, 2.0),
    )
}
