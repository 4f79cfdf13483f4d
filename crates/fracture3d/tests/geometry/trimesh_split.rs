use super::common::{build_cube, skewed_transform};
use approx::assert_relative_eq;
use fracture3d::fracture::random_unit_vector;
use fracture3d::math::{Point, Real, Transform, Vector};
use fracture3d::shape::{Plane, TriMesh};
use rand::{Rng, SeedableRng};
use rand_isaac::IsaacRng;

const EPS: Real = 1.0e-4;

#[test]
fn trimesh_split_sides_are_consistent() {
    let mesh = build_cube();
    let transform = skewed_transform();
    let mut rng = IsaacRng::seed_from_u64(0);
    let world_center = transform.transform_point(&Point::origin());

    for _ in 0..100 {
        let offset = Vector::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        let plane = Plane::from_unit_normal(random_unit_vector(&mut rng), &(world_center + offset));
        let split = mesh.split_by_plane(&transform, &plane);

        for pt in split.positive.vertices() {
            let world = transform.transform_point(pt);
            assert!(plane.signed_distance(&world) >= -EPS);
        }

        for pt in split.negative.vertices() {
            let world = transform.transform_point(pt);
            assert!(plane.signed_distance(&world) <= EPS);
        }
    }
}

#[test]
fn trimesh_split_conserves_area() {
    let mesh = build_cube();
    let transform = skewed_transform();
    let mut rng = IsaacRng::seed_from_u64(1);

    for _ in 0..50 {
        let plane = Plane::from_unit_normal(
            random_unit_vector(&mut rng),
            &transform.transform_point(&Point::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            )),
        );
        let split = mesh.split_by_plane(&transform, &plane);

        assert!(
            split.positive.num_triangles() + split.negative.num_triangles()
                >= mesh.num_triangles()
        );
        assert_relative_eq!(
            split.positive.area() + split.negative.area(),
            mesh.area(),
            epsilon = 1.0e-2
        );
    }
}

#[test]
fn trimesh_split_plane_outside_on_positive_side() {
    let mesh = build_cube();
    let transform = skewed_transform();
    let bounds = mesh.aabb(&transform);
    // The whole mesh is below this plane.
    let plane = Plane::new(Vector::x(), &(bounds.maxs + Vector::x())).unwrap();
    let split = mesh.split_by_plane(&transform, &plane);

    assert!(split.positive.is_empty());
    assert_eq!(split.negative.num_triangles(), mesh.num_triangles());

    // Unmodified triangles, up to the round-trip through world-space.
    for (original, copy) in mesh.triangles().zip(split.negative.triangles()) {
        assert_relative_eq!(original.a, copy.a, epsilon = EPS);
        assert_relative_eq!(original.b, copy.b, epsilon = EPS);
        assert_relative_eq!(original.c, copy.c, epsilon = EPS);
    }
}

#[test]
fn trimesh_split_face_on_plane_goes_negative() {
    let mesh = build_cube();
    // The two triangles of the z = 1 face lie on this plane, the rest is below it.
    let plane = Plane::new(Vector::z(), &Point::new(0.0, 0.0, 1.0)).unwrap();
    let split = mesh.local_split_by_plane(&plane);

    assert!(split.positive.is_empty());
    assert_eq!(split.negative.num_triangles(), 12);

    // With the flipped plane, only the face lying on the plane stays negative.
    let split = mesh.local_split_by_plane(&plane.flipped());
    assert_eq!(split.positive.num_triangles(), 10);
    assert_eq!(split.negative.num_triangles(), 2);
}

#[test]
fn trimesh_split_outputs_triangle_soups() {
    let mesh = build_cube();
    let plane = Plane::new(Vector::new(1.0, 1.0, 1.0), &Point::new(0.1, 0.0, 0.0)).unwrap();
    let split = mesh.local_split_by_plane(&plane);

    for half in [&split.positive, &split.negative] {
        assert_eq!(half.vertices().len(), half.num_triangles() * 3);
        assert_eq!(half.normals().len(), half.vertices().len());

        for (i, idx) in half.indices().iter().enumerate() {
            let i = i as u32;
            assert_eq!(*idx, [3 * i, 3 * i + 1, 3 * i + 2]);
        }
    }
}

#[test]
fn trimesh_split_empty_mesh() {
    let mesh = TriMesh::default();
    let plane = Plane::new(Vector::y(), &Point::origin()).unwrap();
    let split = mesh.split_by_plane(&Transform::identity(), &plane);
    assert!(split.positive.is_empty());
    assert!(split.negative.is_empty());
}
