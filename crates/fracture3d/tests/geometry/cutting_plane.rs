use super::common::{build_cube, skewed_transform};
use approx::assert_relative_eq;
use fracture3d::fracture::generate_cutting_plane;
use fracture3d::math::{Point, Real, Transform};
use fracture3d::shape::TriMesh;
use rand::SeedableRng;
use rand_isaac::IsaacRng;

#[test]
fn cutting_plane_goes_through_the_bounds() {
    let mesh = build_cube();
    let transform = skewed_transform();
    let bounds = mesh.aabb(&transform);
    let mut rng = IsaacRng::seed_from_u64(42);

    for _ in 0..200 {
        let plane = generate_cutting_plane(&mesh, &transform, &mut rng);
        assert_relative_eq!(plane.normal.norm(), 1.0, epsilon = 1.0e-5);

        let distances: Vec<Real> = bounds
            .vertices()
            .iter()
            .map(|pt| plane.signed_distance(pt))
            .collect();
        let min = distances.iter().copied().fold(Real::MAX, Real::min);
        let max = distances.iter().copied().fold(-Real::MAX, Real::max);
        assert!(min <= 1.0e-4 && max >= -1.0e-4);
    }
}

#[test]
fn cutting_plane_for_degenerate_mesh() {
    // A single triangle collapsed to a point.
    let pt = Point::new(1.0, 2.0, 3.0);
    let mesh = TriMesh::new(vec![pt, pt, pt], vec![[0, 1, 2]]).unwrap();
    let transform = Transform::identity();
    let mut rng = IsaacRng::seed_from_u64(0);

    for _ in 0..20 {
        let plane = generate_cutting_plane(&mesh, &transform, &mut rng);
        assert!(plane.bias.is_finite());
        assert_relative_eq!(plane.signed_distance(&pt), 0.0, epsilon = 1.0e-4);
    }
}

#[test]
fn cutting_plane_for_empty_mesh() {
    let mut rng = IsaacRng::seed_from_u64(3);
    let plane = generate_cutting_plane(&TriMesh::default(), &skewed_transform(), &mut rng);
    assert!(plane.normal.iter().all(|x| x.is_finite()));
}
