use fracture3d::fracture::{
    slice_into_pieces, Fragment, ImpactThresholds, PlaneSlicer, RandomPlaneSampler,
};
use fracture3d::math::{Isometry, Point, Transform, Vector};
use fracture3d::shape::TriMesh;
use rand::SeedableRng;
use rand_isaac::IsaacRng;

fn cube(half_side: f32) -> TriMesh {
    let h = half_side;
    let points = vec![
        Point::new(-h, -h, -h),
        Point::new(h, -h, -h),
        Point::new(h, h, -h),
        Point::new(-h, h, -h),
        Point::new(-h, -h, h),
        Point::new(h, -h, h),
        Point::new(h, h, h),
        Point::new(-h, h, h),
    ];
    let indices = vec![
        [0, 2, 1],
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

fn main() {
    let transform = Transform::new(
        Isometry::new(Vector::new(0.0, 3.0, 0.0), Vector::new(0.0, 0.5, 0.0)),
        Vector::new(1.0, 2.0, 1.0),
    );
    let fragment = Fragment::new(cube(0.5), transform).with_name("crate");
    let thresholds = ImpactThresholds::default();
    let mut slicer = PlaneSlicer::new(RandomPlaneSampler::new(IsaacRng::seed_from_u64(0)));

    for intensity in [2.0, 12.0, 40.0] {
        let request = thresholds.request_for_intensity(intensity);
        let pieces = slice_into_pieces(fragment.clone(), request.pieces, &mut slicer);

        println!(
            "Impact of intensity {}: {} pieces requested, {} obtained.",
            intensity,
            request.pieces,
            pieces.len()
        );

        for piece in &pieces {
            let center = piece
                .world_aabb()
                .map_or(Point::origin(), |aabb| aabb.center());
            println!(
                "  {:<24} {:>3} triangles, center ({:.2}, {:.2}, {:.2}), impulse {:.2}",
                piece.name,
                piece.num_triangles(),
                center.x,
                center.y,
                center.z,
                piece.impulse.norm()
            );
        }
    }
}
