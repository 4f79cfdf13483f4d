use super::common::{build_cube, skewed_transform};
use fracture3d::bounding_volume::Aabb;
use fracture3d::fracture::{
    slice_into_pieces, Fragment, ImpactThresholds, PlaneSlicer, RandomPlaneSampler, SliceError,
    SlicedFragments, Slicer,
};
use fracture3d::math::{Transform, Vector};
use fracture3d::shape::Plane;
use rand::SeedableRng;
use rand_isaac::IsaacRng;

fn cube_fragment() -> Fragment {
    Fragment::new(build_cube(), skewed_transform()).with_name("cube")
}

fn random_slicer(seed: u64) -> PlaneSlicer<RandomPlaneSampler<IsaacRng>> {
    PlaneSlicer::new(RandomPlaneSampler::new(IsaacRng::seed_from_u64(seed)))
}

#[test]
fn fracture_single_piece_is_untouched() {
    let fragment = cube_fragment();
    let pieces = slice_into_pieces(fragment.clone(), 1, &mut random_slicer(0));
    assert_eq!(pieces, vec![fragment]);
}

#[test]
fn fracture_into_two_pieces() {
    let fragment = cube_fragment();
    let pieces = slice_into_pieces(fragment.clone(), 2, &mut random_slicer(1));

    assert_eq!(pieces.len(), 2);
    assert_eq!(pieces[0].name, "cube_pos");
    assert_eq!(pieces[1].name, "cube_neg");
    assert!(pieces.iter().all(|p| p.transform == fragment.transform));
    assert_eq!(pieces[0].impulse, -pieces[1].impulse);

    let num_triangles: usize = pieces.iter().map(Fragment::num_triangles).sum();
    assert!(num_triangles >= fragment.num_triangles());
}

#[test]
fn fracture_reaches_the_target_and_terminates() {
    for target in 1..=30 {
        let pieces = slice_into_pieces(cube_fragment(), target, &mut random_slicer(target as u64));
        assert_eq!(pieces.len(), target);
    }
}

#[test]
fn fracture_with_plane_outside_keeps_empty_fragments() {
    // Every plane lies beyond the bounds on the positive side.
    let mut slicer = PlaneSlicer::new(|bounds: &Aabb| {
        Plane::new(Vector::x(), &(bounds.maxs + Vector::x())).unwrap()
    });
    let fragment = cube_fragment();
    let pieces = slice_into_pieces(fragment.clone(), 4, &mut slicer);

    // The empty positive fragment still owes 2 pieces and gets sliced again.
    assert_eq!(pieces.len(), 4);
    let empty = pieces.iter().filter(|p| p.num_triangles() == 0).count();
    assert_eq!(empty, 3);
    assert!(pieces
        .iter()
        .any(|p| p.num_triangles() == fragment.num_triangles()));
}

#[test]
fn fracture_missing_geometry_mid_queue() {
    // Drop the geometry of every positive child of the root.
    let mut inner = random_slicer(7);
    let mut slicer = |fragment: &Fragment| -> Result<SlicedFragments, SliceError> {
        let mut pieces = inner.slice(fragment)?;
        if fragment.name == "cube" {
            pieces[0].mesh = None;
        }
        Ok(pieces)
    };

    let pieces = slice_into_pieces(cube_fragment(), 8, &mut slicer);

    // The positive child owed 4 pieces but is kept whole; the negative one yields 4.
    assert_eq!(pieces.len(), 5);
    assert_eq!(pieces.iter().filter(|p| !p.has_geometry()).count(), 1);
    assert_eq!(pieces[0].name, "cube_pos");
}

#[test]
fn fracture_without_geometry_is_terminal() {
    let fragment = Fragment::without_geometry(Transform::identity()).with_name("ghost");
    let pieces = slice_into_pieces(fragment.clone(), 9, &mut random_slicer(3));
    assert_eq!(pieces, vec![fragment]);
}

#[test]
fn fracture_from_impact_intensity() {
    let thresholds = ImpactThresholds::default();
    let request = thresholds.request_for_intensity(17.5);
    let pieces = slice_into_pieces(cube_fragment(), request.pieces, &mut random_slicer(11));
    assert_eq!(pieces.len(), 7);
}
