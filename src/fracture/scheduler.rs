use crate::fracture::{Fragment, SliceError, SlicedFragments, Slicer};
use std::collections::VecDeque;

/// Splits the number of pieces a fragment owes between its two children.
///
/// Returns `(required / 2, required - required / 2)`: both counts add up to `required`, and the
/// second one is never smaller than the first.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use fracture3d::fracture::split_piece_count;
///
/// assert_eq!(split_piece_count(2), (1, 1));
/// assert_eq!(split_piece_count(7), (3, 4));
/// # }
/// ```
#[inline]
pub fn split_piece_count(required: usize) -> (usize, usize) {
    let left = required / 2;
    (left, required - left)
}

/// What happens to a queue entry once processed.
enum Step {
    Terminal(Fragment),
    Split([(Fragment, usize); 2]),
}

fn advance<S: Slicer + ?Sized>(piece: Fragment, required: usize, slicer: &mut S) -> Step {
    if required <= 1 {
        return Step::Terminal(piece);
    }

    let result = slicer.slice(&piece).and_then(|pieces| {
        let num_pieces = pieces.len();
        into_pair(pieces).ok_or(SliceError::UnexpectedSplitShape { pieces: num_pieces })
    });

    match result {
        Ok([lhs, rhs]) => {
            let (left, right) = split_piece_count(required);
            Step::Split([(lhs, left), (rhs, right)])
        }
        Err(err) => {
            log::debug!(
                "Keeping `{}` as a single piece instead of {}: {}",
                piece.name,
                required,
                err
            );
            Step::Terminal(piece)
        }
    }
}

fn into_pair(pieces: SlicedFragments) -> Option<[Fragment; 2]> {
    if pieces.len() != 2 {
        return None;
    }

    let mut it = pieces.into_iter();
    Some([it.next()?, it.next()?])
}

/// Recursively slices `fragment` until `target_pieces` fragments are obtained.
///
/// The fragments are processed breadth-first. A fragment that still owes more than one piece is
/// handed to `slicer`; on success the pieces it owes are split between its two children with
/// [`split_piece_count`]. A fragment that cannot be sliced (see [`SliceError`]) is kept as is:
/// it is never retried, and the result then contains fewer than `target_pieces` fragments.
///
/// Returns between `1` and `max(target_pieces, 1)` terminal fragments. A `target_pieces` of
/// zero or one returns `fragment` unchanged.
pub fn slice_into_pieces<S: Slicer + ?Sized>(
    fragment: Fragment,
    target_pieces: usize,
    slicer: &mut S,
) -> Vec<Fragment> {
    let mut results = Vec::new();
    let mut queue = VecDeque::new();
    queue.push_back((fragment, target_pieces));

    while let Some((piece, required)) = queue.pop_front() {
        match advance(piece, required, slicer) {
            Step::Terminal(piece) => results.push(piece),
            Step::Split(children) => queue.extend(children),
        }
    }

    log::info!("Got {} pieces", results.len());
    results
}

/// Parallel version of [`slice_into_pieces`].
///
/// The fragments are processed one generation at a time, and the fragments of a generation are
/// sliced in parallel. Each slicing task gets its own slicer built by `make_slicer` from a
/// task index, unique for the whole call, so no random number generator is shared between
/// threads. The results come in the same order as with [`slice_into_pieces`].
#[cfg(feature = "parallel")]
pub fn slice_into_pieces_parallel<S, F>(
    fragment: Fragment,
    target_pieces: usize,
    make_slicer: F,
) -> Vec<Fragment>
where
    S: Slicer,
    F: Fn(usize) -> S + Sync,
{
    use rayon::prelude::*;

    let mut results = Vec::new();
    let mut generation = vec![(fragment, target_pieces)];
    let mut first_task_id = 0;

    while !generation.is_empty() {
        let base = first_task_id;
        first_task_id += generation.len();

        let steps: Vec<Step> = generation
            .into_par_iter()
            .enumerate()
            .map(|(i, (piece, required))| {
                if required <= 1 {
                    Step::Terminal(piece)
                } else {
                    advance(piece, required, &mut make_slicer(base + i))
                }
            })
            .collect();

        generation = Vec::with_capacity(steps.len() * 2);

        for step in steps {
            match step {
                Step::Terminal(piece) => results.push(piece),
                Step::Split(children) => generation.extend(children),
            }
        }
    }

    log::info!("Got {} pieces", results.len());
    results
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bounding_volume::Aabb;
    use crate::fracture::PlaneSlicer;
    use crate::math::{Point, Transform, Vector};
    use crate::shape::{Plane, TriMesh};
    use smallvec::smallvec;

    fn triangle_fragment() -> Fragment {
        let mesh = TriMesh::new(
            vec![
                Point::new(-1.0, -1.0, 0.0),
                Point::new(1.0, -1.0, 0.0),
                Point::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2]],
        )
        .unwrap();
        Fragment::new(mesh, Transform::identity()).with_name("tri")
    }

    fn center_plane(bounds: &Aabb) -> Plane {
        Plane::from_unit_normal(Vector::y_axis(), &bounds.center())
    }

    #[test]
    fn piece_counts_are_balanced() {
        for required in 2..100 {
            let (left, right) = split_piece_count(required);
            assert_eq!(left + right, required);
            assert!(0 < left && left <= right);
            assert!(right < required);
        }
    }

    #[test]
    fn single_piece_is_returned_unchanged() {
        let mut calls = 0;
        let mut slicer = |_: &Fragment| -> Result<SlicedFragments, SliceError> {
            calls += 1;
            Err(SliceError::MissingGeometry)
        };
        let fragment = triangle_fragment();
        let result = slice_into_pieces(fragment.clone(), 1, &mut slicer);
        assert_eq!(result, vec![fragment]);
        assert_eq!(calls, 0);
    }

    #[test]
    fn zero_target_behaves_like_one() {
        let mut slicer = PlaneSlicer::new(center_plane);
        assert_eq!(slice_into_pieces(triangle_fragment(), 0, &mut slicer).len(), 1);
    }

    #[test]
    fn target_is_reached_when_slicing_succeeds() {
        let mut slicer = PlaneSlicer::new(center_plane);

        for target in 1..20 {
            let pieces = slice_into_pieces(triangle_fragment(), target, &mut slicer);
            assert_eq!(pieces.len(), target);
        }
    }

    #[test]
    fn unexpected_split_shape_is_terminal() {
        let mut slicer = |fragment: &Fragment| -> Result<SlicedFragments, SliceError> {
            Ok(smallvec![fragment.clone(), fragment.clone(), fragment.clone()])
        };
        let result = slice_into_pieces(triangle_fragment(), 5, &mut slicer);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "tri");
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_sequential() {
        let mut slicer = PlaneSlicer::new(center_plane);
        let sequential = slice_into_pieces(triangle_fragment(), 9, &mut slicer);
        let parallel = slice_into_pieces_parallel(triangle_fragment(), 9, |_| {
            PlaneSlicer::new(center_plane)
        });
        assert_eq!(sequential, parallel);
    }
}
