use crate::math::Real;
use crate::query::{TriangleSide, TriangleSplit};
use crate::shape::{Plane, Segment, Triangle};

impl TriangleSide {
    /// Classifies a triangle from the signed distances of its three vertices to a plane.
    ///
    /// Both tests are inclusive and the negative one is checked first, so a triangle lying
    /// exactly on the plane is `Negative`.
    #[inline]
    pub fn from_distances(dists: [Real; 3]) -> Self {
        if dists.iter().all(|d| *d <= 0.0) {
            TriangleSide::Negative
        } else if dists.iter().all(|d| *d >= 0.0) {
            TriangleSide::Positive
        } else {
            TriangleSide::Straddling
        }
    }
}

impl Plane {
    /// Tells on which side of this plane the triangle `tri` lies.
    ///
    /// Both shapes must be expressed in the same coordinate frame.
    #[inline]
    pub fn classify_triangle(&self, tri: &Triangle) -> TriangleSide {
        TriangleSide::from_distances(self.triangle_distances(tri))
    }

    #[inline]
    fn triangle_distances(&self, tri: &Triangle) -> [Real; 3] {
        [
            self.signed_distance(&tri.a),
            self.signed_distance(&tri.b),
            self.signed_distance(&tri.c),
        ]
    }
}

impl Triangle {
    /// Splits this triangle by `plane`.
    ///
    /// A triangle on one side of the plane is returned unmodified on that side. A straddling
    /// triangle has one vertex alone on its side of the plane (vertices exactly on the plane
    /// count as positive). It is clipped into:
    /// - one triangle on the side of the lone vertex, made of that vertex and the two points
    ///   where its edges cross the plane,
    /// - two triangles on the other side, covering the remaining quadrilateral.
    ///
    /// All the pieces keep the winding of `self`.
    pub fn split_by_plane(&self, plane: &Plane) -> TriangleSplit {
        let dists = plane.triangle_distances(self);
        let mut result = TriangleSplit::default();

        match TriangleSide::from_distances(dists) {
            TriangleSide::Negative => result.negative.push(*self),
            TriangleSide::Positive => result.positive.push(*self),
            TriangleSide::Straddling => self.clip_straddling(plane, dists, &mut result),
        }

        result
    }

    fn clip_straddling(&self, plane: &Plane, dists: [Real; 3], out: &mut TriangleSplit) {
        let is_positive = dists.map(|d| d >= 0.0);
        let num_positive = is_positive.iter().filter(|p| **p).count();

        let lone_is_positive = match num_positive {
            1 => true,
            2 => false,
            // Unreachable for finite distances, but NaNs end up here.
            _ => {
                out.positive.push(*self);
                return;
            }
        };

        let lone = is_positive
            .iter()
            .position(|p| *p == lone_is_positive)
            .unwrap_or_default();

        // Rotate the vertices so the lone one comes last. This preserves the winding.
        let vtx = self.vertices();
        let a = vtx[(lone + 1) % 3];
        let b = vtx[(lone + 2) % 3];
        let c = vtx[lone];

        let ia = Segment::new(a, c).plane_intersection(plane);
        let ib = Segment::new(b, c).plane_intersection(plane);

        let (lone_side, pair_side) = if lone_is_positive {
            (&mut out.positive, &mut out.negative)
        } else {
            (&mut out.negative, &mut out.positive)
        };

        pair_side.push(Triangle::new(a, b, ia));
        pair_side.push(Triangle::new(b, ib, ia));
        lone_side.push(Triangle::new(c, ia, ib));
    }
}
