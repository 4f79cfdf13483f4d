use crate::math::{Point, Real};
use crate::shape::{Plane, Segment};

impl Segment {
    /// The parameter `t` such that `self.point_at(t)` lies on `plane`.
    ///
    /// Returns `None` if the segment is parallel to the plane, including the case where it is
    /// degenerate or lies on the plane. The parameter is not clamped: it is outside of `[0, 1]`
    /// if the plane does not cross the segment.
    #[inline]
    pub fn plane_intersection_parameter(&self, plane: &Plane) -> Option<Real> {
        let denom = plane.normal.dot(&self.scaled_direction());

        if denom == 0.0 {
            None
        } else {
            Some(-plane.signed_distance(&self.a) / denom)
        }
    }

    /// The point where this segment crosses `plane`.
    ///
    /// This is meant for segments with endpoints on opposite sides of the plane. The
    /// parameter is clamped to `[0, 1]` so the result always lies on the segment, and `self.a`
    /// is returned if the segment is parallel to the plane.
    #[inline]
    pub fn plane_intersection(&self, plane: &Plane) -> Point<Real> {
        match self.plane_intersection_parameter(plane) {
            Some(t) if t.is_finite() => self.point_at(t.clamp(0.0, 1.0)),
            _ => self.a,
        }
    }
}
