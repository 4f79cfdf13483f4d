//! Rigid transformation combined with a non-uniform scale.

use crate::math::{Isometry, Point, Real, Vector};
use crate::utils::inv;

/// The placement of a mesh in world-space: a per-axis scale followed by a rotation and a
/// translation.
///
/// This is the local-to-world transform attached to a fragment. Mesh vertices are stored in
/// the local frame and mapped to world-space with [`Transform::transform_point`] before being
/// classified against a cutting plane.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Transform {
    /// The rotation and translation part of this transform.
    pub isometry: Isometry<Real>,
    /// The scale factor applied along each local axis, before the isometry.
    pub scale: Vector<Real>,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Isometry<Real>> for Transform {
    fn from(isometry: Isometry<Real>) -> Self {
        Self::from_isometry(isometry)
    }
}

impl Transform {
    /// Creates a transform from an isometry and a per-axis scale.
    #[inline]
    pub fn new(isometry: Isometry<Real>, scale: Vector<Real>) -> Self {
        Self { isometry, scale }
    }

    /// The identity transform.
    #[inline]
    pub fn identity() -> Self {
        Self::from_isometry(Isometry::identity())
    }

    /// A transform with a unit scale.
    #[inline]
    pub fn from_isometry(isometry: Isometry<Real>) -> Self {
        Self::new(isometry, Vector::repeat(1.0))
    }

    /// Returns `self` with its scale replaced by `scale`.
    #[inline]
    #[must_use]
    pub fn with_scale(mut self, scale: Vector<Real>) -> Self {
        self.scale = scale;
        self
    }

    /// Maps a point from the local frame to world-space.
    #[inline]
    pub fn transform_point(&self, pt: &Point<Real>) -> Point<Real> {
        self.isometry * Point::from(pt.coords.component_mul(&self.scale))
    }

    /// Maps a world-space point back to the local frame.
    ///
    /// Scale components equal to zero collapse the corresponding coordinate to zero.
    /// Use [`Transform::try_inverse_transform_point`] to detect that case.
    #[inline]
    pub fn inverse_transform_point(&self, pt: &Point<Real>) -> Point<Real> {
        let unrotated = self.isometry.inverse_transform_point(pt);
        Point::from(unrotated.coords.component_mul(&self.scale.map(inv)))
    }

    /// Maps a world-space point back to the local frame.
    ///
    /// Returns `None` if one of the scale components is zero.
    #[inline]
    pub fn try_inverse_transform_point(&self, pt: &Point<Real>) -> Option<Point<Real>> {
        if self.scale.iter().any(|s| *s == 0.0) {
            None
        } else {
            Some(self.inverse_transform_point(pt))
        }
    }
}
