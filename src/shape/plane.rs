//! Oriented cutting plane.
use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};

/// An infinite plane splitting the space into two half-spaces.
///
/// The plane is stored as a unit normal and a signed offset `bias` along that normal, so the
/// signed distance of a point `p` to the plane is `normal · p - bias`. Points with a positive
/// distance lie on the positive half-space (the side the normal points toward).
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Plane {
    /// The plane's unit normal, pointing toward the positive half-space.
    pub normal: UnitVector<Real>,
    /// The signed distance between the origin and the plane, along `normal`.
    pub bias: Real,
}

impl Plane {
    /// Builds the plane with the given normal passing through `point`.
    ///
    /// The normal does not need to be normalized. Returns `None` if it is zero or too small to
    /// be normalized reliably.
    #[inline]
    pub fn new(normal: Vector<Real>, point: &Point<Real>) -> Option<Plane> {
        let normal = UnitVector::try_new(normal, DEFAULT_EPSILON)?;
        Some(Self::from_unit_normal(normal, point))
    }

    /// Builds the plane with the given unit normal passing through `point`.
    #[inline]
    pub fn from_unit_normal(normal: UnitVector<Real>, point: &Point<Real>) -> Plane {
        Plane {
            bias: normal.dot(&point.coords),
            normal,
        }
    }

    /// The signed distance from `pt` to this plane.
    ///
    /// Positive on the half-space `normal` points to, negative on the other one.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) - self.bias
    }

    /// The point of this plane closest to the origin.
    #[inline]
    pub fn origin(&self) -> Point<Real> {
        Point::from(self.normal.into_inner() * self.bias)
    }

    /// The same plane with its orientation reversed.
    #[inline]
    #[must_use]
    pub fn flipped(&self) -> Plane {
        Plane {
            normal: -self.normal,
            bias: -self.bias,
        }
    }
}
