use crate::math::Real;

/// A request to fracture an object into a given number of pieces.
///
/// This is what a host emits when it decides an object must break, for example after a
/// collision. `pieces` is meant to be passed as the target of
/// [`slice_into_pieces`](crate::fracture::slice_into_pieces).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SliceRequest {
    /// The number of pieces requested.
    pub pieces: usize,
}

/// Indicates an inconsistency in the thresholds given to [`ImpactThresholds::new`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ImpactThresholdsError {
    /// The intensity bounds are not strictly increasing, or one of them is NaN.
    #[error("the intensity bound {index} is not greater than the previous one.")]
    Unsorted {
        /// The index of the first faulty bound.
        index: usize,
    },
    /// A threshold requests zero pieces.
    ///
    /// `index` is equal to the number of bounds if the fallback count is zero.
    #[error("the threshold {index} requests zero pieces.")]
    ZeroPieces {
        /// The index of the faulty threshold.
        index: usize,
    },
}

/// Maps an impact intensity to a number of pieces.
///
/// The thresholds are a list of `(bound, pieces)` pairs sorted by increasing `bound`. An
/// intensity is mapped to the `pieces` of the first pair with `intensity < bound`, or to the
/// fallback count if there is none.
///
/// The default thresholds map intensities below 5 to 2 pieces, below 15 to 5 pieces, below 30
/// to 7 pieces, and anything else to 9 pieces.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use fracture3d::fracture::ImpactThresholds;
///
/// let thresholds = ImpactThresholds::default();
/// assert_eq!(thresholds.pieces_for_intensity(3.0), 2);
/// assert_eq!(thresholds.pieces_for_intensity(20.0), 7);
/// assert_eq!(thresholds.pieces_for_intensity(100.0), 9);
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ImpactThresholds {
    bounds: Vec<(Real, usize)>,
    fallback: usize,
}

impl Default for ImpactThresholds {
    fn default() -> Self {
        Self {
            bounds: vec![(5.0, 2), (15.0, 5), (30.0, 7)],
            fallback: 9,
        }
    }
}

impl ImpactThresholds {
    /// Creates thresholds from `(bound, pieces)` pairs and a fallback piece count.
    pub fn new(
        bounds: Vec<(Real, usize)>,
        fallback: usize,
    ) -> Result<Self, ImpactThresholdsError> {
        for (index, (bound, pieces)) in bounds.iter().enumerate() {
            if bound.is_nan() || (index > 0 && *bound <= bounds[index - 1].0) {
                return Err(ImpactThresholdsError::Unsorted { index });
            }

            if *pieces == 0 {
                return Err(ImpactThresholdsError::ZeroPieces { index });
            }
        }

        if fallback == 0 {
            return Err(ImpactThresholdsError::ZeroPieces {
                index: bounds.len(),
            });
        }

        Ok(Self { bounds, fallback })
    }

    /// The number of pieces an impact of the given intensity should produce.
    ///
    /// A NaN intensity maps to the fallback count.
    pub fn pieces_for_intensity(&self, intensity: Real) -> usize {
        self.bounds
            .iter()
            .find(|(bound, _)| intensity < *bound)
            .map_or(self.fallback, |(_, pieces)| *pieces)
    }

    /// The slice request an impact of the given intensity should trigger.
    pub fn request_for_intensity(&self, intensity: Real) -> SliceRequest {
        let pieces = self.pieces_for_intensity(intensity);
        log::debug!("Impact intensity {} requests {} pieces.", intensity, pieces);
        SliceRequest { pieces }
    }
}
