use thiserror::Error;

use crate::boundary::Boundary;

/// Reasons why a spline can not be constructed from the given data.
///
/// All variants are detected during [`Spline::new`](crate::Spline::new);
/// evaluation of a successfully built spline never fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    #[error("{boundary} spline requires at least {required} knots, got {actual}")]
    TooFewKnots {
        boundary: Boundary,
        required: usize,
        actual: usize,
    },

    #[error("values must have exactly {positions} entries to match positions, got {values}")]
    LengthMismatch { positions: usize, values: usize },

    #[error("position #{index} is not finite: {value}")]
    NonFinitePosition { index: usize, value: f64 },

    #[error("positions are not sorted in ascending order at #{index}")]
    Unsorted { index: usize },

    #[error("segment #{index} has zero width at t={t} but differing values")]
    InfiniteSlope { index: usize, t: f64 },

    #[error("system of {n} equations is singular and can not be solved")]
    SingularSystem { n: usize },
}
