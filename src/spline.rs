use crate::{boundary::Boundary, error::SplineError, segment::Segment, system};

/// An immutable piecewise-cubic curve passing exactly through its knots.
///
/// Built once by [`Spline::new`] and never mutated afterwards, so a spline can
/// be shared across threads for concurrent read-only evaluation.
pub struct Spline {
    segments: Vec<Segment>,
    min_t: f64,
    max_t: f64,
}

impl Spline {
    /// Creates a cubic spline through the points `S(positions[i]) = values[i]`
    /// under the given boundary condition.
    ///
    /// Both slices must have the same length of at least 2 (at least 4 for
    /// [`Boundary::NotAKnot`]), and `positions` must be finite and sorted in
    /// ascending order. A position may repeat once in a row when the
    /// corresponding values match, producing a zero-width segment; repeating
    /// more than twice makes the system singular.
    ///
    /// # Example
    /// ```
    /// use cubic_spline::{Boundary, Spline};
    ///
    /// let spline = Spline::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0], Boundary::Natural).unwrap();
    /// assert_eq!(1.0, spline.at(1.0));
    /// ```
    pub fn new(
        positions: &[f64],
        values: &[f64],
        boundary: Boundary,
    ) -> Result<Self, SplineError> {
        let n_knots = positions.len();

        let required = if boundary == Boundary::NotAKnot { 4 } else { 2 };
        if n_knots < required {
            return Err(SplineError::TooFewKnots {
                boundary,
                required,
                actual: n_knots,
            });
        }
        if values.len() != n_knots {
            return Err(SplineError::LengthMismatch {
                positions: n_knots,
                values: values.len(),
            });
        }
        for (index, &value) in positions.iter().enumerate() {
            if !value.is_finite() {
                return Err(SplineError::NonFinitePosition { index, value });
            }
        }
        if let Some(index) = positions.windows(2).position(|w| w[0] > w[1]) {
            return Err(SplineError::Unsorted { index });
        }

        let mut segments = Vec::with_capacity(n_knots - 1);
        for i in 0..n_knots - 1 {
            segments.push(Segment::new(
                i,
                positions[i],
                positions[i + 1],
                values[i],
                values[i + 1],
            )?);
        }

        let (matrix, rhs) = system::assemble(&segments, boundary);
        let moments = system::solve(matrix, rhs)?;

        for (i, segment) in segments.iter_mut().enumerate() {
            segment.apply_moments(moments[i], moments[i + 1]);
        }

        Ok(Spline {
            min_t: positions[0],
            max_t: positions[n_knots - 1],
            segments,
        })
    }

    /// Evaluates `S(t)`.
    ///
    /// `t` outside `[min_t, max_t]` is clamped to the nearest boundary, so
    /// evaluation never fails; a NaN query yields NaN. Segment lookup is a
    /// binary search, `O(log n)`.
    pub fn at(&self, t: f64) -> f64 {
        let t = t.clamp(self.min_t, self.max_t);
        self.segments[self.segment_index(t)].evaluate(t)
    }

    /// Smallest knot position.
    pub fn min_t(&self) -> f64 {
        self.min_t
    }

    /// Largest knot position.
    pub fn max_t(&self) -> f64 {
        self.max_t
    }

    /// Index of the segment with the largest start not exceeding `t`. An exact
    /// knot position selects the segment starting there; `t == max_t` falls
    /// into the last segment.
    fn segment_index(&self, t: f64) -> usize {
        self.segments
            .partition_point(|segment| segment.t0 <= t)
            .saturating_sub(1)
    }
}
