use crate::error::SplineError;

/// One cubic piece of the spline, valid on `[t0, t1]`.
///
/// With `x = t - t0`:
/// ```text
/// S(t)   = c[0]*x^3 + c[1]*x^2 + c[2]*x + c[3]
/// S'(t)  = 3*c[0]*x^2 + 2*c[1]*x + c[2]
/// S''(t) = 6*c[0]*x + 2*c[1]
/// ```
#[derive(Debug, Clone, Copy)]
pub(crate) struct Segment {
    pub(crate) t0: f64,
    pub(crate) t1: f64,
    pub(crate) h: f64,
    pub(crate) v0: f64,
    pub(crate) v1: f64,
    pub(crate) d: f64,
    pub(crate) c: [f64; 4],
}

impl Segment {
    /// Creates a segment with the width and finite-difference slope cached;
    /// polynomial coefficients are filled in later by [`Segment::apply_moments`].
    ///
    /// A zero-width segment is allowed only when both values match, otherwise
    /// the slope would be infinite.
    pub(crate) fn new(index: usize, t0: f64, t1: f64, v0: f64, v1: f64) -> Result<Self, SplineError> {
        let h = t1 - t0;
        let dv = v1 - v0;
        let d = if dv != 0.0 {
            if h == 0.0 {
                return Err(SplineError::InfiniteSlope { index, t: t0 });
            }
            dv / h
        } else {
            0.0
        };

        Ok(Segment {
            t0,
            t1,
            h,
            v0,
            v1,
            d,
            c: [0.0, 0.0, 0.0, v0],
        })
    }

    /// Derives the cubic coefficients from the solved second derivatives at
    /// both ends of the segment. `c[0]` may be non-finite when the segment has
    /// zero width and the moments differ; evaluation is then only meaningful
    /// at the single point the segment represents.
    pub(crate) fn apply_moments(&mut self, m0: f64, m1: f64) {
        self.c[0] = (m1 - m0) / 6.0 / self.h;
        self.c[1] = m0 / 2.0;
        self.c[2] = self.d - self.h * (2.0 * m0 + m1) / 6.0;
        self.c[3] = self.v0;
    }

    /// Evaluates the cubic at `t` using Horner's method. A zero-width segment
    /// represents a single point and returns its value directly, since its
    /// coefficients may be non-finite.
    pub(crate) fn evaluate(&self, t: f64) -> f64 {
        if self.h == 0.0 {
            return self.v0;
        }
        let x = t - self.t0;
        ((self.c[0] * x + self.c[1]) * x + self.c[2]) * x + self.c[3]
    }

    #[cfg(test)]
    pub(crate) fn derivative(&self, t: f64) -> f64 {
        let x = t - self.t0;
        (3.0 * self.c[0] * x + 2.0 * self.c[1]) * x + self.c[2]
    }

    #[cfg(test)]
    pub(crate) fn second_derivative(&self, t: f64) -> f64 {
        let x = t - self.t0;
        6.0 * self.c[0] * x + 2.0 * self.c[1]
    }
}
