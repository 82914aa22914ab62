use nalgebra::{DMatrix, DVector};

use crate::{boundary::Boundary, error::SplineError, segment::Segment};

/// Builds the linear system determining the second derivative (moment) at
/// each knot. Interior knots contribute the tridiagonal continuity equations;
/// the selected boundary condition fills rows 0 and n-1.
pub(crate) fn assemble(
    segments: &[Segment],
    boundary: Boundary,
) -> (DMatrix<f64>, DVector<f64>) {
    let n = segments.len() + 1;
    let mut matrix = DMatrix::<f64>::zeros(n, n);
    let mut rhs = DVector::<f64>::zeros(n);

    tridiagonal_core(segments, &mut matrix, &mut rhs);

    match boundary {
        Boundary::Natural => natural_rows(&mut matrix),
        Boundary::NotAKnot => not_a_knot_rows(segments, &mut matrix),
        Boundary::Clamped => clamped_rows(segments, &mut matrix, &mut rhs),
        Boundary::Cyclic => cyclic_rows(segments, &mut matrix, &mut rhs),
    }

    (matrix, rhs)
}

/// Second-derivative continuity at interior knots `i = 1..n-2`:
/// `h[i-1]*m[i-1] + 2*(h[i-1]+h[i])*m[i] + h[i]*m[i+1] = 6*(d[i]-d[i-1])`.
fn tridiagonal_core(segments: &[Segment], matrix: &mut DMatrix<f64>, rhs: &mut DVector<f64>) {
    let n = segments.len() + 1;
    for i in 1..n - 1 {
        matrix[(i, i - 1)] = segments[i - 1].h;
        matrix[(i, i)] = 2.0 * (segments[i - 1].h + segments[i].h);
        matrix[(i, i + 1)] = segments[i].h;
        rhs[i] = 6.0 * (segments[i].d - segments[i - 1].d);
    }
}

/// Zero second derivative at both end knots.
fn natural_rows(matrix: &mut DMatrix<f64>) {
    let n = matrix.nrows();
    matrix[(0, 0)] = 1.0;
    matrix[(n - 1, n - 1)] = 1.0;
}

/// Third-derivative continuity across the first and last interior knot.
/// Requires at least three knots, which construction has already checked.
fn not_a_knot_rows(segments: &[Segment], matrix: &mut DMatrix<f64>) {
    let n = segments.len() + 1;
    let first = &segments[0];
    let second = &segments[1];
    matrix[(0, 0)] = second.h;
    matrix[(0, 1)] = -first.h - second.h;
    matrix[(0, 2)] = first.h;

    let last = &segments[segments.len() - 1];
    let previous = &segments[segments.len() - 2];
    matrix[(n - 1, n - 3)] = last.h;
    matrix[(n - 1, n - 2)] = -last.h - previous.h;
    matrix[(n - 1, n - 1)] = previous.h;
}

/// Zero first derivative at both end knots.
fn clamped_rows(segments: &[Segment], matrix: &mut DMatrix<f64>, rhs: &mut DVector<f64>) {
    let n = segments.len() + 1;
    let first = &segments[0];
    matrix[(0, 0)] = 2.0 * first.h;
    matrix[(0, 1)] = first.h;
    rhs[0] = 6.0 * first.d;

    let last = &segments[segments.len() - 1];
    matrix[(n - 1, n - 2)] = last.h;
    matrix[(n - 1, n - 1)] = 2.0 * last.h;
    rhs[n - 1] = -6.0 * last.d;
}

/// Periodic closure: row 0 enforces first-derivative continuity across the
/// wrap by treating the last segment as the one preceding knot 0,
/// `h_last*m[n-2] + 2*(h_last+h[0])*m[0] + h[0]*m[1] = 6*(d[0]-d_last)`,
/// and row n-1 pins `m[n-1] = m[0]` so the second derivative is periodic.
/// The interior row at knot n-2 already couples `m[n-1]`, closing the cycle.
/// Row 0 entries are accumulated because its columns collide for n <= 3.
fn cyclic_rows(segments: &[Segment], matrix: &mut DMatrix<f64>, rhs: &mut DVector<f64>) {
    let n = segments.len() + 1;
    let first = &segments[0];
    let last = &segments[segments.len() - 1];

    matrix[(0, n - 2)] += last.h;
    matrix[(0, 0)] += 2.0 * (last.h + first.h);
    matrix[(0, 1)] += first.h;
    rhs[0] = 6.0 * (first.d - last.d);

    matrix[(n - 1, 0)] = -1.0;
    matrix[(n - 1, n - 1)] = 1.0;
}

/// Solves `M*x = r` by LU decomposition with partial pivoting.
pub(crate) fn solve(matrix: DMatrix<f64>, rhs: DVector<f64>) -> Result<DVector<f64>, SplineError> {
    let n = rhs.len();
    matrix.lu().solve(&rhs).ok_or(SplineError::SingularSystem { n })
}
