use std::fmt::Display;

/// Boundary condition closing the system of equations at the first and last knot.
///
/// Interior knots always contribute second-derivative continuity equations;
/// the two boundary rows depend on the selected variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Second derivative is zero at both end knots.
    Natural,
    /// Third derivative is continuous across the first and last interior knot.
    /// Requires at least four knots, so that the two constrained knots are
    /// distinct.
    NotAKnot,
    /// First derivative is zero at both end knots.
    Clamped,
    /// Periodic: first and second derivatives match across the wrap-around
    /// between the last and first knot.
    Cyclic,
}

impl Display for Boundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Boundary::Natural => "natural",
            Boundary::NotAKnot => "not-a-knot",
            Boundary::Clamped => "clamped",
            Boundary::Cyclic => "cyclic",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!("natural", Boundary::Natural.to_string());
        assert_eq!("not-a-knot", Boundary::NotAKnot.to_string());
        assert_eq!("clamped", Boundary::Clamped.to_string());
        assert_eq!("cyclic", Boundary::Cyclic.to_string());
    }
}
