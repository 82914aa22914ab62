//! Cubic spline interpolation through an ordered set of data points, with
//! selectable boundary conditions: natural, not-a-knot, clamped and cyclic.
//!
//! Construction solves the linear system determining the second derivative at
//! each knot and derives one cubic polynomial per segment; evaluation finds
//! the segment by binary search and applies Horner's method.
//!
//! # Example
//! ```
//! use cubic_spline::{Boundary, Spline};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let positions = [0.0, 1.0, 3.0, 4.0];
//! let values = [0.0, 0.0, 2.0, 2.0];
//! let spline = Spline::new(&positions, &values, Boundary::Natural).unwrap();
//!
//! assert_approx_eq!(0.0, spline.at(1.0), 1e-9);
//! assert_approx_eq!(1.0, spline.at(2.0), 1e-9);
//! assert_approx_eq!(2.0, spline.at(3.0), 1e-9);
//! ```

mod boundary;
mod error;
mod segment;
mod spline;
mod system;

pub use boundary::Boundary;
pub use error::SplineError;
pub use spline::Spline;
