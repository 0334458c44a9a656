//! Elliptic curves.
//!
//! Currently includes E521, the 521-bit complete Edwards curve underlying
//! the public-key half of the crate.

pub mod e521;

pub use e521::{CurveParameters, CurvePoint, E521, FieldElement, Scalar};
