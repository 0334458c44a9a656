//! E521 Edwards curve.
//!
//! This module implements the group of points of the complete Edwards curve
//!
//! ```text
//! x² + y² = 1 + d·x²·y²,   d = −376014
//! ```
//!
//! over the Mersenne prime field `p = 2⁵²¹ − 1`, as used by the
//! signcryption layer for key pairs, ECDHIES and Schnorr signatures.
//!
//! ## Structure
//!
//! - [`field`]: arithmetic modulo `p`, inversion and square roots
//! - [`scalar`]: integers reduced modulo the orders `r` and `n = 4r`
//! - [`point`]: affine points, addition, negation and encodings
//! - `ladder`: projective coordinates and constant-flow scalar multiplication
//! - [`params`]: the curve constants
//!
//! ## Security notes
//!
//! Scalar multiplication always processes 576 bits and swaps its working
//! points with constant-time selection. Field reductions never branch on
//! element values. Affine addition and validation are used for public
//! values only.

pub mod field;
mod ladder;
pub mod params;
pub mod point;
pub mod scalar;

pub use field::{FIELD_BYTES, FieldElement, mod_sqrt};
pub use params::{CurveParameters, E521};
pub use point::{COMPRESSED_POINT_BYTES, CurvePoint, POINT_BYTES, solve_y};
pub use scalar::Scalar;
