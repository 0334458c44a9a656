//! Domain parameters of E521.
//!
//! E521 is the complete Edwards curve
//!
//! ```text
//! x² + y² = 1 + d·x²·y²   over 𝔽ₚ, p = 2⁵²¹ − 1, d = −376014
//! ```
//!
//! with `#E = n = 4r` and a generator `G` of order `r` whose x-coordinate
//! is 4 and whose y-coordinate is the even root of the curve equation.
//!
//! All parameters are compile-time constants; nothing is computed at run
//! time and nothing is mutable.

use super::field::{FieldElement, P};
use super::point::CurvePoint;
use super::scalar::{N, R};
use crate::primitives::U576;

/// The coefficient `d = −376014 mod p`.
pub(crate) const D: FieldElement = FieldElement::from_canonical(U576::from_limbs([
    0xfffffffffffa4331,
    u64::MAX,
    u64::MAX,
    u64::MAX,
    u64::MAX,
    u64::MAX,
    u64::MAX,
    u64::MAX,
    0x1ff,
]));

/// Affine x-coordinate of the generator.
const GX: FieldElement = FieldElement::from_canonical(U576::from_u64(4));

/// Affine y-coordinate of the generator (even root).
const GY: FieldElement = FieldElement::from_canonical(U576::from_limbs([
    0xbcdfb41d0093b10c,
    0x64b0de40f93e22f8,
    0xfa955cbfb1cfd4e0,
    0x5616ebb481557d7b,
    0x050b3c80f5920a14,
    0xf3be43295904d1e4,
    0x15c806d24013b3eb,
    0xd4b4952f9b741bdb,
    0x11d,
]));

/// The full parameter set of an Edwards curve with `a = 1`.
#[derive(Copy, Clone, Debug)]
pub struct CurveParameters {
    /// Field modulus.
    pub p: U576,
    /// Edwards coefficient.
    pub d: FieldElement,
    /// Order of the generator.
    pub r: U576,
    /// Order of the curve group (`4r`).
    pub n: U576,
    /// Base point.
    pub generator: CurvePoint,
}

/// The E521 parameters.
pub const E521: CurveParameters = CurveParameters {
    p: P,
    d: D,
    r: R,
    n: N,
    generator: CurvePoint::from_coordinates_unchecked(GX, GY),
};
