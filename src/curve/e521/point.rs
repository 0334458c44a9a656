//! Affine points of E521.
//!
//! [`CurvePoint`] is the public, value-typed representation of a group
//! element: a pair `(x, y)` of canonical field elements satisfying the
//! curve equation. Constructors that take untrusted coordinates validate
//! them; arithmetic results are valid by construction.
//!
//! ## Encodings
//!
//! - Uncompressed: `x ‖ y`, two 66-byte big-endian field elements
//!   (132 bytes). This is the layout of the ephemeral point inside an
//!   asymmetric cryptogram.
//! - Compressed: `x ‖ lsb(y)`, 66 bytes plus one byte holding `0` or `1`
//!   (67 bytes). `y` is recovered with [`solve_y`].

use std::ops::{Add, Neg};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use super::field::{FIELD_BYTES, FieldElement, mod_sqrt};
use super::ladder::scalar_mul;
use super::params::{D, E521};
use super::scalar::Scalar;
use crate::error::{CryptoError, CryptoResult};

/// Length of the uncompressed `x ‖ y` encoding.
pub const POINT_BYTES: usize = 2 * FIELD_BYTES;

/// Length of the compressed `x ‖ lsb(y)` encoding.
pub const COMPRESSED_POINT_BYTES: usize = FIELD_BYTES + 1;

/// A point on E521 in affine coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CurvePoint {
    x: FieldElement,
    y: FieldElement,
}

impl CurvePoint {
    /// The neutral element `(0, 1)`.
    pub const IDENTITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
    };

    /// Builds a point without checking the curve equation.
    pub(crate) const fn from_coordinates_unchecked(x: FieldElement, y: FieldElement) -> Self {
        Self { x, y }
    }

    /// The standard generator `G = (4, y₀)` with `y₀` even.
    pub fn generator() -> Self {
        E521.generator
    }

    /// Builds a point from affine coordinates.
    ///
    /// # Returns
    /// `MalformedInput` if `(x, y)` is not on the curve.
    pub fn new(x: FieldElement, y: FieldElement) -> CryptoResult<Self> {
        let point = Self { x, y };

        if !point.is_on_curve() {
            return Err(CryptoError::malformed(
                "curve point",
                "coordinates satisfying x^2 + y^2 = 1 + d*x^2*y^2",
                "a point off the curve",
            ));
        }

        Ok(point)
    }

    /// Recovers the point with abscissa `x` whose ordinate has parity `lsb`.
    ///
    /// # Returns
    /// `NoSquareRoot` if no such point exists.
    pub fn from_x(x: FieldElement, lsb: bool) -> CryptoResult<Self> {
        let y = solve_y(&x, lsb).ok_or(CryptoError::NoSquareRoot)?;
        Ok(Self { x, y })
    }

    /// Affine x-coordinate.
    pub fn x(&self) -> FieldElement {
        self.x
    }

    /// Affine y-coordinate.
    pub fn y(&self) -> FieldElement {
        self.y
    }

    /// Checks `x² + y² = 1 + d·x²·y²`.
    pub fn is_on_curve(&self) -> bool {
        let x2 = self.x.square();
        let y2 = self.y.square();
        x2 + y2 == FieldElement::ONE + D * x2 * y2
    }

    /// Returns `true` for `(0, 1)`.
    pub fn is_identity(&self) -> bool {
        bool::from(self.ct_eq(&Self::IDENTITY))
    }

    /// The opposite point `(−x, y)`.
    pub fn negate(&self) -> Self {
        Self {
            x: -self.x,
            y: self.y,
        }
    }

    /// Computes `scalar · self` with the Montgomery ladder.
    pub fn mul(&self, scalar: &Scalar) -> Self {
        scalar_mul(self, scalar)
    }

    /// Uncompressed `x ‖ y` encoding.
    pub fn to_bytes(&self) -> [u8; POINT_BYTES] {
        let mut out = [0u8; POINT_BYTES];
        out[..FIELD_BYTES].copy_from_slice(&self.x.to_be_bytes());
        out[FIELD_BYTES..].copy_from_slice(&self.y.to_be_bytes());
        out
    }

    /// Parses and validates an uncompressed encoding.
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() != POINT_BYTES {
            return Err(CryptoError::malformed("curve point", POINT_BYTES, bytes.len()));
        }

        let x = FieldElement::from_be_bytes(&bytes[..FIELD_BYTES])?;
        let y = FieldElement::from_be_bytes(&bytes[FIELD_BYTES..])?;
        Self::new(x, y)
    }

    /// Compressed `x ‖ lsb(y)` encoding.
    pub fn to_compressed(&self) -> [u8; COMPRESSED_POINT_BYTES] {
        let mut out = [0u8; COMPRESSED_POINT_BYTES];
        out[..FIELD_BYTES].copy_from_slice(&self.x.to_be_bytes());
        out[FIELD_BYTES] = self.y.is_odd() as u8;
        out
    }

    /// Parses a compressed encoding and recovers `y`.
    ///
    /// # Returns
    /// - `MalformedInput` for a wrong length, an unreduced `x` or a parity
    ///   byte other than `0` / `1`
    /// - `NoSquareRoot` if `x` is not the abscissa of any curve point
    pub fn from_compressed(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() != COMPRESSED_POINT_BYTES {
            return Err(CryptoError::malformed(
                "compressed curve point",
                COMPRESSED_POINT_BYTES,
                bytes.len(),
            ));
        }

        let lsb = match bytes[FIELD_BYTES] {
            0 => false,
            1 => true,
            other => return Err(CryptoError::malformed("parity byte", "0 or 1", other)),
        };

        let x = FieldElement::from_be_bytes(&bytes[..FIELD_BYTES])?;
        Self::from_x(x, lsb)
    }
}

/// Solves the curve equation for `y` given `x` and the parity of `y`.
///
/// ```text
/// y² = (1 − x²) / (1 + 376014·x²)
/// ```
///
/// The denominator is `1 − d·x²`, never zero because `d` is not a square.
///
/// # Returns
/// `None` when the right-hand side is not a quadratic residue.
pub fn solve_y(x: &FieldElement, lsb: bool) -> Option<FieldElement> {
    let x2 = x.square();
    let num = FieldElement::ONE - x2;
    let denom = FieldElement::ONE - D * x2;

    mod_sqrt(&(num * denom.invert()), lsb)
}

impl Add for CurvePoint {
    type Output = Self;

    /// Edwards addition in affine coordinates.
    ///
    /// ```text
    /// x3 = (x1·y2 + y1·x2) / (1 + d·x1·x2·y1·y2)
    /// y3 = (y1·y2 − x1·x2) / (1 − d·x1·x2·y1·y2)
    /// ```
    ///
    /// Both denominators are inverted together at the cost of one field
    /// inversion.
    fn add(self, rhs: Self) -> Self {
        let x1x2 = self.x * rhs.x;
        let y1y2 = self.y * rhs.y;
        let t = D * x1x2 * y1y2;

        let num_x = self.x * rhs.y + self.y * rhs.x;
        let num_y = y1y2 - x1x2;
        let den_x = FieldElement::ONE + t;
        let den_y = FieldElement::ONE - t;

        let inv = (den_x * den_y).invert();

        Self {
            x: num_x * den_y * inv,
            y: num_y * den_x * inv,
        }
    }
}

impl Neg for CurvePoint {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl ConstantTimeEq for CurvePoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y)
    }
}

impl ConditionallySelectable for CurvePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
        }
    }
}
