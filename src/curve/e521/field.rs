//! Finite field arithmetic for E521.
//!
//! This module implements arithmetic in the prime field
//!
//! ```text
//! 𝔽ₚ where p = 2⁵²¹ − 1
//! ```
//!
//! ## Representation
//!
//! A field element is a [`U576`] holding the canonical representative in
//! `[0, p)`. Every operation returns a fully reduced value, so equality is
//! plain limb comparison.
//!
//! ## Reduction
//!
//! Because `p` is a Mersenne prime, `2⁵²¹ ≡ 1 (mod p)`: a wide value
//! `hi · 2⁵²¹ + lo` reduces to `hi + lo`. Two folds followed by one
//! conditional subtraction bring any product of reduced operands back
//! into `[0, p)`.
//!
//! ## Implemented operations
//!
//! - Addition, subtraction, negation
//! - Multiplication, squaring, repeated squaring
//! - Exponentiation, inversion (Fermat: `a^(p−2)`)
//! - Square roots (`p ≡ 3 mod 4`: `v^((p+1)/4) = v^(2⁵¹⁹)`)
//! - Canonical 66-byte big-endian encoding
//!
//! Conditional corrections use `subtle` selection, never branches on
//! element values.

use std::ops::{Add, Mul, Neg, Sub};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::error::{CryptoError, CryptoResult};
use crate::primitives::U576;

/// Byte length of a canonical big-endian field element encoding (`⌈521 / 8⌉`).
pub const FIELD_BYTES: usize = 66;

/// Number of bits of `p`.
const P_BITS: usize = 521;

/// The field modulus `p = 2⁵²¹ − 1`.
pub(crate) const P: U576 = U576::from_limbs([
    u64::MAX,
    u64::MAX,
    u64::MAX,
    u64::MAX,
    u64::MAX,
    u64::MAX,
    u64::MAX,
    u64::MAX,
    0x1ff,
]);

/// `p − 2`, the Fermat inversion exponent.
const P_MINUS_2: U576 = U576::from_limbs([
    u64::MAX - 2,
    u64::MAX,
    u64::MAX,
    u64::MAX,
    u64::MAX,
    u64::MAX,
    u64::MAX,
    u64::MAX,
    0x1ff,
]);

/// log₂((p + 1) / 4): the square root exponent is a pure power of two.
const SQRT_SQUARINGS: usize = 519;

/// Element of 𝔽ₚ, always in canonical form.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct FieldElement(U576);

impl FieldElement {
    /// Additive identity.
    pub const ZERO: Self = Self(U576::ZERO);

    /// Multiplicative identity.
    pub const ONE: Self = Self(U576::ONE);

    /// Wraps a value already known to be below `p`.
    pub(crate) const fn from_canonical(value: U576) -> Self {
        Self(value)
    }

    /// Reduces an arbitrary 576-bit value modulo `p`.
    pub fn reduce(value: &U576) -> Self {
        Self(fold_once(value))
    }

    /// Parses a canonical big-endian encoding.
    ///
    /// Leading zero bytes are accepted; the value itself must be below `p`.
    ///
    /// # Returns
    /// `MalformedInput` if the value does not fit or is not reduced.
    pub fn from_be_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        let value = U576::from_be_bytes(bytes).ok_or_else(|| {
            CryptoError::malformed("field element", "at most 66 bytes", bytes.len())
        })?;

        if value >= P {
            return Err(CryptoError::malformed(
                "field element",
                "a value below 2^521 - 1",
                "an unreduced value",
            ));
        }

        Ok(Self(value))
    }

    /// Fixed-width 66-byte big-endian encoding.
    pub fn to_be_bytes(&self) -> [u8; FIELD_BYTES] {
        let full = self.0.to_be_bytes();
        let mut out = [0u8; FIELD_BYTES];
        out.copy_from_slice(&full[U576::BYTES - FIELD_BYTES..]);
        out
    }

    /// Minimal big-endian encoding, as used when a coordinate keys KMAC.
    pub fn to_be_bytes_trimmed(&self) -> Vec<u8> {
        self.0.to_be_bytes_trimmed()
    }

    /// Returns the canonical integer representative.
    pub fn to_u576(&self) -> U576 {
        self.0
    }

    /// Returns `true` for the zero element.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Parity of the canonical representative.
    pub fn is_odd(&self) -> bool {
        self.0.is_odd()
    }

    /// Computes `self²`.
    #[inline]
    pub fn square(&self) -> Self {
        *self * *self
    }

    /// Computes `self^(2^k)` by `k` successive squarings.
    pub fn square_n(&self, k: usize) -> Self {
        let mut out = *self;
        for _ in 0..k {
            out = out.square();
        }
        out
    }

    /// Computes `self^exponent`.
    ///
    /// Left-to-right square-and-multiply over all 576 exponent bits; the
    /// multiplication is always performed and kept or discarded by
    /// selection.
    pub fn pow(&self, exponent: &U576) -> Self {
        let mut acc = Self::ONE;

        for i in (0..U576::BITS).rev() {
            acc = acc.square();
            let with = acc * *self;
            acc = Self::conditional_select(&acc, &with, Choice::from(exponent.bit(i)));
        }

        acc
    }

    /// Multiplicative inverse, `self^(p−2)`.
    ///
    /// # Notes
    /// Zero has no inverse; this returns zero for it.
    pub fn invert(&self) -> Self {
        self.pow(&P_MINUS_2)
    }

    /// Square root with a chosen parity.
    ///
    /// Computes `r = self^((p+1)/4)`, replaces it by `p − r` when its parity
    /// differs from `lsb`, then checks `r² = self`.
    ///
    /// # Returns
    /// - `Some(0)` for zero, whatever `lsb` is
    /// - `Some(r)` with `r² = self` and `r mod 2 = lsb`
    /// - `None` if `self` is not a quadratic residue
    pub fn sqrt(&self, lsb: bool) -> Option<Self> {
        if self.is_zero() {
            return Some(Self::ZERO);
        }

        let mut root = self.square_n(SQRT_SQUARINGS);

        if root.is_odd() != lsb {
            root = -root;
        }

        if root.square() == *self {
            Some(root)
        } else {
            None
        }
    }
}

/// Modular square root in 𝔽ₚ with the requested least significant bit.
///
/// See [`FieldElement::sqrt`].
pub fn mod_sqrt(v: &FieldElement, lsb: bool) -> Option<FieldElement> {
    v.sqrt(lsb)
}

/// Splits `value` at bit 521 and adds the halves, then subtracts `p` once
/// if needed.
///
/// Valid for any `value < 2⁵⁷⁶`: the high part is below 2⁵⁵, so the sum
/// is at most `p + 2⁵⁵` and a single correction suffices.
#[inline]
fn fold_once(value: &U576) -> U576 {
    let mut low = *value;
    low.0[8] &= 0x1ff;
    let high = *value >> P_BITS;

    conditional_sub_p(&(low + high))
}

/// Returns `value − p` if `value ≥ p`, else `value`.
#[inline]
fn conditional_sub_p(value: &U576) -> U576 {
    let (reduced, borrow) = value.overflowing_sub(&P);
    U576::conditional_select(&reduced, value, Choice::from(borrow as u8))
}

/// Reduces a 1152-bit product of two reduced elements.
fn fold_wide(wide: &[u64; 18]) -> U576 {
    let mut low = [0u64; 9];
    low.copy_from_slice(&wide[..9]);
    low[8] &= 0x1ff;

    let mut high = [0u64; 9];
    for (i, h) in high.iter_mut().enumerate() {
        *h = (wide[8 + i] >> 9) | (wide[9 + i] << 55);
    }

    // Both halves are below 2^521, so the sum fits and one more fold lands
    // at most one `p` above the canonical range.
    fold_once(&(U576::from_limbs(low) + U576::from_limbs(high)))
}

impl Add for FieldElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(fold_once(&(self.0 + rhs.0)))
    }
}

impl Sub for FieldElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let (diff, borrow) = self.0.overflowing_sub(&rhs.0);
        let wrapped = diff + P;
        Self(U576::conditional_select(&diff, &wrapped, Choice::from(borrow as u8)))
    }
}

impl Neg for FieldElement {
    type Output = Self;

    fn neg(self) -> Self {
        Self::ZERO - self
    }
}

impl Mul for FieldElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(fold_wide(&self.0.mul_wide(&rhs.0)))
    }
}

impl From<u64> for FieldElement {
    fn from(value: u64) -> Self {
        Self(U576::from_u64(value))
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(U576::conditional_select(&a.0, &b.0, choice))
    }
}
