//! 576-bit unsigned integer primitive
//!
//! This module defines a fixed-size 576-bit unsigned integer type (`U576`).
//!
//! It is designed as a **simple, explicit value type**, not as a full
//! big-integer arithmetic library. Its primary use cases are:
//! - the canonical representation of E521 field elements
//! - scalars modulo the curve orders `r` and `n`
//! - wide intermediate results during modular reduction
//!
//! Limbs are stored least-significant first so that carries propagate in
//! iteration order.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter, LowerHex, Result};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

/// Fixed-size 576-bit unsigned integer.
///
/// The value is stored as nine 64-bit limbs, least significant limb first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct U576(pub(crate) [u64; 9]);

impl U576 {
    /// Number of 64-bit limbs.
    pub const LIMBS: usize = 9;

    /// Width in bits.
    pub const BITS: usize = 576;

    /// Width of the big-endian byte encoding.
    pub const BYTES: usize = 72;

    /// The value zero.
    pub const ZERO: Self = Self([0u64; 9]);

    /// The value one.
    pub const ONE: Self = Self::from_u64(1);

    /// The maximum representable value (2⁵⁷⁶ − 1).
    pub const MAX: Self = Self([u64::MAX; 9]);

    /// Builds a value from its limbs, least significant first.
    pub const fn from_limbs(limbs: [u64; 9]) -> Self {
        Self(limbs)
    }

    /// Builds a value from a single machine word.
    pub const fn from_u64(value: u64) -> Self {
        let mut limbs = [0u64; 9];
        limbs[0] = value;
        Self(limbs)
    }

    /// Returns the limbs, least significant first.
    pub const fn limbs(&self) -> &[u64; 9] {
        &self.0
    }

    /// Returns bit `index` (0 = least significant) as `0` or `1`.
    ///
    /// Indices at or above 576 read as zero.
    #[inline(always)]
    pub fn bit(&self, index: usize) -> u8 {
        if index >= Self::BITS {
            return 0;
        }

        ((self.0[index / 64] >> (index % 64)) & 1) as u8
    }

    /// Number of significant bits (0 for zero).
    pub fn bits(&self) -> usize {
        for (i, &limb) in self.0.iter().enumerate().rev() {
            if limb != 0 {
                return i * 64 + (64 - limb.leading_zeros() as usize);
            }
        }

        0
    }

    /// Returns `true` if the value is zero.
    pub fn is_zero(&self) -> bool {
        bool::from(self.ct_eq(&Self::ZERO))
    }

    /// Returns `true` if the least significant bit is set.
    pub fn is_odd(&self) -> bool {
        self.0[0] & 1 == 1
    }
}

impl Ord for U576 {
    /// Numeric ordering, most significant limb first.
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.0.iter().rev().zip(other.0.iter().rev()) {
            match a.cmp(b) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }

        Ordering::Equal
    }
}

impl PartialOrd for U576 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl ConstantTimeEq for U576 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConditionallySelectable for U576 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut out = [0u64; 9];

        for (o, (x, y)) in out.iter_mut().zip(a.0.iter().zip(b.0.iter())) {
            *o = u64::conditional_select(x, y, choice);
        }

        Self(out)
    }
}

impl Zeroize for U576 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl LowerHex for U576 {
    /// Formats the value as minimal lowercase hexadecimal (`0` for zero).
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mut started = false;

        for &limb in self.0.iter().rev() {
            if started {
                write!(f, "{limb:016x}")?;
            } else if limb != 0 {
                write!(f, "{limb:x}")?;
                started = true;
            }
        }

        if !started {
            f.write_str("0")?;
        }

        Ok(())
    }
}

impl Display for U576 {
    /// Formats the value as `0x`-prefixed hexadecimal.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "0x{self:x}")
    }
}
