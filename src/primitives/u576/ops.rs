//! Arithmetic operations for `U576`.
//!
//! Additions and subtractions expose their carry / borrow so that the
//! modular layers above can implement conditional corrections with
//! `subtle` selection instead of data-dependent branches.
//!
//! Multiplication is widening: the full 1152-bit product is returned as
//! eighteen limbs and left to the caller to reduce, either with a Mersenne
//! fold (field elements) or with [`U576::rem_wide`] (scalars).

use std::ops::{Add, Shl, Shr, Sub};

use subtle::{Choice, ConditionallySelectable};

use super::core::U576;

impl U576 {
    /// Adds `rhs`, returning the wrapped sum and the outgoing carry.
    pub fn overflowing_add(&self, rhs: &Self) -> (Self, bool) {
        let mut out = [0u64; 9];
        let mut carry = 0u64;

        for (i, o) in out.iter_mut().enumerate() {
            let (s1, c1) = self.0[i].overflowing_add(rhs.0[i]);
            let (s2, c2) = s1.overflowing_add(carry);
            *o = s2;
            carry = (c1 | c2) as u64;
        }

        (Self(out), carry == 1)
    }

    /// Subtracts `rhs`, returning the wrapped difference and the outgoing borrow.
    pub fn overflowing_sub(&self, rhs: &Self) -> (Self, bool) {
        let mut out = [0u64; 9];
        let mut borrow = 0u64;

        for (i, o) in out.iter_mut().enumerate() {
            let (d1, b1) = self.0[i].overflowing_sub(rhs.0[i]);
            let (d2, b2) = d1.overflowing_sub(borrow);
            *o = d2;
            borrow = (b1 | b2) as u64;
        }

        (Self(out), borrow == 1)
    }

    /// Full 576 × 576 → 1152-bit schoolbook product, least significant limb first.
    ///
    /// Each row carries its own 64-bit overflow, so the 128-bit accumulator
    /// never exceeds `(2⁶⁴ − 1) + (2⁶⁴ − 1)² + (2⁶⁴ − 1) = 2¹²⁸ − 1`.
    pub fn mul_wide(&self, rhs: &Self) -> [u64; 18] {
        let mut out = [0u64; 18];

        for i in 0..9 {
            let mut carry: u128 = 0;
            let a = self.0[i] as u128;

            for j in 0..9 {
                let t = out[i + j] as u128 + a * rhs.0[j] as u128 + carry;
                out[i + j] = t as u64;
                carry = t >> 64;
            }

            out[i + 9] = carry as u64;
        }

        out
    }

    /// Shifts left by one bit, inserting `bit` (0 or 1) at position zero.
    ///
    /// The bit shifted out at the top is discarded.
    #[inline(always)]
    pub(crate) fn shl1_with(&self, bit: u64) -> Self {
        let mut out = [0u64; 9];
        let mut carry = bit & 1;

        for (o, &limb) in out.iter_mut().zip(self.0.iter()) {
            *o = (limb << 1) | carry;
            carry = limb >> 63;
        }

        Self(out)
    }

    /// Reduces a little-endian multi-limb integer modulo `modulus`.
    ///
    /// Binary long division, most significant bit first. Every step performs
    /// the same shift, subtraction and selection regardless of the data, so
    /// the running time depends only on `wide.len()`.
    ///
    /// # Panics
    /// Panics if `modulus` is zero or uses all 576 bits (the shifted
    /// remainder must stay representable).
    pub fn rem_wide(wide: &[u64], modulus: &Self) -> Self {
        assert!(
            !modulus.is_zero() && modulus.bits() < Self::BITS,
            "modulus must be non-zero and below 2^575"
        );

        let mut rem = Self::ZERO;

        for limb in wide.iter().rev() {
            for shift in (0..64).rev() {
                rem = rem.shl1_with(limb >> shift);

                let (reduced, borrow) = rem.overflowing_sub(modulus);
                rem = Self::conditional_select(&reduced, &rem, Choice::from(borrow as u8));
            }
        }

        rem
    }

    /// Reduces `self` modulo `modulus`.
    pub fn rem(&self, modulus: &Self) -> Self {
        Self::rem_wide(&self.0, modulus)
    }
}

impl Add for U576 {
    type Output = Self;

    /// Wrapping addition modulo 2⁵⁷⁶.
    fn add(self, rhs: Self) -> Self {
        self.overflowing_add(&rhs).0
    }
}

impl Sub for U576 {
    type Output = Self;

    /// Wrapping subtraction modulo 2⁵⁷⁶.
    fn sub(self, rhs: Self) -> Self {
        self.overflowing_sub(&rhs).0
    }
}

impl Shl<usize> for U576 {
    type Output = Self;

    /// Logical left shift; bits shifted past 2⁵⁷⁶ are dropped.
    fn shl(self, shift: usize) -> Self {
        if shift >= Self::BITS {
            return Self::ZERO;
        }

        let limbs = shift / 64;
        let bits = shift % 64;
        let mut out = [0u64; 9];

        for i in (limbs..9).rev() {
            let src = i - limbs;
            out[i] = self.0[src] << bits;

            if bits != 0 && src > 0 {
                out[i] |= self.0[src - 1] >> (64 - bits);
            }
        }

        Self(out)
    }
}

impl Shr<usize> for U576 {
    type Output = Self;

    /// Logical right shift.
    fn shr(self, shift: usize) -> Self {
        if shift >= Self::BITS {
            return Self::ZERO;
        }

        let limbs = shift / 64;
        let bits = shift % 64;
        let mut out = [0u64; 9];

        for i in 0..(9 - limbs) {
            let src = i + limbs;
            out[i] = self.0[src] >> bits;

            if bits != 0 && src + 1 < 9 {
                out[i] |= self.0[src + 1] << (64 - bits);
            }
        }

        Self(out)
    }
}
