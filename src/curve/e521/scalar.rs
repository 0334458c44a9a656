//! Scalars for E521.
//!
//! A [`Scalar`] is a non-negative integer below 2⁵⁷⁶. It is not bound to a
//! single modulus: the key schedule reduces `4 · KMAC` outputs modulo the
//! group order `n = 4r`, while signature responses live modulo the
//! subgroup order `r`. Both reductions are exposed explicitly.
//!
//! All reductions go through [`U576::rem_wide`], whose running time only
//! depends on the operand width.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

use crate::primitives::U576;

/// Subgroup order `r = 2⁵¹⁹ − 337554763258501705789107630418782636071904961214051226618635150085779108655765`.
pub(crate) const R: U576 = U576::from_limbs([
    0x40ea2435f5180d6b,
    0xfbd8c4569a8f1f45,
    0x36b8af5e7ec53f04,
    0x15b6c64746fc85f7,
    0xfffffffffffffffd,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0x7f,
]);

/// Group order `n = 4r`.
pub(crate) const N: U576 = U576::from_limbs([
    0x03a890d7d46035ac,
    0xef63115a6a3c7d15,
    0xdae2bd79fb14fc13,
    0x56db191d1bf217dc,
    0xfffffffffffffff4,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0x1ff,
]);

/// Non-negative integer used as a multiplier of curve points.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Scalar(U576);

impl Scalar {
    /// The scalar zero.
    pub const ZERO: Self = Self(U576::ZERO);

    /// The scalar one.
    pub const ONE: Self = Self(U576::ONE);

    /// The subgroup order `r`.
    pub const ORDER_R: Self = Self(R);

    /// The group order `n = 4r`.
    pub const ORDER_N: Self = Self(N);

    /// Wraps a 576-bit integer.
    pub const fn from_u576(value: U576) -> Self {
        Self(value)
    }

    /// Interprets `bytes` as a big-endian integer.
    ///
    /// # Returns
    /// `None` if the value needs more than 576 bits.
    pub fn from_be_bytes(bytes: &[u8]) -> Option<Self> {
        U576::from_be_bytes(bytes).map(Self)
    }

    /// Interprets a 512-bit digest as a big-endian integer.
    pub fn from_digest(digest: &[u8; 64]) -> Self {
        let mut limbs = [0u64; 9];

        for (limb, chunk) in limbs.iter_mut().zip(digest.rchunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *limb = u64::from_be_bytes(word);
        }

        Self(U576::from_limbs(limbs))
    }

    /// Minimal big-endian encoding (a single zero byte for zero).
    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.0.to_be_bytes_trimmed()
    }

    /// Returns the underlying integer.
    pub fn to_u576(&self) -> U576 {
        self.0
    }

    /// Bit `index` of the scalar, least significant first.
    #[inline(always)]
    pub fn bit(&self, index: usize) -> u8 {
        self.0.bit(index)
    }

    /// Returns `true` for zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// `self mod r`.
    pub fn reduce_r(&self) -> Self {
        Self(self.0.rem(&R))
    }

    /// `self mod n`.
    pub fn reduce_n(&self) -> Self {
        Self(self.0.rem(&N))
    }

    /// `(self + rhs) mod r`.
    pub fn add_mod_r(&self, rhs: &Self) -> Self {
        // Both reduced operands are below 2^519, the sum cannot overflow.
        let sum = self.reduce_r().0 + rhs.reduce_r().0;
        Self(conditional_sub(&sum, &R))
    }

    /// `(self − rhs) mod r`.
    pub fn sub_mod_r(&self, rhs: &Self) -> Self {
        let (diff, borrow) = self.reduce_r().0.overflowing_sub(&rhs.reduce_r().0);
        let wrapped = diff + R;
        Self(U576::conditional_select(&diff, &wrapped, Choice::from(borrow as u8)))
    }

    /// `(self · rhs) mod r`.
    pub fn mul_mod_r(&self, rhs: &Self) -> Self {
        Self(U576::rem_wide(&self.0.mul_wide(&rhs.0), &R))
    }

    /// `(4 · self) mod n`, the key-schedule clamp.
    ///
    /// The result is always a multiple of 4, which clears the cofactor.
    pub fn times_four_mod_n(&self) -> Self {
        Self(U576::rem_wide(&self.0.mul_wide(&U576::from_u64(4)), &N))
    }
}

/// Returns `value − m` if `value ≥ m`, else `value`.
fn conditional_sub(value: &U576, m: &U576) -> U576 {
    let (reduced, borrow) = value.overflowing_sub(m);
    U576::conditional_select(&reduced, value, Choice::from(borrow as u8))
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Self(U576::from_u64(value))
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(U576::conditional_select(&a.0, &b.0, choice))
    }
}

impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}
