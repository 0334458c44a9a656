//! Conversions between `U576` and other representations.
//!
//! All byte-oriented conversions are **big-endian**, matching the way field
//! elements, scalars and KMAC outputs are interpreted as integers by the
//! rest of the crate.

use super::core::U576;

impl U576 {
    /// Interprets `bytes` as a big-endian unsigned integer.
    ///
    /// Inputs longer than 72 bytes are accepted as long as the excess
    /// leading bytes are zero.
    ///
    /// # Returns
    /// `None` if the value does not fit in 576 bits.
    pub fn from_be_bytes(bytes: &[u8]) -> Option<Self> {
        let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        let significant = &bytes[start..];

        if significant.len() > Self::BYTES {
            return None;
        }

        let mut limbs = [0u64; 9];

        for (i, &byte) in significant.iter().rev().enumerate() {
            limbs[i / 8] |= (byte as u64) << (8 * (i % 8));
        }

        Some(Self(limbs))
    }

    /// Full 72-byte big-endian encoding.
    pub fn to_be_bytes(&self) -> [u8; 72] {
        let mut out = [0u8; 72];

        for (chunk, limb) in out.chunks_exact_mut(8).zip(self.0.iter().rev()) {
            chunk.copy_from_slice(&limb.to_be_bytes());
        }

        out
    }

    /// Big-endian encoding without leading zero bytes.
    ///
    /// Zero encodes as a single `0x00` byte.
    pub fn to_be_bytes_trimmed(&self) -> Vec<u8> {
        let full = self.to_be_bytes();
        let start = full
            .iter()
            .position(|&b| b != 0)
            .unwrap_or(Self::BYTES - 1);

        full[start..].to_vec()
    }

    /// Big-endian encoding left-padded (or truncated from the left) to `len` bytes.
    ///
    /// Callers are expected to pass a length that holds the value; only
    /// zero bytes are dropped when `len < 72` for in-range values.
    pub fn to_be_bytes_fixed(&self, len: usize) -> Vec<u8> {
        let full = self.to_be_bytes();

        if len >= Self::BYTES {
            let mut out = vec![0u8; len - Self::BYTES];
            out.extend_from_slice(&full);
            out
        } else {
            full[Self::BYTES - len..].to_vec()
        }
    }
}

impl From<u64> for U576 {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<[u64; 9]> for U576 {
    fn from(limbs: [u64; 9]) -> Self {
        Self::from_limbs(limbs)
    }
}
