//! NIST SP 800-185 string encodings.
//!
//! These encodings make the inputs of cSHAKE and KMAC unambiguously
//! parseable, which is what gives the function name, customization string
//! and key their domain separation.
//!
//! Integers are written as their minimal big-endian byte string (at least
//! one byte), with the byte count either before (`left_encode`) or after
//! (`right_encode`) the value. Zero is therefore `[1, 0]` on the left and
//! `[0, 1]` on the right.

use crate::error::{CryptoError, CryptoResult};

/// Minimal big-endian bytes of `n`, never empty.
fn minimal_be(n: u64) -> ([u8; 8], usize) {
    let bytes = n.to_be_bytes();
    let len = (8 - (n.leading_zeros() / 8) as usize).max(1);

    (bytes, 8 - len)
}

/// Encodes `n` as `len ‖ be(n)`.
pub fn left_encode(n: u64) -> Vec<u8> {
    let (bytes, start) = minimal_be(n);

    let mut out = Vec::with_capacity(9);
    out.push((8 - start) as u8);
    out.extend_from_slice(&bytes[start..]);
    out
}

/// Encodes `n` as `be(n) ‖ len`.
pub fn right_encode(n: u64) -> Vec<u8> {
    let (bytes, start) = minimal_be(n);

    let mut out = Vec::with_capacity(9);
    out.extend_from_slice(&bytes[start..]);
    out.push((8 - start) as u8);
    out
}

/// Parses a `left_encode`d integer at the start of `input`.
///
/// # Returns
/// The decoded value and the number of bytes consumed.
pub fn left_decode(input: &[u8]) -> CryptoResult<(u64, usize)> {
    let Some((&len, rest)) = input.split_first() else {
        return Err(CryptoError::malformed("left_encode", "a length byte", "nothing"));
    };

    let len = len as usize;
    if len == 0 || len > 8 {
        return Err(CryptoError::malformed("left_encode", "a length in 1..=8", len));
    }
    if rest.len() < len {
        return Err(CryptoError::malformed(
            "left_encode",
            format!("{len} value bytes"),
            rest.len(),
        ));
    }

    let value = rest[..len]
        .iter()
        .fold(0u64, |acc, &b| (acc << 8) | b as u64);

    Ok((value, 1 + len))
}

/// Parses a `right_encode`d integer at the end of `input`.
///
/// # Returns
/// The decoded value and the number of bytes consumed from the end.
pub fn right_decode(input: &[u8]) -> CryptoResult<(u64, usize)> {
    let Some((&len, rest)) = input.split_last() else {
        return Err(CryptoError::malformed("right_encode", "a length byte", "nothing"));
    };

    let len = len as usize;
    if len == 0 || len > 8 {
        return Err(CryptoError::malformed("right_encode", "a length in 1..=8", len));
    }
    if rest.len() < len {
        return Err(CryptoError::malformed(
            "right_encode",
            format!("{len} value bytes"),
            rest.len(),
        ));
    }

    let value = rest[rest.len() - len..]
        .iter()
        .fold(0u64, |acc, &b| (acc << 8) | b as u64);

    Ok((value, 1 + len))
}

/// Encodes a byte string as `left_encode(bit length) ‖ s`.
pub fn encode_string(s: &[u8]) -> Vec<u8> {
    let mut out = left_encode((s.len() as u64) * 8);
    out.extend_from_slice(s);
    out
}

/// Prepends `left_encode(w)` to `input` and zero-pads the result to a
/// multiple of `w` bytes.
///
/// # Panics
/// Panics if `w` is zero.
pub fn bytepad(input: &[u8], w: usize) -> Vec<u8> {
    assert!(w > 0, "bytepad width must be non-zero");

    let mut out = left_encode(w as u64);
    out.extend_from_slice(input);

    let padded = out.len().div_ceil(w) * w;
    out.resize(padded, 0);
    out
}
