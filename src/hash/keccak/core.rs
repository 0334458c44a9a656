//! SHA-3, SHAKE256, cSHAKE256 and KMACXOF256.
//!
//! This module implements the fixed-output SHA-3 family (FIPS 202) and the
//! customizable constructions of NIST SP 800-185 on top of the sponge.
//!
//! It provides:
//! - [`shake`]: SHA3-`d` for a requested output length `d`
//! - [`shake256`]: the SHAKE256 extendable-output function
//! - [`cshake256`]: SHAKE256 with function-name and customization strings
//! - [`kmac_xof256`]: keyed, arbitrary-length MAC built on cSHAKE256
//! - [`hash`] / [`tagged_hash`] / [`hash_reader`]: the 512-bit byte-level
//!   entry points consumed by callers of the crate
//!
//! All customizable functions run at a fixed rate of 136 bytes
//! (1088-bit rate, 512-bit capacity).

use std::io::{self, Read};

use super::encoding::{bytepad, encode_string, right_encode};
use super::sponge::{Sponge, absorb, squeeze};

/// Rate of SHAKE256 / cSHAKE256 / KMACXOF256 in bytes.
pub const RATE_BYTES: usize = 136;

/// Capacity of SHAKE256 / cSHAKE256 / KMACXOF256 in bits.
const CAPACITY_BITS: usize = 512;

/// Domain byte of the SHA-3 hash functions (`01` suffix).
const SHA3_DOMAIN: u8 = 0x06;

/// Domain byte of SHAKE (`1111` suffix).
const SHAKE_DOMAIN: u8 = 0x1F;

/// Domain byte of cSHAKE (`00` suffix).
const CSHAKE_DOMAIN: u8 = 0x04;

/// Computes SHA3-`output_bits` of `input`.
///
/// The capacity is `2 * output_bits`, so the supported lengths are the ones
/// leaving a lane-aligned rate (224, 256, 384 and 512 bits among others).
///
/// # Panics
/// Panics if `output_bits` is not a multiple of 32 below 800.
pub fn shake(input: &[u8], output_bits: usize) -> Vec<u8> {
    assert!(
        output_bits > 0 && output_bits < 800 && output_bits % 32 == 0,
        "unsupported SHA-3 output length"
    );

    let capacity = 2 * output_bits;
    let mut state = absorb(input, capacity, SHA3_DOMAIN);
    squeeze(&mut state, output_bits, 1600 - capacity)
}

/// Computes `output_bits` bits of SHAKE256 over `input`.
pub fn shake256(input: &[u8], output_bits: usize) -> Vec<u8> {
    let mut state = absorb(input, CAPACITY_BITS, SHAKE_DOMAIN);
    squeeze(&mut state, output_bits, 1600 - CAPACITY_BITS)
}

/// Computes cSHAKE256(`x`, `output_bits`, `name`, `custom`).
///
/// With both `name` and `custom` empty this degenerates to
/// [`shake`]`(x, output_bits)`, the SHA-3 hash with capacity
/// `2 * output_bits`. Otherwise the absorbed input is
///
/// ```text
/// bytepad(encode_string(name) ‖ encode_string(custom), 136) ‖ x
/// ```
///
/// under the cSHAKE domain byte.
///
/// # Panics
/// With both strings empty, panics for the output lengths [`shake`]
/// rejects (anything but a multiple of 32 below 800).
pub fn cshake256(x: &[u8], output_bits: usize, name: &str, custom: &str) -> Vec<u8> {
    if name.is_empty() && custom.is_empty() {
        return shake(x, output_bits);
    }

    let mut prefix = encode_string(name.as_bytes());
    prefix.extend_from_slice(&encode_string(custom.as_bytes()));

    let mut sponge = Sponge::new(CAPACITY_BITS);
    sponge.update(&bytepad(&prefix, RATE_BYTES)).update(x);

    let mut state = sponge.finalize(CSHAKE_DOMAIN);
    squeeze(&mut state, output_bits, 1600 - CAPACITY_BITS)
}

/// Computes KMACXOF256(`key`, `data`, `output_bits`, `custom`).
///
/// The keyed input is
///
/// ```text
/// bytepad(encode_string(key), 136) ‖ data ‖ right_encode(0)
/// ```
///
/// fed to cSHAKE256 with function name `"KMAC"`. The trailing
/// `right_encode(0)` marks the arbitrary-length (XOF) variant.
pub fn kmac_xof256(key: &[u8], data: &[u8], output_bits: usize, custom: &str) -> Vec<u8> {
    let keyed = bytepad(&encode_string(key), RATE_BYTES);
    let suffix = right_encode(0);

    let mut new_x = Vec::with_capacity(keyed.len() + data.len() + suffix.len());
    new_x.extend_from_slice(&keyed);
    new_x.extend_from_slice(data);
    new_x.extend_from_slice(&suffix);

    cshake256(&new_x, output_bits, "KMAC", custom)
}

/// SHA3-512 digest of `data`.
pub fn hash(data: &[u8]) -> [u8; 64] {
    let mut out = [0u8; 64];
    out.copy_from_slice(&shake(data, 512));
    out
}

/// 512-bit KMACXOF256 tag of `data` under `key` and `customization`.
pub fn tagged_hash(key: &[u8], data: &[u8], customization: &str) -> [u8; 64] {
    let mut out = [0u8; 64];
    out.copy_from_slice(&kmac_xof256(key, data, 512, customization));
    out
}

/// SHA3-512 digest of everything readable from `reader`.
///
/// Input is streamed through the sponge in fixed-size chunks, so the whole
/// input never has to be resident in memory.
pub fn hash_reader<R: Read>(mut reader: R) -> io::Result<[u8; 64]> {
    let mut sponge = Sponge::new(1024);
    let mut chunk = [0u8; 8 * 1024];

    loop {
        match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => {
                sponge.update(&chunk[..n]);
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    let mut state = sponge.finalize(SHA3_DOMAIN);

    let mut out = [0u8; 64];
    out.copy_from_slice(&squeeze(&mut state, 512, 576));
    Ok(out)
}
