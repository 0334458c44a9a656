//! Keccak-f[1600] and the constructions built on it.
//!
//! This module implements, from the permutation upwards:
//! - the Keccak-f[1600] permutation (FIPS 202, 24 rounds)
//! - the sponge construction with pad10*1 padding
//! - the NIST SP 800-185 encoding layer (`left_encode`, `right_encode`,
//!   `encode_string`, `bytepad`)
//! - SHA3 / SHAKE256 / cSHAKE256 / KMACXOF256
//!
//! Everything here is a pure function over owned buffers. A sponge state is
//! created by one absorb call, squeezed by the caller that owns it and then
//! dropped; nothing is shared between invocations.

pub(crate) mod computations;
pub mod core;
pub mod encoding;
pub mod sponge;

pub use self::core::{
    RATE_BYTES, cshake256, hash, hash_reader, kmac_xof256, shake, shake256, tagged_hash,
};
pub use computations::permute;
pub use encoding::{bytepad, encode_string, left_decode, left_encode, right_decode, right_encode};
pub use sponge::{Sponge, SpongeState, absorb, squeeze};

/// Number of rounds of Keccak-f[1600].
pub(crate) const ROUNDS: usize = 24;

/// Iota round constants, one per round.
pub(crate) const RC: [u64; ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808a,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808b,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008a,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000a,
    0x0000_0000_8000_808b,
    0x8000_0000_0000_008b,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800a,
    0x8000_0000_8000_000a,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

/// Rho rotation offsets, in the order lanes are visited by pi.
pub(crate) const ROTC: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// Pi lane permutation: destination index of each visited lane.
pub(crate) const PILN: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];
