//! Hash algorithms exposed by the crate.
//!
//! Currently includes the Keccak family (SHA-3, SHAKE256, cSHAKE256 and
//! KMACXOF256) with a pure-Rust implementation.

pub mod keccak;

/// Re-export of the byte-level hashing entry points.
pub use keccak::{hash, hash_reader, kmac_xof256, tagged_hash};
