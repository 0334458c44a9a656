//! Random number generation module
//!
//! This module provides cryptographically secure randomness facilities
//! for the crate.
//!
//! It is built around a KMACXOF256-based deterministic random bit generator
//! (DRBG) seeded from the operating system.
//!
//! Randomized operations elsewhere in the crate never reach for a global
//! generator: they take any `rand_core::TryCryptoRng` as a parameter.
//! [`Csprng`] and [`OsRng`] are the two sources provided here.

/// Design goals:
/// - Cryptographic security
/// - Deterministic expansion from a secure seed
/// - Forward secrecy through rekeying after every request
/// - Minimal and explicit API surface
mod csprng;

/// Cryptographically secure pseudorandom number generator.
pub use csprng::{Csprng, SEED_BYTES};

/// The operating system entropy source, fallible by design.
pub use rand_core::OsRng;
