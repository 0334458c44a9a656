//! KMAC-based CSPRNG
//!
//! This module implements a cryptographically secure pseudorandom number
//! generator (CSPRNG) built on top of KMACXOF256.
//!
//! It is designed as a low-level primitive of the crate and:
//! - relies on the operating system for initial entropy
//! - uses KMACXOF256 as a deterministic random bit generator (DRBG)
//! - provides forward secrecy via rekeying after every request
//!
//! Each request produces
//!
//! ```text
//! KMACXOF256(key, counter, 8·len, "DRBG")
//! ```
//!
//! and is followed by `key ← KMACXOF256(key, counter, 512, "REKEY")`, so
//! a later state compromise does not expose earlier outputs.

use rand_core::{CryptoRng, OsRng, RngCore, TryRngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{CryptoError, CryptoResult};
use crate::hash::keccak::kmac_xof256;

/// Size of the seed and of the internal key, in bytes.
pub const SEED_BYTES: usize = 64;

/// Customization string of output blocks.
const DRBG_CUSTOM: &str = "DRBG";

/// Customization string of the rekeying step.
const REKEY_CUSTOM: &str = "REKEY";

/// Cryptographically secure pseudorandom number generator.
///
/// The generator is initialized from OS-provided entropy (or a caller seed)
/// and then expands randomness with KMACXOF256. Internally, it maintains a
/// 512-bit secret key and a request counter.
///
/// The state is wiped when the generator is dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Csprng {
    /// Internal KMAC key (512-bit)
    key: [u8; SEED_BYTES],

    /// Domain-separation counter, incremented on every KMAC call
    counter: u64,
}

impl Csprng {
    /// Creates a new CSPRNG using entropy provided by the operating system.
    ///
    /// # Returns
    /// `RandomnessUnavailable` if the operating system refuses to provide
    /// entropy. The generator never falls back to a weaker source.
    pub fn from_os() -> CryptoResult<Self> {
        let mut seed = [0u8; SEED_BYTES];

        OsRng.try_fill_bytes(&mut seed).map_err(|err| {
            tracing::error!(error = %err, "operating system entropy source failed");
            CryptoError::RandomnessUnavailable
        })?;

        Ok(Self::from_seed(seed))
    }

    /// Creates a new CSPRNG from a user-provided seed.
    ///
    /// The seed must be uniformly random and unpredictable. After being
    /// consumed, the seed buffer is wiped to avoid lingering sensitive data.
    pub fn from_seed(mut seed: [u8; SEED_BYTES]) -> Self {
        let key = seed;
        seed.zeroize();

        Self { key, counter: 0 }
    }

    /// Returns the current counter block and advances it.
    fn next_counter(&mut self) -> [u8; 8] {
        let block = self.counter.to_be_bytes();
        self.counter = self.counter.wrapping_add(1);
        block
    }

    /// Replaces the key with a one-way function of itself.
    fn rekey(&mut self) {
        let counter = self.next_counter();
        let mut next = kmac_xof256(&self.key, &counter, 8 * SEED_BYTES, REKEY_CUSTOM);

        self.key.copy_from_slice(&next);
        next.zeroize();
    }
}

impl RngCore for Csprng {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    /// Fills `dst` with one KMAC output, then rekeys.
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        if dst.is_empty() {
            return;
        }

        let counter = self.next_counter();
        let mut block = kmac_xof256(&self.key, &counter, 8 * dst.len(), DRBG_CUSTOM);

        dst.copy_from_slice(&block);
        block.zeroize();

        self.rekey();
    }
}

impl CryptoRng for Csprng {}
