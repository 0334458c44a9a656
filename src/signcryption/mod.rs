//! Signcryption over KMACXOF256 and E521.
//!
//! This module composes the hash and curve layers into the crate's
//! high-level operations:
//!
//! - [`generate_keypair`]: password → `(s, V = s·G)`
//! - [`encrypt_password`] / [`decrypt_password`]: password-based
//!   authenticated encryption
//! - [`encrypt_with_key`] / [`decrypt_with_key`]: ECDHIES under an E521
//!   public key
//! - [`sign`] / [`verify`]: Schnorr signatures
//!
//! Every operation is a pure request/response: no state survives a call.
//! Randomized operations take the randomness source as their last
//! parameter and fail with `RandomnessUnavailable` rather than degrade.
//!
//! All encryption schemes follow the same encrypt-and-MAC layout:
//!
//! ```text
//! (ke ‖ ka) = KMACXOF256(key material, "", 1024, D)
//! c         = KMACXOF256(ke, "", 8·|m|, D ‖ "KE") ⊕ m
//! t         = KMACXOF256(ka, m, 512, D ‖ "KA")
//! ```
//!
//! Decryption recomputes the tag over the recovered plaintext and compares
//! it in constant time. A mismatch is reported as a bare `TagMismatch`.

mod asymmetric;
mod keypair;
mod schnorr;
mod symmetric;

pub use asymmetric::{AsymmetricCryptogram, decrypt_with_key, encrypt_with_key};
pub use keypair::{KeyPair, SecretKey, generate_keypair};
pub use schnorr::{Signature, sign, verify};
pub use symmetric::{SymmetricCryptogram, decrypt_password, encrypt_password};

use rand_core::TryCryptoRng;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::error::{CryptoError, CryptoResult};
use crate::hash::keccak::kmac_xof256;

/// Length of the random nonce of a symmetric cryptogram (and of the
/// ephemeral seed of an asymmetric one).
pub const NONCE_BYTES: usize = 64;

/// Length of every authentication tag.
pub const TAG_BYTES: usize = 64;

/// Length of each derived key (`ke` and `ka`).
const DERIVED_KEY_BYTES: usize = 64;

/// Encryption and authentication keys derived from shared key material.
pub(crate) struct DerivedKeys {
    pub(crate) ke: Zeroizing<Vec<u8>>,
    pub(crate) ka: Zeroizing<Vec<u8>>,
}

/// Splits `KMACXOF256(material, "", 1024, custom)` into `(ke, ka)`.
pub(crate) fn derive_keys(material: &[u8], custom: &str) -> DerivedKeys {
    let both = Zeroizing::new(kmac_xof256(material, &[], 16 * DERIVED_KEY_BYTES, custom));

    DerivedKeys {
        ke: Zeroizing::new(both[..DERIVED_KEY_BYTES].to_vec()),
        ka: Zeroizing::new(both[DERIVED_KEY_BYTES..].to_vec()),
    }
}

/// XORs `data` with `KMACXOF256(ke, "", 8·|data|, custom)`.
pub(crate) fn apply_keystream(ke: &[u8], data: &[u8], custom: &str) -> Vec<u8> {
    if data.is_empty() {
        return Vec::new();
    }

    let mut out = kmac_xof256(ke, &[], 8 * data.len(), custom);
    for (o, d) in out.iter_mut().zip(data) {
        *o ^= d;
    }

    out
}

/// Computes the 512-bit tag `KMACXOF256(ka, message, 512, custom)`.
pub(crate) fn authenticate(ka: &[u8], message: &[u8], custom: &str) -> [u8; TAG_BYTES] {
    let mut tag = [0u8; TAG_BYTES];
    tag.copy_from_slice(&kmac_xof256(ka, message, 8 * TAG_BYTES, custom));
    tag
}

/// Constant-time tag comparison.
pub(crate) fn tags_match(expected: &[u8], received: &[u8]) -> bool {
    bool::from(expected.ct_eq(received))
}

/// Fills `out` from the injected randomness source.
pub(crate) fn fill_random<R>(rng: &mut R, out: &mut [u8]) -> CryptoResult<()>
where
    R: TryCryptoRng + ?Sized,
{
    rng.try_fill_bytes(out).map_err(|err| {
        tracing::error!(error = %err, "randomness source failed");
        CryptoError::RandomnessUnavailable
    })
}

/// Splits `bytes` into a fixed-size head, a variable middle and a 64-byte tag.
pub(crate) fn split_framed<'a>(
    what: &'static str,
    bytes: &'a [u8],
    head: usize,
) -> CryptoResult<(&'a [u8], &'a [u8], [u8; TAG_BYTES])> {
    if bytes.len() < head + TAG_BYTES {
        return Err(CryptoError::malformed(
            what,
            format!("at least {} bytes", head + TAG_BYTES),
            bytes.len(),
        ));
    }

    let (head_bytes, rest) = bytes.split_at(head);
    let (body, tag_bytes) = rest.split_at(rest.len() - TAG_BYTES);

    let mut tag = [0u8; TAG_BYTES];
    tag.copy_from_slice(tag_bytes);

    Ok((head_bytes, body, tag))
}
