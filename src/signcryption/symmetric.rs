//! Password-based authenticated encryption.
//!
//! ```text
//! z         ← 64 random bytes
//! (ke ‖ ka) = KMACXOF256(z ‖ pw, "", 1024, "S")
//! c         = KMACXOF256(ke, "", 8·|m|, "SKE") ⊕ m
//! t         = KMACXOF256(ka, m, 512, "SKA")
//! ```
//!
//! Wire format: `z (64) ‖ c (|m|) ‖ t (64)`.

use rand_core::TryCryptoRng;
use zeroize::{Zeroize, Zeroizing};

use super::{
    NONCE_BYTES, TAG_BYTES, apply_keystream, authenticate, derive_keys, fill_random,
    split_framed, tags_match,
};
use crate::error::{CryptoError, CryptoResult};

const KEY_CUSTOM: &str = "S";
const ENCRYPT_CUSTOM: &str = "SKE";
const AUTH_CUSTOM: &str = "SKA";

/// Output of [`encrypt_password`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymmetricCryptogram {
    /// Random nonce `z`.
    pub nonce: [u8; NONCE_BYTES],
    /// Ciphertext `c`, as long as the plaintext.
    pub ciphertext: Vec<u8>,
    /// Authentication tag `t`.
    pub tag: [u8; TAG_BYTES],
}

impl SymmetricCryptogram {
    /// Serializes as `z ‖ c ‖ t`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(NONCE_BYTES + self.ciphertext.len() + TAG_BYTES);
        out.extend_from_slice(&self.nonce);
        out.extend_from_slice(&self.ciphertext);
        out.extend_from_slice(&self.tag);
        out
    }

    /// Parses `z ‖ c ‖ t`.
    ///
    /// # Returns
    /// `MalformedInput` if `bytes` is shorter than nonce and tag together.
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        let (nonce_bytes, ciphertext, tag) =
            split_framed("symmetric cryptogram", bytes, NONCE_BYTES)?;

        let mut nonce = [0u8; NONCE_BYTES];
        nonce.copy_from_slice(nonce_bytes);

        Ok(Self {
            nonce,
            ciphertext: ciphertext.to_vec(),
            tag,
        })
    }
}

/// Keys bound to one nonce and one password.
fn nonce_keyed(nonce: &[u8; NONCE_BYTES], password: &[u8]) -> super::DerivedKeys {
    let mut material = Zeroizing::new(Vec::with_capacity(NONCE_BYTES + password.len()));
    material.extend_from_slice(nonce);
    material.extend_from_slice(password);

    derive_keys(&material, KEY_CUSTOM)
}

/// Encrypts and authenticates `message` under `password`.
///
/// # Returns
/// `RandomnessUnavailable` if the nonce cannot be drawn.
pub fn encrypt_password(
    password: &[u8],
    message: &[u8],
    rng: &mut impl TryCryptoRng,
) -> CryptoResult<SymmetricCryptogram> {
    let mut nonce = [0u8; NONCE_BYTES];
    fill_random(rng, &mut nonce)?;

    let keys = nonce_keyed(&nonce, password);
    let ciphertext = apply_keystream(&keys.ke, message, ENCRYPT_CUSTOM);
    let tag = authenticate(&keys.ka, message, AUTH_CUSTOM);

    tracing::debug!(message_len = message.len(), "password encryption");

    Ok(SymmetricCryptogram {
        nonce,
        ciphertext,
        tag,
    })
}

/// Decrypts a cryptogram produced by [`encrypt_password`].
///
/// # Returns
/// `TagMismatch` for a wrong password or any modified byte. No part of the
/// recovered plaintext is released in that case.
pub fn decrypt_password(
    password: &[u8],
    cryptogram: &SymmetricCryptogram,
) -> CryptoResult<Vec<u8>> {
    let keys = nonce_keyed(&cryptogram.nonce, password);
    let mut plaintext = apply_keystream(&keys.ke, &cryptogram.ciphertext, ENCRYPT_CUSTOM);
    let expected = authenticate(&keys.ka, &plaintext, AUTH_CUSTOM);

    if !tags_match(&expected, &cryptogram.tag) {
        plaintext.zeroize();
        tracing::debug!(
            ciphertext_len = cryptogram.ciphertext.len(),
            "password decryption rejected"
        );
        return Err(CryptoError::TagMismatch);
    }

    tracing::debug!(
        ciphertext_len = cryptogram.ciphertext.len(),
        "password decryption"
    );

    Ok(plaintext)
}
