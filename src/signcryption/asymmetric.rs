//! ECDHIES over E521.
//!
//! ```text
//! k         = 4 · (64 random bytes) mod n
//! W         = k·V,   Z = k·G
//! (ke ‖ ka) = KMACXOF256(W.x, "", 1024, "P")
//! c         = KMACXOF256(ke, "", 8·|m|, "PKE") ⊕ m
//! t         = KMACXOF256(ka, m, 512, "PKA")
//! ```
//!
//! The recipient recomputes `W = s·Z` from its password-derived scalar.
//!
//! Wire format: `Z.x (66) ‖ Z.y (66) ‖ c (|m|) ‖ t (64)`.

use rand_core::TryCryptoRng;
use zeroize::{Zeroize, Zeroizing};

use super::keypair::SecretKey;
use super::{
    DerivedKeys, NONCE_BYTES, TAG_BYTES, apply_keystream, authenticate, derive_keys, fill_random,
    split_framed, tags_match,
};
use crate::curve::e521::{CurvePoint, POINT_BYTES, Scalar};
use crate::error::{CryptoError, CryptoResult};

const KEY_CUSTOM: &str = "P";
const ENCRYPT_CUSTOM: &str = "PKE";
const AUTH_CUSTOM: &str = "PKA";

/// Output of [`encrypt_with_key`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AsymmetricCryptogram {
    /// Ephemeral public point `Z = k·G`.
    pub ephemeral: CurvePoint,
    /// Ciphertext `c`, as long as the plaintext.
    pub ciphertext: Vec<u8>,
    /// Authentication tag `t`.
    pub tag: [u8; TAG_BYTES],
}

impl AsymmetricCryptogram {
    /// Serializes as `Z.x ‖ Z.y ‖ c ‖ t`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(POINT_BYTES + self.ciphertext.len() + TAG_BYTES);
        out.extend_from_slice(&self.ephemeral.to_bytes());
        out.extend_from_slice(&self.ciphertext);
        out.extend_from_slice(&self.tag);
        out
    }

    /// Parses `Z.x ‖ Z.y ‖ c ‖ t`.
    ///
    /// # Returns
    /// `MalformedInput` if `bytes` is too short, a coordinate is not a
    /// canonical field element, or `Z` is not on the curve.
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        let (point_bytes, ciphertext, tag) =
            split_framed("asymmetric cryptogram", bytes, POINT_BYTES)?;

        Ok(Self {
            ephemeral: CurvePoint::from_bytes(point_bytes)?,
            ciphertext: ciphertext.to_vec(),
            tag,
        })
    }
}

/// Keys bound to the shared point `W`.
fn shared_keys(shared: &CurvePoint) -> DerivedKeys {
    let wx = Zeroizing::new(shared.x().to_be_bytes_trimmed());
    derive_keys(&wx, KEY_CUSTOM)
}

/// Encrypts `message` to the holder of `public`.
///
/// # Returns
/// `RandomnessUnavailable` if the ephemeral scalar cannot be drawn.
pub fn encrypt_with_key(
    public: &CurvePoint,
    message: &[u8],
    rng: &mut impl TryCryptoRng,
) -> CryptoResult<AsymmetricCryptogram> {
    let mut seed = Zeroizing::new([0u8; NONCE_BYTES]);
    fill_random(rng, &mut seed[..])?;

    let k = Zeroizing::new(Scalar::from_digest(&seed).times_four_mod_n());
    let shared = public.mul(&k);
    let ephemeral = CurvePoint::generator().mul(&k);

    let keys = shared_keys(&shared);
    let ciphertext = apply_keystream(&keys.ke, message, ENCRYPT_CUSTOM);
    let tag = authenticate(&keys.ka, message, AUTH_CUSTOM);

    tracing::debug!(message_len = message.len(), "public-key encryption");

    Ok(AsymmetricCryptogram {
        ephemeral,
        ciphertext,
        tag,
    })
}

/// Decrypts a cryptogram addressed to the key pair of `password`.
///
/// # Returns
/// - `MalformedInput` if the ephemeral point is not on the curve, or the
///   password derives the zero scalar
/// - `TagMismatch` for a wrong password or any modified byte
pub fn decrypt_with_key(
    password: &[u8],
    cryptogram: &AsymmetricCryptogram,
) -> CryptoResult<Vec<u8>> {
    if !cryptogram.ephemeral.is_on_curve() {
        return Err(CryptoError::malformed(
            "ephemeral point",
            "a point on E521",
            "a point off the curve",
        ));
    }

    let secret = SecretKey::from_password(password)?;
    let shared = cryptogram.ephemeral.mul(secret.scalar());

    let keys = shared_keys(&shared);
    let mut plaintext = apply_keystream(&keys.ke, &cryptogram.ciphertext, ENCRYPT_CUSTOM);
    let expected = authenticate(&keys.ka, &plaintext, AUTH_CUSTOM);

    if !tags_match(&expected, &cryptogram.tag) {
        plaintext.zeroize();
        tracing::debug!(
            ciphertext_len = cryptogram.ciphertext.len(),
            "public-key decryption rejected"
        );
        return Err(CryptoError::TagMismatch);
    }

    tracing::debug!(
        ciphertext_len = cryptogram.ciphertext.len(),
        "public-key decryption"
    );

    Ok(plaintext)
}
