//! Password-derived E521 key pairs.
//!
//! The secret scalar is `s = 4 · KMACXOF256(password, "", 512, "K") mod n`
//! and the public key is `V = s·G`. The same password always yields the
//! same key pair, which is what lets `decrypt_with_key` and `sign` take a
//! password instead of a stored key.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::curve::e521::{CurvePoint, Scalar};
use crate::error::{CryptoError, CryptoResult};
use crate::hash::keccak::tagged_hash;

/// Customization string of the key schedule.
pub const KEY_CUSTOM: &str = "K";

/// A secret E521 scalar.
///
/// The scalar is wiped on drop and never printed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey(Scalar);

impl SecretKey {
    /// Derives the secret scalar from a password.
    ///
    /// # Returns
    /// `MalformedInput` in the (negligible) case where the password maps to
    /// the zero scalar, whose public key would be the identity.
    pub fn from_password(password: &[u8]) -> CryptoResult<Self> {
        let digest = Zeroizing::new(tagged_hash(password, &[], KEY_CUSTOM));
        let raw = Zeroizing::new(Scalar::from_digest(&digest));

        Self::from_scalar(raw.times_four_mod_n())
    }

    /// Wraps an already reduced scalar, rejecting zero.
    pub(crate) fn from_scalar(scalar: Scalar) -> CryptoResult<Self> {
        if scalar.is_zero() {
            return Err(CryptoError::malformed(
                "password",
                "a password deriving a non-zero scalar",
                "a zero scalar",
            ));
        }

        Ok(Self(scalar))
    }

    /// Returns the secret scalar.
    pub fn scalar(&self) -> &Scalar {
        &self.0
    }

    /// Minimal big-endian encoding of the scalar, wiped on drop.
    pub(crate) fn to_be_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.to_be_bytes())
    }

    /// Computes the matching public key `s·G`.
    pub fn public_key(&self) -> CurvePoint {
        CurvePoint::generator().mul(&self.0)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey([REDACTED])")
    }
}

/// A secret scalar together with its public point.
#[derive(Clone, Debug)]
pub struct KeyPair {
    /// The secret scalar `s`.
    pub secret: SecretKey,
    /// The public key `V = s·G`.
    pub public: CurvePoint,
}

/// Derives the key pair of `password`.
///
/// Fails exactly when [`SecretKey::from_password`] does.
pub fn generate_keypair(password: &[u8]) -> CryptoResult<KeyPair> {
    let secret = SecretKey::from_password(password)?;
    let public = secret.public_key();
    tracing::debug!("derived key pair");

    Ok(KeyPair { secret, public })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_scalar_is_rejected() {
        assert!(matches!(
            SecretKey::from_scalar(Scalar::ZERO),
            Err(CryptoError::MalformedInput { .. })
        ));
    }

    #[test]
    fn non_zero_scalar_is_kept() {
        let secret = SecretKey::from_scalar(Scalar::from(4)).unwrap();
        assert_eq!(secret.scalar(), &Scalar::from(4));
    }
}
