//! Schnorr signatures over E521.
//!
//! ```text
//! s = 4 · KMACXOF256(pw, "", 512, "K") mod n,   V = s·G
//! k = 4 · KMACXOF256(s, m, 512, "N") mod n,     U = k·G
//! h = KMACXOF256(U.x, m, 512, "T")
//! z = (k − h·s) mod r
//! ```
//!
//! Verification recomputes `U' = z·G + h·V` and accepts iff
//! `KMACXOF256(U'.x, m, 512, "T") = h`. Since `G` has order `r`,
//! `z·G + h·V = (k − h·s)·G + h·s·G = k·G = U`.
//!
//! The nonce `k` is derived from the secret scalar and the message, so
//! signing needs no randomness and a nonce is never reused across two
//! different messages.
//!
//! Wire format:
//!
//! ```text
//! left_encode(|h|) ‖ h ‖ left_encode(|z|) ‖ z ‖ [message]
//! ```
//!
//! with `h` and `z` as minimal big-endian integers, lengths in bytes.
//! Parsing accepts only that encoding: no leading zero bytes, `h` at most
//! 512 bits and `z` below `r`, so every signature has a single byte form.

use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use super::keypair::SecretKey;
use crate::curve::e521::{CurvePoint, Scalar};
use crate::error::{CryptoError, CryptoResult};
use crate::hash::keccak::{left_decode, left_encode, tagged_hash};

/// Byte width of the challenge, a 512-bit KMAC output.
const CHALLENGE_BYTES: usize = 64;

/// Byte width of `r`, and so the widest canonical response.
const RESPONSE_BYTES: usize = 65;

const NONCE_CUSTOM: &str = "N";
const CHALLENGE_CUSTOM: &str = "T";

/// A Schnorr signature, optionally carrying the signed message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    /// Challenge `h`, a 512-bit KMAC output read as an integer.
    pub h: Scalar,
    /// Response `z`, reduced modulo `r`.
    pub z: Scalar,
    /// The signed message, when the signature is self-contained.
    pub message: Option<Vec<u8>>,
}

impl Signature {
    /// Verifies the signature against its own retained message.
    ///
    /// Returns `false` when no message is attached.
    pub fn verify_attached(&self, public: &CurvePoint) -> bool {
        match &self.message {
            Some(message) => verify(public, self, message),
            None => false,
        }
    }

    /// Returns a copy without the retained message.
    pub fn detached(&self) -> Self {
        Self {
            h: self.h,
            z: self.z,
            message: None,
        }
    }

    /// Serializes as `left_encode(|h|) ‖ h ‖ left_encode(|z|) ‖ z ‖ [message]`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let h = self.h.to_be_bytes();
        let z = self.z.to_be_bytes();

        let mut out = left_encode(h.len() as u64);
        out.extend_from_slice(&h);
        out.extend_from_slice(&left_encode(z.len() as u64));
        out.extend_from_slice(&z);

        if let Some(message) = &self.message {
            out.extend_from_slice(message);
        }

        out
    }

    /// Parses the layout written by [`Signature::to_bytes`].
    ///
    /// Trailing bytes after `z` become the retained message; when there
    /// are none the signature is detached.
    ///
    /// # Returns
    /// `MalformedInput` for truncated input, integers with leading zero
    /// bytes, a challenge wider than 512 bits or a response not below `r`.
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        let (h, rest) = read_integer("signature challenge", bytes, CHALLENGE_BYTES)?;
        let (z, rest) = read_integer("signature response", rest, RESPONSE_BYTES)?;

        if z.to_u576() >= Scalar::ORDER_R.to_u576() {
            return Err(CryptoError::malformed(
                "signature response",
                "an integer below r",
                "an unreduced integer",
            ));
        }

        let message = if rest.is_empty() {
            None
        } else {
            Some(rest.to_vec())
        };

        Ok(Self { h, z, message })
    }
}

/// Reads one length-prefixed, minimally encoded big-endian integer of at
/// most `max_len` bytes from the front of `bytes`.
fn read_integer<'a>(
    what: &'static str,
    bytes: &'a [u8],
    max_len: usize,
) -> CryptoResult<(Scalar, &'a [u8])> {
    let (len, consumed) = left_decode(bytes)?;
    let rest = &bytes[consumed..];

    if len == 0 || len > max_len as u64 {
        return Err(CryptoError::malformed(
            what,
            format!("a length in 1..={max_len}"),
            len,
        ));
    }

    let len = len as usize;
    if rest.len() < len {
        return Err(CryptoError::malformed(
            what,
            format!("{len} bytes"),
            rest.len(),
        ));
    }

    let (value, rest) = rest.split_at(len);
    if len > 1 && value[0] == 0 {
        return Err(CryptoError::malformed(
            what,
            "a minimal big-endian integer",
            "leading zero bytes",
        ));
    }

    let scalar = Scalar::from_be_bytes(value)
        .ok_or_else(|| CryptoError::malformed(what, "at most 576 bits", "a wider integer"))?;

    Ok((scalar, rest))
}

/// The challenge `KMACXOF256(U.x, m, 512, "T")` as an integer.
fn challenge(commitment: &CurvePoint, message: &[u8]) -> Scalar {
    let ux = commitment.x().to_be_bytes_trimmed();
    Scalar::from_digest(&tagged_hash(&ux, message, CHALLENGE_CUSTOM))
}

/// Signs `message` with the key pair derived from `password`.
///
/// The returned signature retains a copy of `message`; use
/// [`Signature::detached`] to drop it.
///
/// # Returns
/// `MalformedInput` when the password derives the zero scalar, as for
/// [`generate_keypair`](super::generate_keypair).
pub fn sign(password: &[u8], message: &[u8]) -> CryptoResult<Signature> {
    let secret = SecretKey::from_password(password)?;
    let s = secret.scalar();

    let s_bytes = secret.to_be_bytes();
    let nonce_digest = Zeroizing::new(tagged_hash(&s_bytes, message, NONCE_CUSTOM));
    let k = Zeroizing::new(Scalar::from_digest(&nonce_digest).times_four_mod_n());

    let commitment = CurvePoint::generator().mul(&k);
    let h = challenge(&commitment, message);
    let z = k.sub_mod_r(&h.mul_mod_r(s));

    tracing::debug!(message_len = message.len(), "signed message");

    Ok(Signature {
        h,
        z,
        message: Some(message.to_vec()),
    })
}

/// Verifies `signature` on `message` under `public`.
///
/// The retained message of `signature`, if any, is ignored.
pub fn verify(public: &CurvePoint, signature: &Signature, message: &[u8]) -> bool {
    let commitment =
        CurvePoint::generator().mul(&signature.z) + public.mul(&signature.h);
    let expected = challenge(&commitment, message);

    let valid = bool::from(expected.ct_eq(&signature.h));
    tracing::debug!(message_len = message.len(), valid, "verified signature");

    valid
}
