//! Error type shared by every fallible operation of the crate.
//!
//! Authentication failures are deliberately collapsed into a single
//! [`CryptoError::TagMismatch`] without any detail: callers learn that a
//! cryptogram was rejected, never which recomputed value differed.

use thiserror::Error;

/// Errors returned by the hashing, curve and signcryption layers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Authentication failed while decrypting.
    #[error("decryption failed")]
    TagMismatch,

    /// No point with the requested x-coordinate and parity exists.
    #[error("no square root exists for the requested curve point")]
    NoSquareRoot,

    /// A serialized structure has the wrong shape.
    #[error("malformed {what}: expected {expected}, got {actual}")]
    MalformedInput {
        /// The structure or field being parsed.
        what: &'static str,
        /// Description of the expected shape.
        expected: String,
        /// Description of what was found.
        actual: String,
    },

    /// The injected randomness source failed.
    #[error("secure randomness unavailable")]
    RandomnessUnavailable,
}

impl CryptoError {
    pub(crate) fn malformed(
        what: &'static str,
        expected: impl ToString,
        actual: impl ToString,
    ) -> Self {
        CryptoError::MalformedInput {
            what,
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

/// Result alias used across the crate.
pub type CryptoResult<T> = Result<T, CryptoError>;
