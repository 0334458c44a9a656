//! Keccak and E521 cryptographic toolkit
//!
//! This crate provides a self-contained stack of cryptographic primitives
//! built from the Keccak-f[1600] permutation and the E521 Edwards curve,
//! composed into password-based encryption, public-key encryption and
//! signatures.
//!
//! The focus is on **clarity, predictability, and auditability**. Every
//! layer is implemented from first principles in this crate; external
//! crates only supply ambient concerns (error derivation, logging, secret
//! wiping, constant-time selection, the operating system entropy source).
//!
//! # Module overview
//!
//! - `hash`
//!   The Keccak-f[1600] permutation, the sponge construction, the
//!   NIST SP 800-185 encodings, and SHA3 / SHAKE256 / cSHAKE256 /
//!   KMACXOF256. Also the byte-level entry points [`hash()`] (SHA3-512) and
//!   [`tagged_hash`] (512-bit KMACXOF256).
//!
//! - `primitives`
//!   `U576`, the fixed-size unsigned integer shared by the field and scalar
//!   arithmetic.
//!
//! - `curve`
//!   E521: field arithmetic modulo `2⁵²¹ − 1`, scalars modulo the group
//!   orders, affine points, the Montgomery ladder and point encodings.
//!
//! - `rng`
//!   A KMACXOF256-based CSPRNG seeded from the operating system, with
//!   rekeying after every request.
//!
//! - `signcryption`
//!   Password-derived key pairs, password-based authenticated encryption,
//!   ECDHIES encryption and Schnorr signatures, with their byte-level wire
//!   formats.
//!
//! - `error`
//!   The crate-wide error type.
//!
//! # Randomness
//!
//! No operation reaches for a global generator. Randomized operations take
//! a `&mut impl rand_core::TryCryptoRng`, so callers choose between
//! [`rng::Csprng`], [`rng::OsRng`] or any other cryptographically secure
//! source, and entropy failures surface as
//! [`CryptoError::RandomnessUnavailable`].
//!
//! # Example
//!
//! ```
//! use cryptotool::rng::Csprng;
//! use cryptotool::{decrypt_password, encrypt_password};
//!
//! let mut rng = Csprng::from_seed([42u8; 64]);
//! let cryptogram = encrypt_password(b"test", b"test message", &mut rng).unwrap();
//!
//! assert_eq!(decrypt_password(b"test", &cryptogram).unwrap(), b"test message");
//! assert!(decrypt_password(b"wrong", &cryptogram).is_err());
//! ```

pub mod curve;
pub mod error;
pub mod hash;
pub mod primitives;
pub mod rng;
pub mod signcryption;

pub use error::{CryptoError, CryptoResult};
pub use hash::{hash, hash_reader, tagged_hash};
pub use signcryption::{
    AsymmetricCryptogram, KeyPair, SecretKey, Signature, SymmetricCryptogram, decrypt_password,
    decrypt_with_key, encrypt_password, encrypt_with_key, generate_keypair, sign, verify,
};
