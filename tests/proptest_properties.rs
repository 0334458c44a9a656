//! Property-based tests using proptest.
//!
//! These tests verify the algebraic and round-trip properties of the crate:
//! - Field: square roots square back and honor the requested parity
//! - Group: scalar multiplication distributes over scalar addition and
//!   commutes with scalar multiplication modulo r
//! - Password and public-key encryption round-trip, wrong passwords fail
//! - Signatures verify, and fail on a tampered message
//! - Encodings and the streaming sponge agree with their one-shot forms
//!
//! Scalar multiplications dominate the running time, so the curve
//! properties run with few cases.

use cryptotool::curve::e521::{CurvePoint, FieldElement, Scalar, mod_sqrt};
use cryptotool::hash::keccak::{
    Sponge, absorb, left_decode, left_encode, right_decode, right_encode, squeeze,
};
use cryptotool::primitives::U576;
use cryptotool::{
    CryptoError, SymmetricCryptogram, decrypt_password, decrypt_with_key, encrypt_password,
    encrypt_with_key, generate_keypair, sign, verify,
};

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Generate arbitrary 64-byte scalars
fn arb_scalar() -> impl Strategy<Value = Scalar> {
    prop::collection::vec(any::<u8>(), 64)
        .prop_map(|bytes| Scalar::from_be_bytes(&bytes).expect("64 bytes fit in 576 bits"))
}

/// Generate arbitrary field elements
fn arb_field_element() -> impl Strategy<Value = FieldElement> {
    prop::collection::vec(any::<u8>(), 72)
        .prop_map(|bytes| FieldElement::reduce(&U576::from_be_bytes(&bytes).expect("72 bytes")))
}

/// Generate arbitrary messages (0-256 bytes)
fn arb_message() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..256)
}

/// Generate arbitrary passwords (1-32 bytes)
fn arb_password() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 1..32)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Squares always have a root of either parity.
    #[test]
    fn sqrt_of_square(v in arb_field_element(), lsb in any::<bool>()) {
        let square = v.square();
        let root = mod_sqrt(&square, lsb);

        prop_assert!(root.is_some());
        let root = root.unwrap();
        prop_assert_eq!(root.square(), square);
        if !square.is_zero() {
            prop_assert_eq!(root.is_odd(), lsb);
        }
    }

    /// Whatever comes back from mod_sqrt is a genuine root.
    #[test]
    fn sqrt_is_sound(v in arb_field_element(), lsb in any::<bool>()) {
        if let Some(root) = mod_sqrt(&v, lsb) {
            prop_assert_eq!(root.square(), v);
        }
    }

    /// Field arithmetic identities.
    #[test]
    fn field_inverse(v in arb_field_element()) {
        prop_assume!(!v.is_zero());
        prop_assert_eq!(v * v.invert(), FieldElement::ONE);
        prop_assert_eq!(v - v, FieldElement::ZERO);
        prop_assert_eq!(v + (-v), FieldElement::ZERO);
    }

    /// left/right encodings decode to their input.
    #[test]
    fn encodings_round_trip(value in any::<u64>()) {
        let left = left_encode(value);
        prop_assert_eq!(left_decode(&left).unwrap(), (value, left.len()));

        let right = right_encode(value);
        prop_assert_eq!(right_decode(&right).unwrap(), (value, right.len()));
    }

    /// Chunked absorption equals one-shot absorption.
    #[test]
    fn streaming_sponge(data in prop::collection::vec(any::<u8>(), 0..600), split in 1usize..200) {
        let mut one_shot = absorb(&data, 512, 0x04);

        let mut sponge = Sponge::new(512);
        for chunk in data.chunks(split) {
            sponge.update(chunk);
        }
        let mut streamed = sponge.finalize(0x04);

        prop_assert_eq!(squeeze(&mut streamed, 256, 1088), squeeze(&mut one_shot, 256, 1088));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// decrypt_password(pw, encrypt_password(pw, m)) == m, other passwords fail.
    #[test]
    fn password_round_trip(
        seed in any::<u64>(),
        password in arb_password(),
        message in arb_message(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let cryptogram = encrypt_password(&password, &message, &mut rng).unwrap();
        let parsed = SymmetricCryptogram::from_bytes(&cryptogram.to_bytes()).unwrap();

        prop_assert_eq!(decrypt_password(&password, &parsed).unwrap(), message);

        let mut wrong = password.clone();
        wrong.push(0);
        prop_assert_eq!(decrypt_password(&wrong, &parsed), Err(CryptoError::TagMismatch));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(4))]

    /// (k + t)·G == k·G + t·G
    #[test]
    fn scalar_addition_distributes(k in arb_scalar(), t in arb_scalar()) {
        let g = CurvePoint::generator();

        prop_assert_eq!(g.mul(&k.add_mod_r(&t)), g.mul(&k) + g.mul(&t));
    }

    /// (k·t)·G == (t·k)·G == ((k·t) mod r)·G
    #[test]
    fn scalar_multiplication_commutes(k in arb_scalar(), t in arb_scalar()) {
        let g = CurvePoint::generator();
        let kt = k.mul_mod_r(&t);

        prop_assert_eq!(g.mul(&k).mul(&t), g.mul(&kt));
        prop_assert_eq!(g.mul(&t).mul(&k), g.mul(&kt));
    }

    /// Compressed encodings recover the same point.
    #[test]
    fn compressed_point_round_trip(k in arb_scalar()) {
        let p = CurvePoint::generator().mul(&k);

        prop_assert_eq!(CurvePoint::from_compressed(&p.to_compressed()).unwrap(), p);
        prop_assert_eq!(CurvePoint::from_bytes(&p.to_bytes()).unwrap(), p);
    }

    /// decrypt_with_key(pw, encrypt_with_key(V, m)) == m
    #[test]
    fn public_key_round_trip(
        seed in any::<u64>(),
        password in arb_password(),
        message in arb_message(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let pair = generate_keypair(&password).unwrap();
        let cryptogram = encrypt_with_key(&pair.public, &message, &mut rng).unwrap();

        prop_assert_eq!(decrypt_with_key(&password, &cryptogram).unwrap(), message);
    }

    /// verify(V, sign(pw, m), m) holds and fails on any other message.
    #[test]
    fn signature_round_trip(password in arb_password(), message in arb_message(), flip in any::<u8>()) {
        let pair = generate_keypair(&password).unwrap();
        let signature = sign(&password, &message).unwrap();

        prop_assert!(verify(&pair.public, &signature, &message));

        let mut tampered = message.clone();
        if tampered.is_empty() {
            tampered.push(flip);
        } else {
            let index = flip as usize % tampered.len();
            tampered[index] ^= 1 << (flip % 8);
        }
        prop_assert!(!verify(&pair.public, &signature, &tampered));
    }
}
