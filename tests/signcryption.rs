use std::convert::Infallible;

use cryptotool::curve::e521::{CurvePoint, FieldElement, Scalar};
use cryptotool::primitives::U576;
use cryptotool::rng::Csprng;
use cryptotool::signcryption::{NONCE_BYTES, TAG_BYTES};
use cryptotool::{
    AsymmetricCryptogram, CryptoError, SecretKey, Signature, SymmetricCryptogram,
    decrypt_password, decrypt_with_key, encrypt_password, encrypt_with_key, generate_keypair,
    sign, verify,
};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_core::TryRngCore;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5EED)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// A randomness source that always fails.
struct BrokenRng;

#[derive(Debug)]
struct EntropyExhausted;

impl std::fmt::Display for EntropyExhausted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("entropy exhausted")
    }
}

impl TryRngCore for BrokenRng {
    type Error = EntropyExhausted;

    fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
        Err(EntropyExhausted)
    }

    fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
        Err(EntropyExhausted)
    }

    fn try_fill_bytes(&mut self, _dst: &mut [u8]) -> Result<(), Self::Error> {
        Err(EntropyExhausted)
    }
}

impl rand_core::TryCryptoRng for BrokenRng {}

// -------------------------------------------------------
// KEY PAIRS
// -------------------------------------------------------

#[test]
fn keypair_is_deterministic() {
    let a = generate_keypair(b"test").unwrap();
    let b = generate_keypair(b"test").unwrap();
    let c = generate_keypair(b"other").unwrap();

    assert_eq!(a.public, b.public);
    assert_ne!(a.public, c.public);
    assert!(a.public.is_on_curve());
}

#[test]
fn keypair_known_answer() {
    let pair = generate_keypair(b"test").unwrap();

    let x = hex::decode(
        "00b64417678cf17423fbd6d5073ecb6b6177f576c42dede71632de06608c135c90\
         ac96eecf67774d30fe209225f76a1e04408e4fb46aae83b3792333fb59ef5f0c6a",
    )
    .unwrap();
    let y = hex::decode(
        "01fd4c862479a899ada1d59fcd4e8b5df6c816940d7b973eda9e7faf287df35a64\
         6b21e8e2a76bf78add4c570fc737dd2fdf69b5dcd4dc90027b5db39c214d2f754b",
    )
    .unwrap();

    assert_eq!(pair.public.x(), FieldElement::from_be_bytes(&x).unwrap());
    assert_eq!(pair.public.y(), FieldElement::from_be_bytes(&y).unwrap());
}

#[test]
fn secret_scalar_is_multiple_of_four_below_n() {
    let secret = SecretKey::from_password(b"test").unwrap();
    let s = secret.scalar();

    assert_eq!(s.bit(0), 0);
    assert_eq!(s.bit(1), 0);
    assert!(s.to_u576() < Scalar::ORDER_N.to_u576());
}

#[test]
fn secret_key_debug_is_redacted() {
    let pair = generate_keypair(b"test").unwrap();
    let printed = format!("{:?}", pair);

    assert!(printed.contains("REDACTED"));
    assert!(!printed.contains(&format!("{:?}", pair.secret.scalar())));
}

// -------------------------------------------------------
// PASSWORD-BASED ENCRYPTION
// -------------------------------------------------------

#[test]
fn password_round_trip_scenario() {
    init_tracing();
    let mut rng = rng();

    let cryptogram = encrypt_password(b"test", b"test message", &mut rng).unwrap();

    assert_eq!(cryptogram.ciphertext.len(), b"test message".len());
    assert_eq!(
        decrypt_password(b"test", &cryptogram).unwrap(),
        b"test message"
    );
    assert_eq!(
        decrypt_password(b"wrong", &cryptogram),
        Err(CryptoError::TagMismatch)
    );
}

#[test]
fn password_encryption_is_randomized() {
    let mut rng = rng();

    let a = encrypt_password(b"pw", b"same message", &mut rng).unwrap();
    let b = encrypt_password(b"pw", b"same message", &mut rng).unwrap();

    assert_ne!(a.nonce, b.nonce);
    assert_ne!(a.ciphertext, b.ciphertext);
}

#[test]
fn password_empty_message() {
    let mut rng = rng();
    let cryptogram = encrypt_password(b"pw", b"", &mut rng).unwrap();

    assert!(cryptogram.ciphertext.is_empty());
    assert_eq!(decrypt_password(b"pw", &cryptogram).unwrap(), b"");
    assert_eq!(
        decrypt_password(b"other", &cryptogram),
        Err(CryptoError::TagMismatch)
    );
}

#[test]
fn password_tampering_is_detected() {
    let mut rng = rng();
    let cryptogram = encrypt_password(b"pw", b"attack at dawn", &mut rng).unwrap();

    let mut flipped = cryptogram.clone();
    flipped.ciphertext[3] ^= 0x01;
    assert_eq!(decrypt_password(b"pw", &flipped), Err(CryptoError::TagMismatch));

    let mut flipped = cryptogram.clone();
    flipped.tag[0] ^= 0x80;
    assert_eq!(decrypt_password(b"pw", &flipped), Err(CryptoError::TagMismatch));

    let mut flipped = cryptogram;
    flipped.nonce[63] ^= 0x02;
    assert_eq!(decrypt_password(b"pw", &flipped), Err(CryptoError::TagMismatch));
}

#[test]
fn symmetric_wire_format() {
    let mut rng = rng();
    let cryptogram = encrypt_password(b"pw", b"wire", &mut rng).unwrap();
    let bytes = cryptogram.to_bytes();

    assert_eq!(bytes.len(), NONCE_BYTES + 4 + TAG_BYTES);
    assert_eq!(&bytes[..NONCE_BYTES], &cryptogram.nonce);
    assert_eq!(&bytes[bytes.len() - TAG_BYTES..], &cryptogram.tag);

    let parsed = SymmetricCryptogram::from_bytes(&bytes).unwrap();
    assert_eq!(parsed, cryptogram);
    assert_eq!(decrypt_password(b"pw", &parsed).unwrap(), b"wire");
}

#[test]
fn symmetric_wire_format_rejects_short_input() {
    let err = SymmetricCryptogram::from_bytes(&[0u8; NONCE_BYTES + TAG_BYTES - 1]).unwrap_err();

    assert!(matches!(err, CryptoError::MalformedInput { .. }));
}

#[test]
fn randomness_failure_aborts_encryption() {
    let mut broken = BrokenRng;
    let public = generate_keypair(b"pw").unwrap().public;

    assert_eq!(
        encrypt_password(b"pw", b"m", &mut broken),
        Err(CryptoError::RandomnessUnavailable)
    );
    assert_eq!(
        encrypt_with_key(&public, b"m", &mut broken),
        Err(CryptoError::RandomnessUnavailable)
    );
}

#[test]
fn works_with_crate_csprng() {
    let mut rng = Csprng::from_seed([9u8; 64]);
    let cryptogram = encrypt_password(b"pw", b"from the DRBG", &mut rng).unwrap();

    assert_eq!(decrypt_password(b"pw", &cryptogram).unwrap(), b"from the DRBG");
}

#[test]
fn infallible_rngs_qualify() {
    fn assert_try_crypto_rng<R: rand_core::TryCryptoRng<Error = Infallible>>(_: &R) {}

    assert_try_crypto_rng(&rng());
    assert_try_crypto_rng(&Csprng::from_seed([0u8; 64]));
}

// -------------------------------------------------------
// PUBLIC-KEY ENCRYPTION
// -------------------------------------------------------

#[test]
fn public_key_round_trip() {
    init_tracing();
    let mut rng = rng();
    let pair = generate_keypair(b"recipient").unwrap();

    let cryptogram = encrypt_with_key(&pair.public, b"for your eyes only", &mut rng).unwrap();

    assert!(cryptogram.ephemeral.is_on_curve());
    assert_eq!(
        decrypt_with_key(b"recipient", &cryptogram).unwrap(),
        b"for your eyes only"
    );
    assert_eq!(
        decrypt_with_key(b"intruder", &cryptogram),
        Err(CryptoError::TagMismatch)
    );
}

#[test]
fn public_key_tampering_is_detected() {
    let mut rng = rng();
    let pair = generate_keypair(b"recipient").unwrap();
    let cryptogram = encrypt_with_key(&pair.public, b"payload", &mut rng).unwrap();

    let mut flipped = cryptogram.clone();
    flipped.ciphertext[0] ^= 0x10;
    assert_eq!(
        decrypt_with_key(b"recipient", &flipped),
        Err(CryptoError::TagMismatch)
    );

    let mut swapped = cryptogram;
    swapped.ephemeral = CurvePoint::generator();
    assert_eq!(
        decrypt_with_key(b"recipient", &swapped),
        Err(CryptoError::TagMismatch)
    );
}

#[test]
fn asymmetric_wire_format() {
    let mut rng = rng();
    let pair = generate_keypair(b"recipient").unwrap();
    let cryptogram = encrypt_with_key(&pair.public, b"serialized", &mut rng).unwrap();

    let bytes = cryptogram.to_bytes();
    assert_eq!(bytes.len(), 66 + 66 + 10 + TAG_BYTES);
    assert_eq!(&bytes[..66], &cryptogram.ephemeral.x().to_be_bytes());
    assert_eq!(&bytes[66..132], &cryptogram.ephemeral.y().to_be_bytes());

    let parsed = AsymmetricCryptogram::from_bytes(&bytes).unwrap();
    assert_eq!(parsed, cryptogram);
    assert_eq!(decrypt_with_key(b"recipient", &parsed).unwrap(), b"serialized");
}

#[test]
fn asymmetric_wire_format_rejects_point_off_curve() {
    let mut rng = rng();
    let pair = generate_keypair(b"recipient").unwrap();
    let mut bytes = encrypt_with_key(&pair.public, b"x", &mut rng)
        .unwrap()
        .to_bytes();

    bytes[131] ^= 0x01;

    assert!(matches!(
        AsymmetricCryptogram::from_bytes(&bytes),
        Err(CryptoError::MalformedInput { .. })
    ));
    assert!(matches!(
        AsymmetricCryptogram::from_bytes(&bytes[..100]),
        Err(CryptoError::MalformedInput { .. })
    ));
}

// -------------------------------------------------------
// SIGNATURES
// -------------------------------------------------------

fn flip_bit(scalar: &Scalar, bit: usize) -> Scalar {
    let mut bytes = scalar.to_u576().to_be_bytes();
    bytes[U576::BYTES - 1 - bit / 8] ^= 1 << (bit % 8);
    Scalar::from_be_bytes(&bytes).unwrap()
}

#[test]
fn sign_then_verify() {
    init_tracing();
    let pair = generate_keypair(b"signer").unwrap();
    let signature = sign(b"signer", b"signed statement").unwrap();

    assert!(verify(&pair.public, &signature, b"signed statement"));
    assert!(signature.verify_attached(&pair.public));
    assert!(signature.z.to_u576() < Scalar::ORDER_R.to_u576());
}

#[test]
fn signing_is_deterministic() {
    assert_eq!(sign(b"signer", b"m").unwrap(), sign(b"signer", b"m").unwrap());
    assert_ne!(sign(b"signer", b"m").unwrap().h, sign(b"signer", b"n").unwrap().h);
}

#[test]
fn verify_rejects_wrong_key_or_message() {
    let other = generate_keypair(b"someone else").unwrap();
    let pair = generate_keypair(b"signer").unwrap();
    let signature = sign(b"signer", b"statement").unwrap();

    assert!(!verify(&other.public, &signature, b"statement"));
    assert!(!verify(&pair.public, &signature, b"Statement"));
    assert!(!signature.detached().verify_attached(&pair.public));
}

#[test]
fn flipping_message_h_or_z_bits_breaks_verification() {
    let pair = generate_keypair(b"signer").unwrap();
    let message = b"bit flips".to_vec();
    let signature = sign(b"signer", &message).unwrap();

    for bit in [0usize, 7, 8 * 4 + 3] {
        let mut m = message.clone();
        m[bit / 8] ^= 1 << (bit % 8);
        assert!(!verify(&pair.public, &signature, &m));
    }

    for bit in [0usize, 200, 511] {
        let mut flipped = signature.clone();
        flipped.h = flip_bit(&signature.h, bit);
        assert!(!verify(&pair.public, &flipped, &message));
    }

    for bit in [0usize, 300, 518] {
        let mut flipped = signature.clone();
        flipped.z = flip_bit(&signature.z, bit);
        assert!(!verify(&pair.public, &flipped, &message));
    }
}

#[test]
fn signature_wire_format() {
    let pair = generate_keypair(b"signer").unwrap();
    let signature = sign(b"signer", b"self-contained").unwrap();

    let bytes = signature.to_bytes();
    let h = signature.h.to_be_bytes();

    assert_eq!(bytes[0], 1);
    assert_eq!(bytes[1] as usize, h.len());
    assert_eq!(&bytes[2..2 + h.len()], h.as_slice());
    assert!(bytes.ends_with(b"self-contained"));

    let parsed = Signature::from_bytes(&bytes).unwrap();
    assert_eq!(parsed, signature);
    assert!(parsed.verify_attached(&pair.public));

    let detached = Signature::from_bytes(&signature.detached().to_bytes()).unwrap();
    assert_eq!(detached.message, None);
    assert!(verify(&pair.public, &detached, b"self-contained"));
}

#[test]
fn signature_wire_format_rejects_malformed_input() {
    let bytes = sign(b"signer", b"m").unwrap().detached().to_bytes();

    for cut in [0, 1, 5, bytes.len() - 1] {
        assert!(matches!(
            Signature::from_bytes(&bytes[..cut]),
            Err(CryptoError::MalformedInput { .. })
        ));
    }

    assert!(Signature::from_bytes(&[1, 73]).is_err());
    assert!(Signature::from_bytes(&[0]).is_err());
}

#[test]
fn signature_wire_format_rejects_non_minimal_integers() {
    let signature = sign(b"signer", b"m").unwrap().detached();
    let h = signature.h.to_be_bytes();
    let z = signature.z.to_be_bytes();

    // h with a leading zero byte and its length bumped by one.
    let mut padded = vec![1, (h.len() + 1) as u8, 0];
    padded.extend_from_slice(&h);
    padded.extend_from_slice(&[1, z.len() as u8]);
    padded.extend_from_slice(&z);

    assert!(matches!(
        Signature::from_bytes(&padded),
        Err(CryptoError::MalformedInput { .. })
    ));

    // A single zero byte is the minimal encoding of zero.
    let zero = Signature::from_bytes(&[1, 1, 0, 1, 1, 0]).unwrap();
    assert_eq!(zero.h, Scalar::ZERO);
    assert_eq!(zero.z, Scalar::ZERO);
}

#[test]
fn signature_wire_format_rejects_unreduced_response() {
    let pair = generate_keypair(b"signer").unwrap();
    let signature = sign(b"signer", b"m").unwrap().detached();

    // z + r is congruent to z and would still verify if it were accepted.
    let shifted = Signature {
        z: Scalar::from_u576(signature.z.to_u576() + Scalar::ORDER_R.to_u576()),
        ..signature.clone()
    };
    assert!(verify(&pair.public, &shifted, b"m"));

    assert!(matches!(
        Signature::from_bytes(&shifted.to_bytes()),
        Err(CryptoError::MalformedInput { .. })
    ));

    let order = Signature {
        z: Scalar::ORDER_R,
        ..signature.clone()
    };
    assert!(Signature::from_bytes(&order.to_bytes()).is_err());

    assert_eq!(Signature::from_bytes(&signature.to_bytes()).unwrap(), signature);
}

#[test]
fn challenge_wider_than_512_bits_is_rejected() {
    let mut bytes = vec![1, 65, 1];
    bytes.extend_from_slice(&[0u8; 64]);
    bytes.extend_from_slice(&[1, 1, 5]);

    assert!(matches!(
        Signature::from_bytes(&bytes),
        Err(CryptoError::MalformedInput { .. })
    ));
}

#[test]
fn password_operations_share_one_secret() {
    let pair = generate_keypair(b"shared").unwrap();
    let secret = SecretKey::from_password(b"shared").unwrap();

    assert_eq!(secret.public_key(), pair.public);

    let signature = sign(b"shared", b"m").unwrap();
    assert!(verify(&pair.public, &signature, b"m"));

    let cryptogram = encrypt_with_key(&pair.public, b"m", &mut rng()).unwrap();
    assert_eq!(decrypt_with_key(b"shared", &cryptogram).unwrap(), b"m");
}
