use cryptotool::curve::e521::{CurvePoint, FieldElement, Scalar};
use cryptotool::{generate_keypair, sign, verify};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_field(c: &mut Criterion) {
    let a = CurvePoint::generator().y();
    let b = FieldElement::from(0xDEAD_BEEF);

    c.bench_function("e521 field mul", |bench| bench.iter(|| black_box(a) * black_box(b)));
    c.bench_function("e521 field invert", |bench| bench.iter(|| black_box(a).invert()));
}

pub fn bench_scalar_mul(c: &mut Criterion) {
    let g = CurvePoint::generator();
    let k = Scalar::from_be_bytes(&[0xA5; 64]).unwrap().times_four_mod_n();

    c.bench_function("e521 scalar mul", |b| b.iter(|| g.mul(black_box(&k))));
}

pub fn bench_signatures(c: &mut Criterion) {
    let pair = generate_keypair(b"bench").unwrap();
    let signature = sign(b"bench", b"message").unwrap();

    c.bench_function("schnorr sign", |b| b.iter(|| sign(b"bench", black_box(b"message"))));
    c.bench_function("schnorr verify", |b| {
        b.iter(|| verify(&pair.public, &signature, black_box(b"message")))
    });
}

criterion_group!(benches, bench_field, bench_scalar_mul, bench_signatures);
criterion_main!(benches);
