use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dh_crypto::{derive_key, DhParameters, KeyAgreementParty, DEFAULT_KEY_SIZE};
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

fn bench_stretch(c: &mut Criterion) {
    let secret = BigUint::parse_bytes(b"DEADBEEFCAFEBABE0123456789ABCDEF", 16).unwrap();
    let mut group = c.benchmark_group("Secret Stretching");
    group.sample_size(10);

    for rounds in [1u32 << 10, 1 << 14, 1 << 18] {
        group.bench_with_input(BenchmarkId::new("SHA-512 rounds", rounds), &rounds, |b, &rounds| {
            b.iter(|| derive_key(black_box(&secret), DEFAULT_KEY_SIZE, rounds))
        });
    }
    group.finish();
}

fn bench_group14_exchange(c: &mut Criterion) {
    let params = Arc::new(DhParameters::rfc3526_group14());
    let mut rng = StdRng::seed_from_u64(0xBE4C4);
    let mut alice = KeyAgreementParty::with_entropy(Arc::clone(&params), &mut rng, 128).unwrap();
    let mut bob = KeyAgreementParty::with_entropy(Arc::clone(&params), &mut rng, 128).unwrap();
    let bob_public = bob.compute_public_value().clone();

    c.bench_function("group14 public value", |b| b.iter(|| alice.compute_public_value().clone()));
    c.bench_function("group14 shared secret", |b| {
        b.iter(|| alice.derive_shared_secret(black_box(&bob_public)))
    });
}

criterion_group!(benches, bench_stretch, bench_group14_exchange);
criterion_main!(benches);
