//! benches/kdf.rs
//! PBKDF2 cost per algorithm and iteration count
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pbkdf2_hmac_rs::{derive, Algorithm, DerivationRequest};
use std::hint::black_box;
use std::time::Duration;

fn kdf_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("PBKDF2");
    // Faster runs for slow high-iter benches
    group.measurement_time(Duration::from_secs(8));
    group.sample_size(20);

    for algorithm in Algorithm::ALL {
        for &iters in &[1_000u32, 10_000, 100_000] {
            let descriptor = algorithm.descriptor();
            let request = DerivationRequest::new(
                descriptor,
                "benchmark-password",
                [0x42u8; 16],
                iters,
                descriptor.digest_size() as u32,
            )
            .unwrap();

            let id = BenchmarkId::new(algorithm.name(), iters);
            group.bench_with_input(id, &request, |b, request| {
                b.iter(|| black_box(derive(black_box(request)).unwrap()));
            });
        }
    }

    group.finish();
}

fn output_length_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("PBKDF2-SHA-256 output blocks");
    group.sample_size(20);

    // Each extra digest-sized block repeats the full iteration loop.
    for &output_len in &[32u32, 64, 128] {
        let request = DerivationRequest::new(
            Algorithm::Sha256.descriptor(),
            "benchmark-password",
            "benchmark-salt",
            10_000,
            output_len,
        )
        .unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(output_len), &request, |b, request| {
            b.iter(|| black_box(derive(black_box(request)).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, kdf_benches, output_length_benches);
criterion_main!(benches);
