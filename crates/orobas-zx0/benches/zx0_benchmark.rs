//! Benchmarks for ZX0 optimal-parse compression.
//!
//! Run with: `cargo bench -p orobas-zx0`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use orobas_core::Compressor;
use orobas_zx0::Zx0Codec;

/// Generate test data with varying compressibility.
fn generate_test_data(size: usize, compressibility: f64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut data = Vec::with_capacity(size);

    if compressibility > 0.9 {
        // Highly repetitive data
        let pattern = b"ABCDEFGHIJKLMNOP";
        while data.len() < size {
            data.extend_from_slice(pattern);
        }
        data.truncate(size);
    } else if compressibility > 0.5 {
        // Mixed data - some patterns, some randomness
        let phrases: &[&[u8]] = &[
            b"The quick brown fox jumps over the lazy dog. ",
            b"Pack my box with five dozen liquor jugs! ",
            b"How vexingly quick daft zebras jump!! ",
        ];
        while data.len() < size {
            if rng.gen_bool(compressibility) {
                let phrase = phrases[rng.gen_range(0..phrases.len())];
                data.extend_from_slice(phrase);
            } else {
                data.push(rng.gen::<u8>());
            }
        }
        data.truncate(size);
    } else {
        // Random/incompressible data
        data.resize(size, 0);
        rng.fill(&mut data[..]);
    }

    data
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("zx0_compress");

    for &size in &[1024usize, 4096] {
        for &(label, compressibility) in
            &[("repetitive", 0.95), ("mixed", 0.7), ("random", 0.0)]
        {
            let data = generate_test_data(size, compressibility);
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(
                BenchmarkId::new(label, size),
                &data,
                |b, data| {
                    let codec = Zx0Codec::new();
                    b.iter(|| codec.compress(black_box(data)).unwrap());
                },
            );
        }
    }

    group.finish();
}

fn bench_narrow_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("zx0_compress_narrow_window");

    // The search is O(size * window); the 2176-byte window keeps larger
    // inputs tractable for comparison.
    let size = 16 * 1024;
    let data = generate_test_data(size, 0.7);
    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function(BenchmarkId::new("mixed", size), |b| {
        let codec = Zx0Codec::new().with_offset_limit(2176);
        b.iter(|| codec.compress(black_box(&data)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_compress, bench_narrow_window);
criterion_main!(benches);
