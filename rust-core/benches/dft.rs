use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fixed_dft::{FixedDft, FrequencyRange, SUPPORTED_SIZES};

fn test_signal(n: usize) -> Vec<i16> {
    (0..n)
        .map(|k| ((k * 7919) % 2001) as i16 - 1000)
        .collect()
}

fn magnitude_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("dft_magnitude");
    for &n in SUPPORTED_SIZES.iter() {
        let engine = FixedDft::new(n).expect("supported size");
        let samples = test_signal(n);
        let mut mag = vec![0u32; n];
        group.bench_with_input(BenchmarkId::from_parameter(n), &samples, |b, samples| {
            b.iter(|| engine.magnitude_into(black_box(samples), &mut mag))
        });
    }
    group.finish();
}

fn psd_band_bench(c: &mut Criterion) {
    let engine = FixedDft::new(256).expect("supported size");
    let samples = test_signal(256);
    let mut psd = vec![0u64; 256];
    let band = FrequencyRange::new(1000.0, 50.0, 150.0);
    c.bench_function("dft_psd_band_256", |b| {
        b.iter(|| engine.psd_range_into(band, black_box(&samples), &mut psd))
    });
}

criterion_group!(benches, magnitude_bench, psd_band_bench);
criterion_main!(benches);
