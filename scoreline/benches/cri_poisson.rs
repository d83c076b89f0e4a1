use criterion::{criterion_group, criterion_main, Criterion};
use scoreline::histogram::Histogram;
use scoreline::poisson::Poisson;
use scoreline::random::RandomSource;

fn criterion_benchmark(c: &mut Criterion) {
    let mut rand = RandomSource::Seeded(42).into_rand();

    {
        // sanity check
        let samples = Poisson::new(1.5).unwrap().sample_n(1_000, &mut rand);
        assert_eq!(1_000, Histogram::tabulate(&samples).total());
    }

    c.bench_function("cri_poisson_sample_1.5", |b| {
        let poisson = Poisson::new(1.5).unwrap();
        b.iter(|| poisson.sample(&mut rand));
    });

    c.bench_function("cri_poisson_sample_75", |b| {
        let poisson = Poisson::new(75.0).unwrap();
        b.iter(|| poisson.sample(&mut rand));
    });

    c.bench_function("cri_histogram_10k", |b| {
        let samples = Poisson::new(2.0).unwrap().sample_n(10_000, &mut rand);
        b.iter(|| Histogram::tabulate(&samples));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
