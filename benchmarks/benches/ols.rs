use benchmarks::{synthetic_lifesat, synthetic_regression};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lifesat::model::linear::LinearRegression;
use lifesat::model::InferenceModel;
use ndarray::array;

fn bench_fit_single_feature(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit_1_feature");
    for n_samples in [27, 1_000, 100_000] {
        let (x, y) = synthetic_lifesat(n_samples, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n_samples), &n_samples, |b, _| {
            b.iter(|| {
                let model = LinearRegression::new()
                    .fit(black_box(&x), black_box(&y))
                    .expect("fit failed");
                black_box(model);
            });
        });
    }
    group.finish();
}

fn bench_fit_many_features(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit_10000_samples");
    for n_features in [2, 8, 32] {
        let (x, y) = synthetic_regression(10_000, n_features, 42);
        group.bench_with_input(
            BenchmarkId::from_parameter(n_features),
            &n_features,
            |b, _| {
                b.iter(|| {
                    let model = LinearRegression::new()
                        .fit(black_box(&x), black_box(&y))
                        .expect("fit failed");
                    black_box(model);
                });
            },
        );
    }
    group.finish();
}

fn bench_predict(c: &mut Criterion) {
    let (x, y) = synthetic_lifesat(1_000, 42);
    let model = LinearRegression::new().fit(&x, &y).expect("fit failed");

    c.bench_function("predict_single", |b| {
        let x_new = array![[37_655.2]];
        b.iter(|| black_box(model.predict(black_box(&x_new)).expect("predict failed")));
    });

    let (batch, _) = synthetic_lifesat(10_000, 7);
    c.bench_function("predict_batch_10000", |b| {
        b.iter(|| black_box(model.predict(black_box(&batch)).expect("predict failed")));
    });
}

criterion_group!(
    benches,
    bench_fit_single_feature,
    bench_fit_many_features,
    bench_predict
);
criterion_main!(benches);
