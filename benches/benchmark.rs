// Ranking benchmarks over synthetic rating data
use affinity::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// `categories` raters, each rating roughly `density` of `features` items on a 1-5 scale
fn generate_dataset(categories: usize, features: usize, density: f64) -> Dataset {
    let mut rng = StdRng::seed_from_u64(42);
    let mut dataset = Dataset::new();

    for c in 0..categories {
        let category = format!("user{}", c);
        dataset.add_category(&category);
        for f in 0..features {
            if rng.random_bool(density) {
                let rating = rng.random_range(1..=10) as f64 / 2.0;
                dataset.set_value(&category, &format!("item{}", f), rating);
            }
        }
    }

    dataset
}

fn benchmark_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metric");
    let dataset = generate_dataset(2, 10_000, 0.3);

    for metric in Metric::ALL {
        group.bench_function(metric.as_str(), |b| {
            b.iter(|| black_box(metric.score(&dataset, black_box("user0"), black_box("user1"))));
        });
    }

    group.finish();
}

fn benchmark_similar_categories(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_similar_categories");

    for size in [100, 1000].iter() {
        let dataset = generate_dataset(*size, 200, 0.1);
        let recommender = Recommender::new(&dataset);

        group.bench_with_input(BenchmarkId::new("correlation", size), size, |b, _| {
            b.iter(|| {
                let results = recommender.top_similar_categories(black_box("user0"), 10, &Metric::Correlation);
                black_box(results);
            });
        });
    }

    group.finish();
}

fn benchmark_recommended_features(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_recommended_features");

    for size in [100, 1000].iter() {
        let dataset = generate_dataset(*size, 200, 0.1);
        let recommender = Recommender::new(&dataset);

        for metric in Metric::ALL {
            group.bench_with_input(BenchmarkId::new(metric.as_str(), size), size, |b, _| {
                b.iter(|| {
                    let results = recommender.top_recommended_features(black_box("user0"), 10, &metric);
                    black_box(results);
                });
            });
        }
    }

    group.finish();
}

fn benchmark_categories_for_feature(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_categories_for_feature");
    let dataset = generate_dataset(200, 200, 0.1);
    let recommender = Recommender::new(&dataset);

    for include_predictions in [false, true] {
        group.bench_with_input(
            BenchmarkId::new("distance", include_predictions),
            &include_predictions,
            |b, &include| {
                b.iter(|| {
                    let results =
                        recommender.top_categories_for_feature(black_box("item0"), 10, &Metric::Distance, include);
                    black_box(results);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_metrics,
    benchmark_similar_categories,
    benchmark_recommended_features,
    benchmark_categories_for_feature
);
criterion_main!(benches);
