//! Performance benchmarks for match scoring and ranking using Criterion.rs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ride_core::recommend::{rank_candidates, RecommendationConfig, RideCandidate};
use ride_core::scoring::{calculate_match_score, ScoreWeights};
use ride_core::test_helpers::{test_candidate, test_now, test_user_preferences};

fn candidates(count: usize) -> Vec<RideCandidate> {
    (0..count)
        .map(|i| {
            let mut candidate = test_candidate();
            candidate.ride.id = format!("ride-{i}");
            candidate.ride.price_per_seat = Some(2.0 + (i % 10) as f64);
            candidate.driver.rating = Some(3.0 + (i % 5) as f64 * 0.5);
            candidate
        })
        .collect()
}

fn bench_single_score(c: &mut Criterion) {
    let candidate = test_candidate();
    let prefs = test_user_preferences();
    let weights = ScoreWeights::default();

    c.bench_function("calculate_match_score", |b| {
        b.iter(|| {
            black_box(calculate_match_score(
                black_box(&candidate.ride),
                black_box(&prefs),
                black_box(&candidate.driver),
                &weights,
            ))
        });
    });
}

fn bench_ranking(c: &mut Criterion) {
    let prefs = test_user_preferences();
    let config = RecommendationConfig::default();
    let now = test_now();

    let mut group = c.benchmark_group("rank_candidates");
    for size in [10usize, 100, 1000] {
        let pool = candidates(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &pool, |b, pool| {
            b.iter(|| black_box(rank_candidates(pool, &prefs, now, &config)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_score, bench_ranking);
criterion_main!(benches);
