// ABOUTME: Criterion benchmarks for the strength recommendation engine
// ABOUTME: Measures full recommendation latency, regression fitting, and batch throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the recommendation engine.
//!
//! The regression tier refits from zero on every call, so latency grows with
//! the history length handed to the engine.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{generate_sessions, request_for, HistorySize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pierre_strength::intelligence::features::TrainingSet;
use pierre_strength::intelligence::session_metrics::summarize_chronologically;
use pierre_strength::intelligence::{
    estimated_1rm, fit_linear_regression, GradientDescentParams, RecommendationEngine,
    RecommendationEngineConfig,
};
use pierre_strength::models::{CoachingStyle, Goal};

fn bench_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");
    let engine = RecommendationEngine::with_config(RecommendationEngineConfig::default());

    for size in [HistorySize::Short, HistorySize::Window, HistorySize::Year] {
        let sessions = generate_sessions(size.count());
        group.throughput(Throughput::Elements(size.count() as u64));
        group.bench_with_input(
            BenchmarkId::new("history", size.name()),
            &sessions,
            |b, sessions| {
                b.iter(|| engine.recommend(black_box(&request_for(sessions))));
            },
        );
    }

    group.finish();
}

fn bench_regression_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("regression_fit");
    let params = GradientDescentParams::default();

    for size in [HistorySize::Short, HistorySize::Window, HistorySize::Year] {
        let sessions = generate_sessions(size.count());
        let summaries = summarize_chronologically(&sessions);
        let training =
            TrainingSet::from_summaries(&summaries, CoachingStyle::Balanced, Goal::Hypertrophy, 3);

        group.bench_with_input(
            BenchmarkId::new("pairs", training.len()),
            &training,
            |b, training| {
                b.iter(|| {
                    fit_linear_regression(
                        black_box(&training.features),
                        black_box(&training.targets),
                        &params,
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let engine = RecommendationEngine::with_config(RecommendationEngineConfig::default());
    let histories: Vec<_> = (0..32)
        .map(|offset| generate_sessions(HistorySize::Window.count() + offset % 4))
        .collect();
    let requests: Vec<_> = histories.iter().map(|sessions| request_for(sessions)).collect();

    let mut group = c.benchmark_group("recommend_batch");
    group.throughput(Throughput::Elements(requests.len() as u64));
    group.bench_function("32_exercises", |b| {
        b.iter(|| engine.recommend_batch(black_box(&requests)));
    });
    group.finish();
}

fn bench_estimated_1rm(c: &mut Criterion) {
    c.bench_function("estimated_1rm", |b| {
        b.iter(|| {
            (1..=20_u32)
                .map(|reps| estimated_1rm(black_box(100.0), reps))
                .sum::<f64>()
        });
    });
}

criterion_group!(
    benches,
    bench_recommend,
    bench_regression_fit,
    bench_batch,
    bench_estimated_1rm
);
criterion_main!(benches);
