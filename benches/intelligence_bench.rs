// ABOUTME: Criterion benchmarks for the goal suggestion engine and progress derivations
// ABOUTME: Measures single suggestions per BMI band and batch throughput over synthetic profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

//! Criterion benchmarks for the intelligence crate.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rogerbox::intelligence::{
    calculate_bmi, DeadlinePolicy, GoalSuggestionConfig, GoalSuggestionEngine,
};
use rogerbox::intelligence::progress::CourseProgress;
use rogerbox::models::{Gender, GoalTag, UserProfile};

fn bench_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap_or_default()
}

/// Deterministic spread of profiles across every BMI band and goal mix
#[allow(clippy::cast_precision_loss)]
fn generate_profiles(count: usize) -> Vec<UserProfile> {
    (0..count)
        .map(|index| {
            let height = 150.0 + (index % 45) as f64;
            let weight = 45.0 + ((index * 7) % 80) as f64;
            let goals: Vec<GoalTag> = GoalTag::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| (index >> i) & 1 == 1)
                .map(|(_, tag)| tag)
                .collect();
            UserProfile::new(format!("bench_{index}"), height, weight, Gender::Other)
                .with_goals(goals)
        })
        .collect()
}

fn bench_single_suggestion(c: &mut Criterion) {
    let mut group = c.benchmark_group("goal_suggestion");
    let engine = GoalSuggestionEngine::new();
    let today = bench_today();

    let cases = [
        ("obesity", UserProfile::new("a", 170.0, 90.0, Gender::Female)),
        ("overweight", UserProfile::new("b", 170.0, 78.0, Gender::Female)),
        (
            "normal_goals",
            UserProfile::new("c", 180.0, 75.0, Gender::Male)
                .with_goals([GoalTag::Tone, GoalTag::GainMuscle]),
        ),
        ("underweight", UserProfile::new("d", 170.0, 50.0, Gender::Other)),
    ];

    for (name, profile) in &cases {
        group.bench_with_input(BenchmarkId::new("suggest", name), profile, |b, profile| {
            b.iter(|| engine.suggest(black_box(profile), today));
        });
    }

    group.finish();
}

fn bench_batch_suggestions(c: &mut Criterion) {
    let mut group = c.benchmark_group("goal_suggestion_batch");
    let today = bench_today();
    let legacy = GoalSuggestionEngine::new();
    let weeks = GoalSuggestionEngine::with_config(
        GoalSuggestionConfig::default().with_deadline_policy(DeadlinePolicy::WeekCount),
    );

    for count in [100_usize, 1_000] {
        let profiles = generate_profiles(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("legacy", count), &profiles, |b, profiles| {
            b.iter(|| {
                profiles
                    .iter()
                    .map(|p| legacy.suggest(p, today))
                    .count()
            });
        });
        group.bench_with_input(BenchmarkId::new("week_count", count), &profiles, |b, profiles| {
            b.iter(|| profiles.iter().map(|p| weeks.suggest(p, today)).count());
        });
    }

    group.finish();
}

fn bench_derivations(c: &mut Criterion) {
    let mut group = c.benchmark_group("derivations");
    let today = bench_today();
    let purchased = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap_or_default();

    group.bench_function("calculate_bmi", |b| {
        b.iter(|| calculate_bmi(black_box(72.5), black_box(174.0)));
    });
    group.bench_function("course_progress", |b| {
        b.iter(|| CourseProgress::compute(purchased, black_box(today), 48, black_box(17)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_single_suggestion,
    bench_batch_suggestions,
    bench_derivations
);
criterion_main!(benches);
