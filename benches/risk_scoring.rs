use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grc_risk_engine::config::RiskRangeConfig;
use grc_risk_engine::engine::{
    aggregate_validation, classify, combine_controls, CombineMode, ResidualStrategy,
    DEFAULT_MAX_EFFECTIVENESS,
};
use grc_risk_engine::models::{ControlEffect, EffectTarget, ValidationStatus};
use grc_risk_engine::RiskScorer;

fn benchmark_inherent_and_classify(c: &mut Criterion) {
    let scorer = RiskScorer::new();
    let ranges = RiskRangeConfig::default();

    c.bench_function("inherent_risk", |b| {
        b.iter(|| scorer.inherent_risk(black_box(4.0), black_box(5.0)))
    });

    c.bench_function("classify", |b| {
        b.iter(|| classify(black_box(13.0), black_box(&ranges)))
    });
}

fn benchmark_residual(c: &mut Criterion) {
    let scorer = RiskScorer::new();
    let controls: Vec<ControlEffect> = (0..10)
        .map(|i| {
            let target = match i % 3 {
                0 => EffectTarget::Probability,
                1 => EffectTarget::Impact,
                _ => EffectTarget::Both,
            };
            ControlEffect::new(10.0 + i as f64 * 5.0, Some(target))
        })
        .collect();

    c.bench_function("residual_effect_target_split", |b| {
        b.iter(|| {
            scorer.residual_risk(
                black_box(5.0),
                black_box(4.0),
                black_box(&controls),
                ResidualStrategy::EffectTargetSplit,
            )
        })
    });

    c.bench_function("residual_compound_combination", |b| {
        b.iter(|| {
            scorer.residual_risk(
                black_box(5.0),
                black_box(4.0),
                black_box(&controls),
                ResidualStrategy::CompoundCombination,
            )
        })
    });

    let effectiveness: Vec<f64> = controls.iter().map(|c| c.effectiveness).collect();
    c.bench_function("combine_controls_compound", |b| {
        b.iter(|| {
            combine_controls(
                black_box(&effectiveness),
                CombineMode::Compound,
                DEFAULT_MAX_EFFECTIVENESS,
            )
        })
    });
}

fn benchmark_validation_aggregation(c: &mut Criterion) {
    let links: Vec<ValidationStatus> = (0..100)
        .map(|i| match i % 4 {
            0 => ValidationStatus::Validated,
            1 => ValidationStatus::PendingValidation,
            2 => ValidationStatus::Observed,
            _ => ValidationStatus::Validated,
        })
        .collect();

    c.bench_function("aggregate_validation_100_links", |b| {
        b.iter(|| aggregate_validation(black_box(&links)))
    });
}

criterion_group!(
    benches,
    benchmark_inherent_and_classify,
    benchmark_residual,
    benchmark_validation_aggregation
);
criterion_main!(benches);
