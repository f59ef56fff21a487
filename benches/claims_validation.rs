//! Claims validation performance benchmarks
//!
//! Benchmarks the validation pipeline over different policy shapes
//! (temporal checks, identity checks, custom claim checks).

use claimgate::{ClaimSet, Clock, ValidationConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample_claims() -> ClaimSet {
    let mut claims = ClaimSet::new();
    claims.set_claim("iss", "https://issuer.example.com").unwrap();
    claims.set_claim("sub", "user123").unwrap();
    claims
        .set_claim("aud", vec!["api".to_string(), "web".to_string()])
        .unwrap();
    claims.set_claim("exp", 1_700_003_600).unwrap();
    claims.set_claim("nbf", 1_699_999_000).unwrap();
    claims.set_claim("iat", 1_699_999_000).unwrap();
    claims.set_claim("email", "email@example.com").unwrap();
    claims
}

fn bench_temporal_checks(c: &mut Criterion) {
    let claims = sample_claims();
    let mut group = c.benchmark_group("temporal");

    let config = ValidationConfig::default().clock(Clock::Fixed(1_700_000_000));
    group.bench_function("valid", |b| {
        b.iter(|| {
            let _ = black_box(&config).validate(black_box(&claims));
        });
    });

    let config = ValidationConfig::default().clock(Clock::Fixed(1_700_010_000));
    group.bench_function("expired", |b| {
        b.iter(|| {
            let _ = black_box(&config).validate(black_box(&claims));
        });
    });

    let config = ValidationConfig::default()
        .clock(Clock::Fixed(1_700_010_000))
        .acceptable_skew(86_400);
    group.bench_function("expired_within_skew", |b| {
        b.iter(|| {
            let _ = black_box(&config).validate(black_box(&claims));
        });
    });

    group.finish();
}

fn bench_opt_in_checks(c: &mut Criterion) {
    let claims = sample_claims();
    let mut group = c.benchmark_group("opt_in");

    let config = ValidationConfig::default()
        .clock(Clock::Fixed(1_700_000_000))
        .require_issuer("https://issuer.example.com")
        .require_subject("user123")
        .require_audience("api");
    group.bench_function("identity_checks", |b| {
        b.iter(|| {
            let _ = black_box(&config).validate(black_box(&claims));
        });
    });

    let config = ValidationConfig::default()
        .clock(Clock::Fixed(1_700_000_000))
        .require_claim("email", "email@example.com");
    group.bench_function("custom_claim_check", |b| {
        b.iter(|| {
            let _ = black_box(&config).validate(black_box(&claims));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_temporal_checks, bench_opt_in_checks);
criterion_main!(benches);
