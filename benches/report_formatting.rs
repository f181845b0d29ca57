//! レポート整形とユーザー生成のベンチマーク

use activity_report::services::generation::{generate_logs, generate_user, rng_for};
use activity_report::User;
use criterion::{criterion_group, criterion_main, Criterion};
use std::time::Duration;

/// ユーザー生成のベンチマーク
fn benchmark_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("User Generation");
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("generate_user(max 1000 entries)", |b| {
        let mut ordinal = 0;
        b.iter(|| {
            let mut rng = rng_for(7, ordinal);
            ordinal += 1;
            std::hint::black_box(generate_user(ordinal, 1000, &mut rng))
        })
    });

    group.finish();
}

/// レポート整形のベンチマーク
fn benchmark_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("Report Formatting");
    group.measurement_time(Duration::from_secs(5));

    for entries in [0usize, 100, 999] {
        let mut rng = rng_for(1, 0);
        let user = User::new(1, generate_logs(entries, &mut rng));
        group.bench_function(format!("activity_report({entries} entries)"), |b| {
            b.iter(|| std::hint::black_box(user.activity_report()))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_generation, benchmark_formatting);
criterion_main!(benches);
