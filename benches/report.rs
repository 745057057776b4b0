use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use modgroup::report::{GroupReport, ReportConfig};
use modgroup::GroupKind;

fn bench_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("Report");

    for n in [12u32, 60, 120] {
        let g = GroupKind::Additive.build(n).unwrap();
        group.bench_with_input(BenchmarkId::new("full", n), &g, |b, g| {
            b.iter(|| GroupReport::new(g).unwrap());
        });
    }

    // Without the quadratic Cayley table
    let lean = ReportConfig::new().include_table(false);
    for n in [120u32, 480] {
        let g = GroupKind::Multiplicative.build(n).unwrap();
        group.bench_with_input(BenchmarkId::new("no_table", n), &g, |b, g| {
            b.iter(|| GroupReport::with_config(g, &lean).unwrap());
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let report = GroupReport::new(&GroupKind::Additive.build(60).unwrap()).unwrap();
    c.bench_function("Render Z60", |b| b.iter(|| report.to_string()));
}

criterion_group!(benches, bench_report, bench_render);
criterion_main!(benches);
