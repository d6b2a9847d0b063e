// Copyright 2026 the Perennial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use perennial_date::CalendarDay;
use perennial_marks::{Mark, MarkLookup, MarkSet, normalize};

fn base_day() -> CalendarDay {
    CalendarDay::parse("2024-01-01").unwrap()
}

fn duplicate_heavy(len: usize) -> Vec<Mark> {
    // Every fourth mark repeats an earlier (day, variant) slot.
    let base = base_day();
    (0..len)
        .map(|i| Mark::single(base.add_days((i % (len * 3 / 4).max(1)) as i64), "gold"))
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("marks/normalize");

    // Hypothesis: normalization is O(n) thanks to the hashed slot map, so
    // doubling the input roughly doubles the time, duplicates or not.
    for len in [32_usize, 256, 2_048] {
        let unique: Vec<Mark> = (0..len)
            .map(|i| Mark::single(base_day().add_days(i as i64), "gold"))
            .collect();
        let dupes = duplicate_heavy(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("unique", len), &unique, |b, marks| {
            b.iter_batched(
                || marks.clone(),
                |marks| black_box(normalize(marks)),
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("duplicates", len), &dupes, |b, marks| {
            b.iter_batched(
                || marks.clone(),
                |marks| black_box(normalize(marks)),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_range_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("marks/add_range");

    for len in [7_usize, 31, 90] {
        let days: Vec<CalendarDay> = (0..len).map(|i| base_day().add_days(i as i64)).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &days, |b, days| {
            b.iter_batched(
                MarkSet::<()>::new,
                |mut set| {
                    let added = set.add_range(days.iter().copied(), "teal");
                    black_box((set, added));
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_lookup_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("marks/lookup_build");

    // A lookup is rebuilt once per render pass; keep it cheap at grid scale.
    let mut set = MarkSet::<()>::new();
    set.add_range((0..42).map(|i| base_day().add_days(i)), "teal");
    group.bench_function("grid_sized", |b| {
        b.iter(|| black_box(MarkLookup::build(&set)));
    });

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_range_insert, bench_lookup_build);
criterion_main!(benches);
