// Copyright 2026 the Perennial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use perennial_date::{CalendarDay, Weekday};
use perennial_grid::build_grid;
use perennial_panel::{CalendarPanel, Control, PanelConfig, PanelInit};

fn month() -> CalendarDay {
    CalendarDay::parse("2024-02-01").unwrap()
}

fn bench_build_grid(c: &mut Criterion) {
    c.bench_function("grid/build", |b| {
        let month = month();
        b.iter(|| black_box(build_grid(black_box(month), Weekday::Sunday)));
    });
}

fn bench_cells_assembly(c: &mut Criterion) {
    // The full derived view: grid flags, mark lookup, and annotation. This
    // runs on every render pass, including pointer-move-driven ones, so it
    // has to stay cheap with a warm annotation cache.
    let config = PanelConfig {
        markable: true,
        today: Some(CalendarDay::parse("2024-02-14").unwrap()),
        ..PanelConfig::default()
    };
    let init = PanelInit {
        month: Control::Owned(Some(month())),
        ..PanelInit::default()
    };
    let mut panel = CalendarPanel::<()>::new(config, init);
    panel.pointer_down(1, CalendarDay::parse("2024-02-05").unwrap());
    panel.pointer_move(1, Some(CalendarDay::parse("2024-02-09").unwrap()));
    panel.cells();

    c.bench_function("grid/cells", |b| {
        b.iter(|| black_box(panel.cells()));
    });
}

criterion_group!(benches, bench_build_grid, bench_cells_assembly);
criterion_main!(benches);
