//! Benchmarks for the reconciliation reducer.

use criterion::{criterion_group, criterion_main, Criterion};
use list_sync::{
    ColumnBinding, FilterMap, ListCoordinator, ListEvent, ScreenConfig, SortDescriptor,
    SortDirection,
};
use std::hint::black_box;

fn coordinator() -> ListCoordinator {
    let config = ScreenConfig::new(
        SortDescriptor::descending("updated_at"),
        vec!["updated_at".into(), "name".into(), "heat".into()],
    )
    .with_filters(vec!["publish_status".into(), "owner".into()])
    .with_columns(vec![
        ColumnBinding::new("updated_at", "updatedAt"),
        ColumnBinding::new("name", "displayName"),
    ]);
    ListCoordinator::new(config, FilterMap::new()).unwrap()
}

fn benchmark_apply(c: &mut Criterion) {
    let coord = coordinator();
    let events = [
        ListEvent::MenuSort(SortDescriptor::ascending("name")),
        ListEvent::header("updatedAt", SortDirection::Ascending),
        ListEvent::SearchInput("governance".into()),
        ListEvent::PageChange { offset: 3, limit: 10 },
    ];

    c.bench_function("apply_event", |b| {
        b.iter(|| {
            for event in &events {
                black_box(coord.apply(black_box(event)));
            }
        })
    });
}

fn benchmark_dispatch_sort_flip(c: &mut Criterion) {
    c.bench_function("dispatch_sort_flip", |b| {
        let mut coord = coordinator();
        let asc = ListEvent::MenuSort(SortDescriptor::ascending("name"));
        let desc = ListEvent::MenuSort(SortDescriptor::descending("name"));
        b.iter(|| {
            black_box(coord.dispatch(&asc));
            black_box(coord.dispatch(&desc));
        })
    });
}

criterion_group!(benches, benchmark_apply, benchmark_dispatch_sort_flip);
criterion_main!(benches);
