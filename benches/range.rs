use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rankset::{AddMode, LexBound, OrderedSet, ScoreBound};

const SIZE: usize = 100_000;

fn build() -> OrderedSet {
    let mut set = OrderedSet::new();
    for i in 0..SIZE {
        set.add(&format!("m{i:06}"), (i / 4) as f64, AddMode::Plain)
            .unwrap();
    }
    set
}

fn bench_ranges(c: &mut Criterion) {
    let set = build();
    let low = ScoreBound::inclusive(1000.0).unwrap();
    let high = ScoreBound::exclusive(2000.0).unwrap();
    let lex_low = LexBound::parse("[m010000").unwrap();
    let lex_high = LexBound::parse("(m020000").unwrap();

    let mut group = c.benchmark_group("range");
    group.bench_function("by_rank_middle", |b| {
        b.iter(|| black_box(set.range_by_rank(40_000, 50_000, false)));
    });
    group.bench_function("by_score", |b| {
        b.iter(|| black_box(set.range_by_score(&low, &high, false, 0, None)));
    });
    group.bench_function("by_score_rev_paginated", |b| {
        b.iter(|| black_box(set.range_by_score(&low, &high, true, 100, Some(500))));
    });
    group.bench_function("by_lex", |b| {
        b.iter(|| black_box(set.range_by_lex(&lex_low, &lex_high, false, 0, None)));
    });
    group.bench_function("count_by_score", |b| {
        b.iter(|| black_box(set.count_by_score(&low, &high)));
    });
    group.bench_function("rank_lookup", |b| {
        b.iter(|| black_box(set.rank("m050000", false)));
    });
    group.finish();
}

criterion_group!(benches, bench_ranges);
criterion_main!(benches);
