//! Performance benchmarks for tldr.
//!
//! Run with: cargo bench
//!
//! Target performance:
//! - Dataset load: < 5ms
//! - Search latency: < 1ms per keystroke on the bundled dataset

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tldr::core::{fuzzy_score, CommandEntry, SearchEngine};
use tldr::data;

/// Benchmark parsing and validating the bundled dataset.
fn bench_dataset_load(c: &mut Criterion) {
    c.bench_function("dataset_bundled", |b| {
        b.iter(|| black_box(data::bundled().expect("bundled dataset")))
    });
}

/// Benchmark the per-field scorer on the two paths it can take.
fn bench_fuzzy_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("fuzzy_score");

    let cases = [
        ("substring", "test", "Another command for testing"),
        ("subsequence", "cpfl", "Copy files and directories"),
        ("miss", "zzzz", "Copy files and directories"),
    ];

    for (name, term, text) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), &(term, text), |b, (term, text)| {
            b.iter(|| black_box(fuzzy_score(black_box(term), black_box(text))))
        });
    }

    group.finish();
}

/// Benchmark full searches over the bundled dataset.
fn bench_search(c: &mut Criterion) {
    let commands = data::bundled().expect("bundled dataset");
    let engine = SearchEngine::new();

    let queries = ["g", "ls", "git", "file", "network", "zzzznomatch"];

    let mut group = c.benchmark_group("search");

    for query in queries {
        group.bench_with_input(BenchmarkId::from_parameter(query), &query, |b, query| {
            b.iter(|| black_box(engine.search(black_box(query), &commands)))
        });
    }

    group.finish();
}

/// Benchmark search on a large synthetic dataset.
fn bench_search_large(c: &mut Criterion) {
    let commands: Vec<CommandEntry> = (0..5000)
        .map(|i| {
            CommandEntry::new(
                format!("command-{}", i),
                format!("Synthetic entry {} used for benchmarking search ranking", i),
            )
        })
        .collect();
    let engine = SearchEngine::new();

    let mut group = c.benchmark_group("search_large");

    for query in ["co", "command-42", "bench", "ranking entry"] {
        group.bench_with_input(BenchmarkId::from_parameter(query), &query, |b, query| {
            b.iter(|| black_box(engine.search(black_box(query), &commands)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_dataset_load,
    bench_fuzzy_score,
    bench_search,
    bench_search_large,
);

criterion_main!(benches);
