//! Performance benchmarks for decoding and scoring
//!
//! Run with: cargo bench --bench scoring_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use tagscore_core::{LabelDecoder, ScoreComputer};

const TAGS: [&str; 8] = ["OU", "OO", "OO", ",O", "OO", "OO", ".O", "?U"];

/// Generate a tag text with `count` tags, shifted by `offset` to vary content
fn generate_tags(count: usize, offset: usize) -> String {
    (0..count)
        .map(|i| TAGS[(i * 7 + offset) % TAGS.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for count in [1_000, 10_000, 100_000] {
        let text = generate_tags(count, 0);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("tags", count), &text, |b, text| {
            b.iter(|| LabelDecoder::decode(black_box(text)).unwrap());
        });
    }

    group.finish();
}

fn bench_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("score");
    let computer = ScoreComputer::new();

    for count in [1_000, 10_000, 100_000] {
        let preds = LabelDecoder::decode(&generate_tags(count, 1)).unwrap();
        let labels = LabelDecoder::decode(&generate_tags(count, 0)).unwrap();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("tags", count),
            &(preds, labels),
            |b, (preds, labels)| {
                b.iter(|| {
                    computer
                        .compute_decoded(black_box(preds), black_box(labels))
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_decode, bench_score);
criterion_main!(benches);
