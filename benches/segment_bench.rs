// benches/segment_bench.rs
#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use wordseg::{ScanConfig, Scanner, Segments, UnicodeClassifier, WordSegmenter, WordSplitter};

// Representative inputs: prose, numbers, CJK, and a mixed bag.
const SAMPLES: &[(&str, &str)] = &[
    (
        "english",
        "Now is the time for all good men to come to the aid of the party. \
         Don't panic: it's only 3.5 percent, or 1,000,000.25 in total.\n",
    ),
    ("chinese", "人工智能是未来的发展方向，我们需要认真学习。"),
    ("japanese", "東京でサッカーワールドカップを見ました。こんにちは世界"),
    (
        "mixed",
        "Rust编程2025年 サッカー cat3.5 안녕하세요 Привет, мир! 😀 e.g. v1.2.3\r\n",
    ),
];

fn bench_segmenters(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment");

    for &(name, sample) in SAMPLES {
        let input = sample.repeat(64);
        group.throughput(Throughput::Bytes(input.len() as u64));

        group.bench_with_input(BenchmarkId::new("in_memory", name), &input, |b, text| {
            b.iter(|| {
                let count = Segments::new(black_box(text.as_bytes()))
                    .filter_map(Result::ok)
                    .count();
                black_box(count)
            });
        });

        group.bench_with_input(BenchmarkId::new("pull", name), &input, |b, text| {
            b.iter(|| {
                let mut segmenter = WordSegmenter::new(black_box(text.as_bytes()));
                let mut count = 0usize;
                while segmenter.segment() {
                    count += segmenter.bytes().len();
                }
                black_box(count)
            });
        });

        // Tiny initial buffer: measures the refill / grow path
        let small = ScanConfig::builder().initial_capacity(64).build();
        group.bench_with_input(BenchmarkId::new("split_small_buffer", name), &input, |b, text| {
            b.iter(|| {
                let splitter = WordSplitter::new(UnicodeClassifier);
                let mut scanner = Scanner::with_config(black_box(text.as_bytes()), splitter, small);
                let mut count = 0usize;
                while scanner.scan() {
                    count += 1;
                }
                black_box(count)
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(std::time::Duration::from_secs(2))
        .warm_up_time(std::time::Duration::from_secs(1))
        .sample_size(100);
    targets = bench_segmenters
}

criterion_main!(benches);
