//! Criterion benchmarks for tag detection and encoding.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use taglink::analysis::tokenizer::Tokenizer;
use taglink::analysis::tokenizer::regex::RegexTagTokenizer;
use taglink::analysis::tokenizer::scan::ScanTagTokenizer;
use taglink::annotate::Annotator;
use taglink::codec::{decode, encode};
use taglink::config::TagTextConfig;

/// Generate a post-like text with a tag every few words.
fn generate_text(words: usize) -> String {
    let vocabulary = [
        "release", "#rust", "today", "@maintainer", "with", "#تطوير", "notes", "#iOS#iPadOS",
        "and", "@名前", "fixes",
    ];

    (0..words)
        .map(|i| vocabulary[(i * 7) % vocabulary.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_tokenizers(c: &mut Criterion) {
    let text = generate_text(10_000);
    let regex = RegexTagTokenizer::new().unwrap();
    let scan = ScanTagTokenizer::new();

    let mut group = c.benchmark_group("tokenize");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("regex", |b| b.iter(|| regex.tokenize(black_box(&text)).count()));
    group.bench_function("scan", |b| b.iter(|| scan.tokenize(black_box(&text)).count()));
    group.finish();
}

fn bench_annotate(c: &mut Criterion) {
    let text = generate_text(10_000);
    let annotator = Annotator::new(TagTextConfig::default()).unwrap();

    c.bench_function("annotate", |b| b.iter(|| annotator.annotate(black_box(Some(text.as_str())))));
}

fn bench_codec(c: &mut Criterion) {
    let tags = ["#SwiftLang", "@AliceJohnson.", "#تطوير_سويفت", "#50%&up?x=1"];
    let encoded: Vec<_> = tags.iter().map(|tag| encode(tag)).collect();

    c.bench_function("encode", |b| {
        b.iter(|| tags.iter().map(|tag| encode(black_box(tag))).count())
    });
    c.bench_function("decode", |b| {
        b.iter(|| encoded.iter().filter_map(|e| decode(black_box(e)).ok()).count())
    });
}

criterion_group!(benches, bench_tokenizers, bench_annotate, bench_codec);
criterion_main!(benches);
