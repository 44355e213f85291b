//! Criterion benchmarks for the easyspeak translator.
//!
//! Covers the analysis pipeline on its own, single-sentence translation and
//! whole-document translation.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use easyspeak::analysis::analyzer::analyzer::Analyzer;
use easyspeak::analysis::analyzer::standard::StandardAnalyzer;
use easyspeak::translate::{TranslationOptions, Translator, split_into_sentences};
use std::hint::black_box;

/// Generate test sentences for benchmarking.
fn generate_test_sentences(count: usize) -> Vec<String> {
    let subjects = ["I", "You", "They", "We", "She", "My friend"];
    let auxiliaries = ["", "did not ", "will ", "can't ", "do "];
    let verbs = ["eat", "go", "see", "want", "like", "need"];
    let objects = [
        "the big car",
        "a new phone",
        "home",
        "the old restaurant",
        "my computer",
        "bananas",
    ];
    let tails = ["", " yesterday", " tomorrow", " now"];
    let marks = [".", "?", "!"];

    (0..count)
        .map(|i| {
            // Pseudo-random distribution
            format!(
                "{} {}{} {}{}{}",
                subjects[i % subjects.len()],
                auxiliaries[(i * 7) % auxiliaries.len()],
                verbs[(i * 13) % verbs.len()],
                objects[(i * 5) % objects.len()],
                tails[(i * 3) % tails.len()],
                marks[(i * 11) % marks.len()],
            )
        })
        .collect()
}

/// Benchmark text analysis and tokenization.
fn bench_text_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_analysis");

    let analyzer = StandardAnalyzer::new().unwrap();
    let sentences = generate_test_sentences(100);

    group.throughput(Throughput::Elements(sentences.len() as u64));
    group.bench_function("analyze_sentences", |b| {
        b.iter(|| {
            for sentence in &sentences {
                let tokens: Vec<_> = analyzer.analyze(black_box(sentence)).collect();
                black_box(tokens);
            }
        })
    });

    let document = sentences.join(" ");
    group.bench_function("split_into_sentences", |b| {
        b.iter(|| black_box(split_into_sentences(black_box(&document))))
    });

    group.finish();
}

/// Benchmark sentence and document translation.
fn bench_translation(c: &mut Criterion) {
    let mut group = c.benchmark_group("translation");

    let translator = Translator::new().unwrap();
    let strict = TranslationOptions::default();
    let sentences = generate_test_sentences(1000);

    group.bench_function("translate_single_sentence", |b| {
        b.iter(|| black_box(translator.translate_sentence(black_box(&sentences[1]), &strict)))
    });

    for count in [10, 100, 1000] {
        let document = sentences[..count].join("\n");
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("translate_document", count), &document, |b, doc| {
            b.iter(|| black_box(translator.translate(black_box(doc), &strict)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_text_analysis, bench_translation);

criterion_main!(benches);
