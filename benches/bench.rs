//! Criterion benchmarks for the Spanish plural stemmer and filter chain.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use plurales::prelude::*;
use std::hint::black_box;

/// Generate test documents mixing singular, plural and short words.
fn generate_test_documents(count: usize) -> Vec<String> {
    let words = [
        "las",
        "sociedades",
        "anónimas",
        "luces",
        "voces",
        "canciones",
        "meses",
        "árboles",
        "casas",
        "mujeres",
        "de",
        "crisis",
        "virus",
        "lunes",
        "reyes",
        "relojes",
        "papeles",
        "ciudad",
        "mundo",
        "y",
        "los",
        "intereses",
        "análisis",
        "caminos",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 50 + (i % 100); // Variable length documents
        let mut doc_words = Vec::with_capacity(doc_length);

        for j in 0..doc_length {
            let word_idx = (i * 7 + j * 13) % words.len(); // Pseudo-random distribution
            doc_words.push(words[word_idx]);
        }

        documents.push(doc_words.join(" "));
    }

    documents
}

/// Benchmark the stemmer on isolated words.
fn bench_stemmer(c: &mut Criterion) {
    let mut group = c.benchmark_group("stemmer");

    let stemmer = SpanishPluralStemmer::new();
    let words: Vec<String> = generate_test_documents(1)[0]
        .split(' ')
        .map(str::to_string)
        .collect();

    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("stem_in_place", |b| {
        let mut buffer = String::with_capacity(32);
        b.iter(|| {
            for word in &words {
                buffer.clear();
                buffer.push_str(word);
                stemmer.stem_in_place(black_box(&mut buffer));
            }
            black_box(&buffer);
        })
    });

    group.finish();
}

/// Benchmark whole filter chains built by name.
fn bench_filter_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_chain");

    let registry = FilterRegistry::default();
    let texts = generate_test_documents(1000);
    let filters = vec![
        FilterConfig::new("LowerCase"),
        FilterConfig::new("SpanishPluralStem"),
    ];

    group.bench_function("analyze_single_document", |b| {
        let mut stream = registry
            .build_chain(Box::new(WhitespaceTokenizer::new()), &filters)
            .unwrap();
        b.iter(|| {
            stream.reset(black_box(&texts[0]));
            let mut count = 0;
            stream.process(&mut |_token: &Token| count += 1);
            black_box(count)
        })
    });

    // A single chain is reset onto each document
    group.throughput(Throughput::Elements(100));
    group.bench_function("analyze_batch_documents", |b| {
        let mut stream = registry
            .build_chain(Box::new(WhitespaceTokenizer::new()), &filters)
            .unwrap();
        b.iter(|| {
            let mut count = 0;
            for text in texts.iter().take(100) {
                stream.reset(black_box(text));
                stream.process(&mut |_token: &Token| count += 1);
            }
            black_box(count)
        })
    });

    group.bench_function("build_chain", |b| {
        b.iter(|| {
            let stream = registry.build_chain(Box::new(WhitespaceTokenizer::new()), black_box(&filters));
            black_box(stream.is_ok())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_stemmer, bench_filter_chain);
criterion_main!(benches);
