use clap::Parser;
use criterion::{Criterion, criterion_group, criterion_main};
use langstat::args::Args;
use langstat_core::parser::classify_str;
use langstat_core::{ClassifyConfig, LanguageType};
use std::hint::black_box;

const RUST_SOURCE: &str = include_str!("../crates/engine/tests/data/lib.rs");
const MARKDOWN_SOURCE: &str = include_str!("../crates/engine/tests/data/README.md");

fn benchmark_cli_parsing(c: &mut Criterion) {
    c.bench_function("parse_args_simple", |b| {
        b.iter(|| {
            let args = Args::try_parse_from(black_box(["langstat", "."])).unwrap();
            black_box(args);
        })
    });
}

fn benchmark_classification(c: &mut Criterion) {
    let config = ClassifyConfig::new();
    let rust = RUST_SOURCE.repeat(64);
    let markdown = MARKDOWN_SOURCE.repeat(64);

    c.bench_function("classify_rust", |b| {
        b.iter(|| black_box(classify_str(black_box(&rust), LanguageType::Rust, &config)));
    });
    c.bench_function("classify_markdown", |b| {
        b.iter(|| black_box(classify_str(black_box(&markdown), LanguageType::Markdown, &config)));
    });
}

criterion_group!(benches, benchmark_cli_parsing, benchmark_classification);
criterion_main!(benches);
