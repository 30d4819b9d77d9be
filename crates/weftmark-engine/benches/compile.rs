use criterion::{Criterion, criterion_group, criterion_main};
use weftmark_engine::{Compiler, SafeMode, State};
mod common;

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    let unsafe_compiler = Compiler::default();
    let safe_compiler = Compiler::new(State::new().setting(SafeMode::enabled()));

    group.bench_function("mixed_document", |b| {
        b.iter(|| std::hint::black_box(unsafe_compiler.compile(std::hint::black_box(&content))));
    });

    group.bench_function("mixed_document_safe", |b| {
        b.iter(|| std::hint::black_box(safe_compiler.compile(std::hint::black_box(&content))));
    });

    group.finish();
}

fn bench_markup_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    group.sample_size(10);

    let content = common::generate_markup_heavy(500);
    let compiler = Compiler::default();

    group.bench_function("markup_heavy", |b| {
        b.iter(|| std::hint::black_box(compiler.scan(std::hint::black_box(&content))));
    });

    group.finish();
}

criterion_group!(benches, bench_compile, bench_markup_scan);
criterion_main!(benches);
