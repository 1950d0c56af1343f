use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use concord::Searcher;

const PARAGRAPH: &str = "Until recently the great majority of naturalists believed that \
    species were immutable productions, and had been separately created.  Some few \
    naturalists, on the other hand, have believed that species undergo modification.";

fn build_corpus(paragraphs: usize) -> String {
    let mut corpus = String::with_capacity(paragraphs * (PARAGRAPH.len() + 16));
    for i in 0..paragraphs {
        corpus.push_str(PARAGRAPH);
        corpus.push_str(&format!("  Entry {}.\r\n", i));
    }
    corpus
}

fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");
    for &paragraphs in &[16usize, 128, 1024] {
        let corpus = build_corpus(paragraphs);
        group.bench_with_input(
            BenchmarkId::from_parameter(paragraphs),
            &corpus,
            |b, corpus| b.iter(|| Searcher::new(black_box(corpus.clone())).unwrap()),
        );
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let searcher = Searcher::new(build_corpus(512)).unwrap();

    let mut group = c.benchmark_group("search");
    for &context in &[0usize, 3, 10] {
        group.bench_with_input(
            BenchmarkId::new("naturalists", context),
            &context,
            |b, &context| b.iter(|| searcher.search(black_box("naturalists"), context)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_index_build, bench_search);
criterion_main!(benches);
