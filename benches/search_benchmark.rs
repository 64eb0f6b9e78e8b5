use codspeed_criterion_compat::{Criterion, black_box, criterion_group, criterion_main};
use emoji_picker::Dataset;
use emoji_picker::interactive::application::search_index::SearchIndex;

const WORDS: &[&str] = &[
    "face", "smile", "heart", "cat", "dog", "rocket", "flag", "hand", "food", "sun",
];

fn create_dataset(size: usize) -> Dataset {
    Dataset::from_pairs((0..size).map(|i| {
        let keywords = vec![
            format!("{}_{i}", WORDS[i % WORDS.len()]),
            WORDS[(i * 7) % WORDS.len()].to_string(),
            format!("Keyword{i}"),
        ];
        (format!("emoji{i}"), keywords)
    }))
}

fn benchmark_index_build(c: &mut Criterion) {
    let dataset = create_dataset(2000);

    c.bench_function("index_build_2000", |b| {
        b.iter(|| SearchIndex::new(black_box(&dataset)));
    });
}

fn benchmark_empty_query(c: &mut Criterion) {
    let index = SearchIndex::new(&create_dataset(2000));

    c.bench_function("filter_empty_2000", |b| {
        b.iter(|| index.filter(black_box("")));
    });
}

fn benchmark_keyword_query(c: &mut Criterion) {
    let index = SearchIndex::new(&create_dataset(2000));

    c.bench_function("filter_keyword_2000", |b| {
        b.iter(|| index.filter(black_box("heart")));
    });
}

fn benchmark_mixed_case_query(c: &mut Criterion) {
    let index = SearchIndex::new(&create_dataset(2000));

    c.bench_function("filter_mixed_case_2000", |b| {
        b.iter(|| index.filter(black_box("KEYword19")));
    });
}

fn benchmark_no_match(c: &mut Criterion) {
    let index = SearchIndex::new(&create_dataset(2000));

    c.bench_function("filter_no_match_2000", |b| {
        b.iter(|| index.filter(black_box("zzzz")));
    });
}

criterion_group!(
    benches,
    benchmark_index_build,
    benchmark_empty_query,
    benchmark_keyword_query,
    benchmark_mixed_case_query,
    benchmark_no_match
);
criterion_main!(benches);
