//! Ranking benchmarks over a store large enough to make scoring visible.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blogquiz_core::sample::sample_posts;
use blogquiz_core::search::{search, suggestions};
use blogquiz_core::store::PostStore;

/// Replicate the sample set to a WordPress-scale store (~1000 posts, the
/// original loader's ceiling), keeping ids unique.
fn large_store() -> PostStore {
    let samples = sample_posts();
    let mut posts = Vec::with_capacity(samples.len() * 125);
    for round in 0..125u64 {
        for mut post in samples.clone() {
            post.id += round * 100;
            posts.push(post);
        }
    }
    PostStore::from_posts(posts)
}

fn bench_search(c: &mut Criterion) {
    let store = large_store();

    c.bench_function("search_two_terms_1000_posts", |b| {
        b.iter(|| search(black_box(&store), black_box("intelligenza artificiale")))
    });

    c.bench_function("search_no_matches_1000_posts", |b| {
        b.iter(|| search(black_box(&store), black_box("zzzz qqqq")))
    });

    c.bench_function("suggestions_1000_posts", |b| {
        b.iter(|| suggestions(black_box(&store), black_box("et")))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
