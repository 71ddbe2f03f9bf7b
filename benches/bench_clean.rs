use criterion::{Criterion, criterion_group, criterion_main};

fn bench_clean_tracked(c: &mut Criterion) {
    c.bench_function("clean_tracked_url", |b| {
        b.iter(|| {
            let _ = urlclean_lib::cleaner::clean(
                "https://example.com/product?id=123&utm_source=facebook&utm_medium=social&ref=share",
            );
        })
    });
}

fn bench_clean_batch(c: &mut Criterion) {
    let urls: Vec<String> = (0..100)
        .map(|i| format!("https://example.com/item/{i}?page={i}&fbclid=abc{i}&tracking_id={i}"))
        .collect();
    c.bench_function("clean_batch_100", |b| {
        b.iter(|| {
            let _ = urlclean_lib::cleaner::clean_batch(&urls);
        })
    });
}

criterion_group!(benches, bench_clean_tracked, bench_clean_batch);
criterion_main!(benches);
