use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mongodb::bson::oid::ObjectId;

use biblioteca_service::models::records::AuthorRecord;
use biblioteca_service::services::resolver::{missing_author_ids, resolve_authors};

fn sample_authors(count: usize) -> Vec<AuthorRecord> {
    (0..count)
        .map(|i| AuthorRecord {
            id: Some(ObjectId::new()),
            name: format!("Author {}", i),
            biography: format!("Biography of author {}", i),
        })
        .collect()
}

fn benchmark_missing_author_ids(c: &mut Criterion) {
    let found = sample_authors(1000);
    let mut requested: Vec<ObjectId> = found.iter().filter_map(|author| author.id).collect();
    requested.push(ObjectId::new());

    c.bench_function("missing_author_ids_1000", |b| {
        b.iter(|| missing_author_ids(black_box(&requested), black_box(&found)))
    });
}

fn benchmark_resolve_authors(c: &mut Criterion) {
    let records = sample_authors(1000);

    c.bench_function("resolve_authors_1000", |b| {
        b.iter(|| resolve_authors(black_box(records.clone())))
    });
}

criterion_group!(
    benches,
    benchmark_missing_author_ids,
    benchmark_resolve_authors
);
criterion_main!(benches);
