//! File store performance benchmarks

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::sync::Arc;
use tempfile::TempDir;

use linkvault::storages::Registry;
use linkvault::storages::file::JsonFileStore;
use linkvault::storages::models::{DEFAULT_AVATAR, Link, User};

fn sample_user(username: &str) -> User {
    User {
        username: username.to_string(),
        full_name: username.to_string(),
        bio: String::new(),
        avatar: DEFAULT_AVATAR.to_string(),
        total_views: 0,
        created: chrono::Utc::now(),
    }
}

fn sample_link(id: &str, user: &str) -> Link {
    Link {
        id: id.to_string(),
        user: user.to_string(),
        title: format!("link {}", id),
        url: "https://example.com".to_string(),
        description: String::new(),
        is_public: true,
        created: chrono::Utc::now(),
        views: 0,
        clicks: 0,
    }
}

/// Store pre-filled with `users` users and `links_per_user` links each
fn filled_store(
    rt: &tokio::runtime::Runtime,
    users: usize,
    links_per_user: usize,
) -> (Arc<JsonFileStore>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(JsonFileStore::new(temp_dir.path().join("bench.json")).unwrap());

    rt.block_on(async {
        for u in 0..users {
            let username = format!("user_{}", u);
            store.upsert_user(sample_user(&username)).await.unwrap();
            for l in 0..links_per_user {
                store
                    .upsert_link(sample_link(&format!("link_{}_{}", u, l), &username))
                    .await
                    .unwrap();
            }
        }
    });

    (store, temp_dir)
}

/// In-memory read path: user lookup
fn bench_get_user(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let (store, _temp_dir) = filled_store(&rt, 100, 5);

    c.bench_function("reads/get_user", |b| {
        b.to_async(&rt).iter(|| {
            let store = store.clone();
            async move {
                store.get_user("user_50").await.unwrap();
            }
        });
    });
}

/// In-memory read path: link lookup
fn bench_get_link(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let (store, _temp_dir) = filled_store(&rt, 100, 5);

    c.bench_function("reads/get_link", |b| {
        b.to_async(&rt).iter(|| {
            let store = store.clone();
            async move {
                store.get_link("link_50_2").await.unwrap();
            }
        });
    });
}

/// Scan and sort of one user's links across a growing total population
fn bench_links_by_user(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mut group = c.benchmark_group("reads/links_by_user");

    for total_links in [100, 1000] {
        let (store, _temp_dir) = filled_store(&rt, total_links / 10, 10);

        group.throughput(Throughput::Elements(10));
        group.bench_with_input(
            BenchmarkId::new("total_links", total_links),
            &total_links,
            |b, _| {
                b.to_async(&rt).iter(|| {
                    let store = store.clone();
                    async move {
                        let links = store.links_by_user("user_3").await;
                        assert_eq!(links.len(), 10);
                    }
                });
            },
        );
    }
    group.finish();
}

/// Full mutation cost: clone, apply, rewrite the file, swap in memory
fn bench_upsert_link(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mut group = c.benchmark_group("writes/upsert_link");

    for total_links in [100, 1000] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::new("total_links", total_links),
            &total_links,
            |b, &total_links| {
                b.iter_batched(
                    || filled_store(&rt, total_links / 10, 10),
                    |(store, temp_dir)| {
                        rt.block_on(async {
                            store.upsert_link(sample_link("fresh", "user_0")).await.unwrap();
                        });
                        (store, temp_dir)
                    },
                    criterion::BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

/// Counter bump, the hottest write in production traffic
fn bench_increment_views(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mut group = c.benchmark_group("writes/increment_views");

    group.throughput(Throughput::Elements(1));
    group.bench_with_input(BenchmarkId::new("total_links", 1000), &1000, |b, _| {
        b.iter_batched(
            || filled_store(&rt, 100, 10),
            |(store, temp_dir)| {
                rt.block_on(async {
                    store.increment_views("link_50_5").await.unwrap();
                });
                (store, temp_dir)
            },
            criterion::BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_get_user,
    bench_get_link,
    bench_links_by_user,
    bench_upsert_link,
    bench_increment_views
);
criterion_main!(benches);
