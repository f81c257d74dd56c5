//! Provider behavior through the trait objects the facade holds.

use core_async::time::Instant;
use core_data::{
    InMemoryProductRepository, InMemoryUserRepository, ProductRepository, UserRepository,
};
use core_runtime::LatencyConfig;
use std::sync::Arc;
use std::time::Duration;

#[core_async::test]
async fn providers_work_behind_trait_objects() {
    let users: Arc<dyn UserRepository> =
        Arc::new(InMemoryUserRepository::with_latency(LatencyConfig::disabled()));
    let products: Arc<dyn ProductRepository> =
        Arc::new(InMemoryProductRepository::with_latency(LatencyConfig::disabled()));

    assert_eq!(users.list().await.unwrap().len(), 5);
    assert_eq!(products.list().await.unwrap().len(), 6);

    let alice = users.find_by_id("4").await.unwrap().unwrap();
    assert_eq!(alice.name, "Alice Brown");
}

#[core_async::test]
async fn simulated_latency_is_observed() {
    let repo = InMemoryUserRepository::with_latency(LatencyConfig::uniform(Duration::from_millis(
        40,
    )));

    let started = Instant::now();
    repo.find_by_id("1").await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(40));
}

#[core_async::test]
async fn concurrent_reads_overlap() {
    let repo = Arc::new(InMemoryProductRepository::with_latency(
        LatencyConfig::uniform(Duration::from_millis(100)),
    ));

    let started = Instant::now();
    let (all, one, cheap) = core_async::join!(
        repo.list(),
        repo.find_by_id("2"),
        repo.find_by_price_range(0.0, 100.0)
    );

    assert_eq!(all.unwrap().len(), 6);
    assert_eq!(one.unwrap().unwrap().title, "Smartphone");
    assert_eq!(cheap.unwrap().len(), 1);
    assert!(started.elapsed() < Duration::from_millis(250));
}

#[core_async::test]
async fn custom_catalog_replaces_sample_data() {
    let repo = InMemoryProductRepository::from_products(
        vec![
            core_data::Product::new("a", "Desk Lamp", "LED lamp", 25.0),
            core_data::Product::new("b", "Desk", "Oak desk", 250.0),
        ],
        LatencyConfig::disabled(),
    )
    .unwrap();

    let desks = repo.search("desk").await.unwrap();
    assert_eq!(desks.len(), 2);
    assert!(repo.find_by_id("1").await.unwrap().is_none());
}
