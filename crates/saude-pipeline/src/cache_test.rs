use super::*;
use crate::testutil::{pop, FakeDatabase};
use saude_core::PipelineOptions;
use saude_db::Database;

fn reconciler() -> Reconciler {
    Reconciler::new(PipelineOptions {
        fallback_rows: 25,
        ..PipelineOptions::default()
    })
}

fn available(db: FakeDatabase) -> Resolution {
    Resolution::Available(Arc::new(db))
}

#[tokio::test]
async fn test_same_handle_hits_cache() {
    let cache = ReconcileCache::new();
    let reconciler = reconciler();
    let source = available(FakeDatabase::new().with_population(vec![pop(1, 10_000, 1_000)]));

    let first = cache.get_or_reconcile(&reconciler, &source).await;
    let second = cache.get_or_reconcile(&reconciler, &source).await;
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.len(), 1);
}

#[tokio::test]
async fn test_new_handle_recomputes() {
    let cache = ReconcileCache::new();
    let reconciler = reconciler();
    let first_source = available(FakeDatabase::new().with_population(vec![pop(1, 10_000, 1_000)]));
    let second_source =
        available(FakeDatabase::new().with_population(vec![pop(2, 20_000, 2_000)]));

    let first = cache.get_or_reconcile(&reconciler, &first_source).await;
    let second = cache.get_or_reconcile(&reconciler, &second_source).await;
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(cache.len(), 2);
    assert_eq!(first.table().rows()[0].codigo_ibge, 1);
    assert_eq!(second.table().rows()[0].codigo_ibge, 2);
}

#[tokio::test]
async fn test_unavailable_outcomes_share_a_slot() {
    let cache = ReconcileCache::new();
    let reconciler = reconciler();
    let source = Resolution::Unavailable {
        reason: "no env".into(),
    };

    let first = cache.get_or_reconcile(&reconciler, &source).await;
    let second = cache.get_or_reconcile(&reconciler, &source).await;
    assert!(Arc::ptr_eq(&first, &second));
    assert!(!first.is_real());
    assert_eq!(first.table().len(), 25);
}

#[tokio::test]
async fn test_clear_forces_recompute() {
    let cache = ReconcileCache::new();
    let reconciler = reconciler();
    let source = available(FakeDatabase::new().with_population(vec![pop(1, 10_000, 1_000)]));

    let first = cache.get_or_reconcile(&reconciler, &source).await;
    cache.clear();
    assert!(cache.is_empty());
    let second = cache.get_or_reconcile(&reconciler, &source).await;
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(first.table(), second.table());
}

#[tokio::test]
async fn test_distinct_handles_do_not_collide() {
    // Two handles over identical data still cache independently; identity,
    // not content, is the key.
    let cache = ReconcileCache::new();
    let reconciler = reconciler();
    let a: Arc<dyn Database> =
        Arc::new(FakeDatabase::new().with_population(vec![pop(1, 10_000, 1_000)]));
    let b: Arc<dyn Database> =
        Arc::new(FakeDatabase::new().with_population(vec![pop(1, 10_000, 1_000)]));

    cache
        .get_or_reconcile(&reconciler, &Resolution::Available(a))
        .await;
    cache
        .get_or_reconcile(&reconciler, &Resolution::Available(b))
        .await;
    assert_eq!(cache.len(), 2);
}
