use super::*;
use crate::testutil::{pop, FakeDatabase};
use saude_core::HospitalizationAggregate;
use std::sync::Arc;
use std::time::Duration;

fn options(fallback_rows: usize) -> PipelineOptions {
    PipelineOptions {
        fallback_rows,
        ..PipelineOptions::default()
    }
}

#[tokio::test]
async fn test_unavailable_source_serves_fallback() {
    let reconciler = Reconciler::new(options(150));
    let source = Resolution::Unavailable {
        reason: "connection refused".into(),
    };
    let outcome = reconciler.reconcile(&source).await;
    assert!(!outcome.is_real());
    assert_eq!(outcome.table().len(), 150);
    let diagnostic = outcome.diagnostic().unwrap();
    assert!(!diagnostic.is_empty());
    assert!(diagnostic.contains("connection refused"));
}

#[tokio::test]
async fn test_successful_load_is_real() {
    let db = FakeDatabase::new()
        .with_population(vec![pop(100001, 200_000, 30_000)])
        .with_hospitalization(vec![HospitalizationAggregate {
            codigo_ibge: 100001,
            total_internacoes: 400,
            valor_medio_internacao: 2500.0,
        }]);
    let source = Resolution::Available(Arc::new(db));
    let outcome = Reconciler::new(options(200)).reconcile(&source).await;
    assert!(outcome.is_real());
    assert_eq!(outcome.diagnostic(), None);
    let table = outcome.table();
    assert_eq!(table.len(), 1);
    assert!((table.rows()[0].internacoes_por_1000.unwrap() - 2.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_query_failure_degrades_to_fallback() {
    let source = Resolution::Available(Arc::new(FakeDatabase::failing("relation does not exist")));
    let outcome = Reconciler::new(options(200)).reconcile(&source).await;
    assert!(!outcome.is_real());
    assert_eq!(outcome.table().len(), 200);
    assert!(outcome.diagnostic().unwrap().contains("relation does not exist"));
}

#[tokio::test]
async fn test_join_fanout_degrades_to_fallback() {
    let db = FakeDatabase::new()
        .with_population(vec![pop(5, 10_000, 1_000)])
        .with_hospitalization(vec![
            HospitalizationAggregate {
                codigo_ibge: 5,
                total_internacoes: 1,
                valor_medio_internacao: 10.0,
            },
            HospitalizationAggregate {
                codigo_ibge: 5,
                total_internacoes: 2,
                valor_medio_internacao: 20.0,
            },
        ]);
    let source = Resolution::Available(Arc::new(db));
    let outcome = Reconciler::new(options(200)).reconcile(&source).await;
    assert!(!outcome.is_real());
    assert!(outcome.diagnostic().unwrap().contains("fan out"));
}

#[tokio::test(start_paused = true)]
async fn test_slow_store_times_out_into_fallback() {
    let db = FakeDatabase::new()
        .with_population(vec![pop(1, 10_000, 1_000)])
        .with_delay(Duration::from_secs(3600));
    let source = Resolution::Available(Arc::new(db));
    let outcome = Reconciler::new(options(10)).reconcile(&source).await;
    assert!(!outcome.is_real());
    let diagnostic = outcome.diagnostic().unwrap();
    assert!(diagnostic.contains("timed out"), "got: {diagnostic}");
    assert_eq!(outcome.table().len(), 10);
}

#[tokio::test]
async fn test_fallback_is_deterministic_per_options() {
    let reconciler = Reconciler::new(options(80));
    let source = Resolution::Unavailable {
        reason: "down".into(),
    };
    let a = reconciler.reconcile(&source).await;
    let b = reconciler.reconcile(&source).await;
    assert_eq!(a.table(), b.table());
}
