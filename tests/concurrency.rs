//! Concurrent request accounting.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;
use weather_api::config::ServiceConfig;
use weather_api::observability::metrics::REQUESTS_TOTAL;
use weather_api::weather::FixedClock;
use weather_api::HttpServer;

mod common;

use common::sample_value;

async fn run_concurrent(n: usize) {
    let server = HttpServer::with_clock(
        ServiceConfig::default(),
        Arc::new(FixedClock::from_unix_secs(1_700_000_000)),
    )
    .unwrap();
    let router = server.router();

    let tasks: Vec<_> = (0..n)
        .map(|_| {
            let router = router.clone();
            tokio::spawn(async move {
                let request = Request::builder().uri("/weather/x").body(Body::empty()).unwrap();
                router.oneshot(request).await.unwrap().status()
            })
        })
        .collect();

    for task in tasks {
        assert_eq!(task.await.unwrap(), StatusCode::OK);
    }

    let text = server.metrics().render();
    assert_eq!(sample_value(&text, REQUESTS_TOTAL), Some(n as f64));
    assert_eq!(
        sample_value(&text, "weather_api_response_time_seconds_count"),
        Some(n as f64)
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn single_request_is_counted() {
    run_concurrent(1).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn ten_concurrent_requests_are_counted() {
    run_concurrent(10).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn thousand_concurrent_requests_are_counted() {
    run_concurrent(1000).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn health_probes_interleaved_with_lookups_do_not_count() {
    let server = HttpServer::new(ServiceConfig::default()).unwrap();
    let router = server.router();

    let tasks: Vec<_> = (0..200)
        .map(|i| {
            let router = router.clone();
            let uri = if i % 2 == 0 { "/weather/x" } else { "/health" };
            tokio::spawn(async move {
                let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
                router.oneshot(request).await.unwrap().status()
            })
        })
        .collect();

    for task in tasks {
        assert_eq!(task.await.unwrap(), StatusCode::OK);
    }

    assert_eq!(sample_value(&server.metrics().render(), REQUESTS_TOTAL), Some(100.0));
}
