//! Metrics collection and exposition.
//!
//! # Metrics
//! - `weather_api_requests_total` (counter): weather lookups handled
//! - `weather_api_response_time_seconds` (histogram): weather handler latency
//!
//! Each [`ServiceMetrics`] owns its own Prometheus recorder, so several
//! instances can live in one process without sharing counts. Health probes
//! and scrapes are not recorded.

use std::time::Duration;

use metrics::{counter, describe_counter, describe_histogram, histogram, Counter, Histogram};
use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder, PrometheusHandle};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time;

pub const REQUESTS_TOTAL: &str = "weather_api_requests_total";
pub const RESPONSE_TIME_SECONDS: &str = "weather_api_response_time_seconds";

/// Content type of the text exposition format.
pub const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// Prometheus client default buckets, in seconds.
const LATENCY_BUCKETS: [f64; 11] = [
    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

/// Request counter and latency histogram for one service instance.
pub struct ServiceMetrics {
    handle: PrometheusHandle,
    requests: Counter,
    latency: Histogram,
}

impl ServiceMetrics {
    pub fn new() -> Result<Self, BuildError> {
        let recorder = PrometheusBuilder::new()
            .set_buckets_for_metric(Matcher::Full(RESPONSE_TIME_SECONDS.to_string()), &LATENCY_BUCKETS)?
            .build_recorder();
        let handle = recorder.handle();

        let (requests, latency) = metrics::with_local_recorder(&recorder, || {
            describe_counter!(REQUESTS_TOTAL, "Total number of weather API requests");
            describe_histogram!(RESPONSE_TIME_SECONDS, "Response time for weather API requests");
            (counter!(REQUESTS_TOTAL), histogram!(RESPONSE_TIME_SECONDS))
        });

        Ok(Self {
            handle,
            requests,
            latency,
        })
    }

    /// Count one weather request.
    pub fn record_request(&self) {
        self.requests.increment(1);
    }

    /// Record the latency of one weather request.
    pub fn observe_latency(&self, elapsed: Duration) {
        self.latency.record(elapsed.as_secs_f64());
    }

    /// Render a snapshot in the Prometheus text exposition format.
    pub fn render(&self) -> String {
        self.handle.render()
    }

    /// Periodically drain buffered histogram samples until shutdown.
    pub fn spawn_upkeep(
        &self,
        every: Duration,
        mut shutdown: broadcast::Receiver<()>,
    ) -> JoinHandle<()> {
        let handle = self.handle.clone();
        tokio::spawn(async move {
            let mut ticker = time::interval(every);
            loop {
                tokio::select! {
                    _ = ticker.tick() => handle.run_upkeep(),
                    _ = shutdown.recv() => {
                        tracing::debug!("Metrics upkeep stopping");
                        break;
                    }
                }
            }
        })
    }
}

/// Value of an unlabelled sample in a text exposition, e.g. a counter.
#[cfg(test)]
pub(crate) fn sample_value(exposition: &str, name: &str) -> Option<f64> {
    exposition
        .lines()
        .filter(|line| !line.starts_with('#'))
        .find_map(|line| {
            let (metric, value) = line.split_once(' ')?;
            if metric == name {
                value.trim().parse().ok()
            } else {
                None
            }
        })
}
