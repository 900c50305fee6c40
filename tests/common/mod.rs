//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use weather_api::config::ServiceConfig;
use weather_api::lifecycle::Shutdown;
use weather_api::weather::Clock;
use weather_api::HttpServer;

/// A service bound to an ephemeral local port.
pub struct RunningService {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub task: tokio::task::JoinHandle<Result<(), std::io::Error>>,
}

impl RunningService {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start the service on 127.0.0.1 with an OS-assigned port.
pub async fn start_service(config: ServiceConfig, clock: Option<Arc<dyn Clock>>) -> RunningService {
    let server = match clock {
        Some(clock) => HttpServer::with_clock(config, clock),
        None => HttpServer::new(config),
    }
    .unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    // The listener is already bound, so connections queue until serve starts.
    tokio::time::sleep(Duration::from_millis(20)).await;

    RunningService { addr, shutdown, task }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// Validate every line of a text exposition and return `(name, value)`
/// pairs for the samples.
pub fn parse_exposition(text: &str) -> Vec<(String, f64)> {
    let mut samples = Vec::new();
    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        if let Some(comment) = line.strip_prefix('#') {
            let mut parts = comment.split_whitespace();
            let kind = parts.next().unwrap();
            assert!(kind == "HELP" || kind == "TYPE", "unexpected comment: {line}");
            assert!(parts.next().is_some(), "comment without metric name: {line}");
            if kind == "TYPE" {
                let ty = parts.next().unwrap();
                assert!(
                    ["counter", "gauge", "histogram", "summary", "untyped"].contains(&ty),
                    "unknown type in: {line}"
                );
            }
            continue;
        }

        let (series, value) = line.rsplit_once(' ').unwrap_or_else(|| panic!("malformed sample: {line}"));
        let name = series.split('{').next().unwrap().to_string();
        assert!(
            name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':'),
            "bad metric name: {name}"
        );
        if series.contains('{') {
            assert!(series.ends_with('}'), "unterminated labels: {line}");
        }
        let value: f64 = match value {
            "+Inf" => f64::INFINITY,
            "-Inf" => f64::NEG_INFINITY,
            v => v.parse().unwrap_or_else(|_| panic!("bad value in: {line}")),
        };
        samples.push((name, value));
    }
    samples
}

/// Value of an unlabelled sample in a text exposition, e.g. a counter.
pub fn sample_value(exposition: &str, name: &str) -> Option<f64> {
    parse_exposition(exposition)
        .into_iter()
        .find(|(sample, _)| sample == name)
        .map(|(_, value)| value)
}
