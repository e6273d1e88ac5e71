// metrics/mod.rs
use axum::http::Method;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;

pub const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";
pub const DEVICE_UPDATES_TOTAL: &str = "device_updates_total";

const KNOWN_METHODS: [&str; 9] = [
    "GET", "POST", "PUT", "PATCH", "DELETE", "HEAD", "OPTIONS", "CONNECT", "TRACE",
];

/// Installs the global recorder and serves `/metrics` on `port`.
///
/// Until this runs the counters below are no-ops.
pub fn setup_metrics(port: u16) -> Result<(), BuildError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    PrometheusBuilder::new().with_http_listener(addr).install()
}

/// Collapses extension methods so the `method` label stays bounded.
pub fn method_label(method: &Method) -> &'static str {
    KNOWN_METHODS
        .iter()
        .copied()
        .find(|known| *known == method.as_str())
        .unwrap_or("other")
}

pub fn record_request(method: &Method, status: u16) {
    ::metrics::counter!(
        HTTP_REQUESTS_TOTAL,
        "method" => method_label(method),
        "status" => status.to_string()
    )
    .increment(1);
}

pub fn record_device_update(device_id: &str) {
    ::metrics::counter!(DEVICE_UPDATES_TOTAL, "device_id" => device_id.to_string()).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_methods_keep_their_name() {
        assert_eq!(method_label(&Method::POST), "POST");
        assert_eq!(method_label(&Method::OPTIONS), "OPTIONS");
    }

    #[test]
    fn extension_methods_share_one_label() {
        let purge = Method::from_bytes(b"PURGE").unwrap();
        let brew = Method::from_bytes(b"BREW").unwrap();

        assert_eq!(method_label(&purge), "other");
        assert_eq!(method_label(&brew), "other");
    }
}
