// access_log.rs
use super::{Chain, Stage};
use crate::metrics;
use async_trait::async_trait;
use axum::{extract::Request, response::Response};
use tracing::info;

/// Logs status, method and URL once the response is ready.
pub struct AccessLog;

#[async_trait]
impl Stage for AccessLog {
    async fn handle(&self, request: Request, next: Chain<'_>) -> Response {
        let method = request.method().clone();
        let uri = request.uri().clone();

        let response = next.run(request).await;

        let status = response.status();
        info!("{} {} {}", status.as_u16(), method, uri);
        metrics::record_request(&method, status.as_u16());

        response
    }
}
