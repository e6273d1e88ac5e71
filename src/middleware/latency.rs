// latency.rs
use super::{Chain, Stage};
use async_trait::async_trait;
use axum::{extract::Request, response::Response};
use std::time::Duration;

/// Holds every request for a fixed delay so clients can show loading states.
///
/// Dropping the future mid-sleep (client gone) just discards the request.
pub struct Latency {
    delay: Duration,
}

impl Latency {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl Stage for Latency {
    async fn handle(&self, request: Request, next: Chain<'_>) -> Response {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        next.run(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::{Pipeline, run_pipeline};
    use axum::{Router, body::Body, http, routing::get};
    use tokio::time::Instant;
    use tower::ServiceExt;

    fn app(delay: Duration) -> Router {
        Router::new().route("/", get(|| async { "ok" })).layer(
            axum::middleware::from_fn_with_state(
                Pipeline::new().stage(Latency::new(delay)),
                run_pipeline,
            ),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn requests_are_held_for_the_configured_delay() {
        let start = Instant::now();

        let response = app(Duration::from_millis(700))
            .oneshot(http::Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), http::StatusCode::OK);
        assert!(start.elapsed() >= Duration::from_millis(700));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_delay_does_not_sleep() {
        let start = Instant::now();

        app(Duration::ZERO)
            .oneshot(http::Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
