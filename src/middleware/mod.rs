// middleware/mod.rs
mod access_log;
mod cors;
mod latency;

pub use access_log::AccessLog;
pub use cors::Cors;
pub use latency::Latency;

use async_trait::async_trait;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::{sync::Arc, time::Duration};

/// One link of the request pipeline.
///
/// A stage either answers the request itself or hands it to `next`.
#[async_trait]
pub trait Stage: Send + Sync {
    async fn handle(&self, request: Request, next: Chain<'_>) -> Response;
}

/// The remaining stages, ending at the router.
pub struct Chain<'a> {
    stages: &'a [Arc<dyn Stage>],
    endpoint: Next,
}

impl Chain<'_> {
    pub async fn run(self, request: Request) -> Response {
        match self.stages.split_first() {
            Some((stage, rest)) => {
                let next = Chain {
                    stages: rest,
                    endpoint: self.endpoint,
                };
                stage.handle(request, next).await
            }
            None => self.endpoint.run(request).await,
        }
    }
}

#[derive(Clone, Default)]
pub struct Pipeline {
    stages: Vec<Arc<dyn Stage>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cross-origin headers, access log, then the artificial delay.
    pub fn standard(latency: Duration) -> Self {
        Self::new()
            .stage(Cors)
            .stage(AccessLog)
            .stage(Latency::new(latency))
    }

    pub fn stage<S: Stage + 'static>(mut self, stage: S) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }
}

/// Entry point for `axum::middleware::from_fn_with_state`.
pub async fn run_pipeline(
    State(pipeline): State<Pipeline>,
    request: Request,
    next: Next,
) -> Response {
    Chain {
        stages: &pipeline.stages,
        endpoint: next,
    }
    .run(request)
    .await
}
