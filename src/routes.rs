// routes.rs
use crate::{
    docs::ApiDoc,
    handlers::{list_devices, preflight, update_device},
    middleware::{Pipeline, run_pipeline},
    models::AppState,
};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub const DEVICES_PATH: &str = "/lighting_service/v1/devices";

pub fn router(state: Arc<AppState>, pipeline: Pipeline) -> Router {
    Router::new()
        .route(DEVICES_PATH, get(list_devices).options(preflight))
        .route(
            "/lighting_service/v1/devices/{device_id}",
            post(update_device).options(preflight),
        )
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(axum::middleware::from_fn_with_state(pipeline, run_pipeline))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
