// handlers.rs

use crate::{
    error::AppError,
    metrics,
    models::{AppState, Device, ErrorBody, UpdateDeviceRequest},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::info;

#[utoipa::path(
    get,
    path = "/lighting_service/v1/devices",
    tag = "devices",
    responses(
        (status = 200, description = "All devices in registry order", body = [Device])
    )
)]
pub async fn list_devices(State(state): State<Arc<AppState>>) -> Json<Vec<Device>> {
    Json(state.devices.list())
}

#[utoipa::path(
    post,
    path = "/lighting_service/v1/devices/{device_id}",
    tag = "devices",
    params(("device_id" = String, Path, description = "Device identifier")),
    request_body = UpdateDeviceRequest,
    responses(
        (status = 200, description = "Updated device", body = Device),
        (status = 404, description = "No device with this id", body = ErrorBody)
    )
)]
pub async fn update_device(
    State(state): State<Arc<AppState>>,
    Path(device_id): Path<String>,
    Json(body): Json<UpdateDeviceRequest>,
) -> Result<Json<Device>, AppError> {
    let device = state.devices.update_value(&device_id, body.value)?;

    info!(%device_id, value = device.value, "Device value updated");
    metrics::record_device_update(&device_id);

    Ok(Json(device))
}

/// Answers CORS preflight requests; the headers come from the `Cors` stage.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
