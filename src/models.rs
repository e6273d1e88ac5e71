use crate::{devices::DeviceRegistry, error::AppError};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single controllable lighting fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Device {
    pub id: String,
    pub name: String,
    pub dimmable: bool,
    /// Brightness, nominally in `0.0..=1.0`. Not clamped.
    pub value: f64,
}

impl Device {
    pub fn new(id: &str, name: &str, dimmable: bool, value: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            dimmable,
            value,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateDeviceRequest {
    pub value: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug)]
pub struct AppState {
    pub devices: DeviceRegistry,
}

impl AppState {
    pub fn new() -> Result<Self, AppError> {
        Ok(Self {
            devices: DeviceRegistry::seeded()?,
        })
    }
}
