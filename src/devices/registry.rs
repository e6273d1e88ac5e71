// registry.rs
use crate::{error::AppError, models::Device};
use dashmap::DashMap;
use tracing::debug;

/// Fixed set of devices keyed by id.
///
/// Membership never changes after construction; only `value` is mutable.
/// Each update holds the entry's shard lock for the whole read-modify-write,
/// so concurrent updates to different devices cannot interfere.
#[derive(Debug)]
pub struct DeviceRegistry {
    devices: DashMap<String, Device>,
    order: Vec<String>,
}

impl DeviceRegistry {
    pub fn new(devices: Vec<Device>) -> Result<Self, AppError> {
        let map = DashMap::with_capacity(devices.len());
        let mut order = Vec::with_capacity(devices.len());

        for device in devices {
            if map.contains_key(&device.id) {
                return Err(AppError::DuplicateDevice(device.id));
            }
            order.push(device.id.clone());
            map.insert(device.id.clone(), device);
        }

        Ok(Self {
            devices: map,
            order,
        })
    }

    pub fn seeded() -> Result<Self, AppError> {
        Self::new(super::seed_devices())
    }

    pub fn list(&self) -> Vec<Device> {
        self.order
            .iter()
            .filter_map(|id| self.devices.get(id).map(|entry| entry.value().clone()))
            .collect()
    }

    pub fn update_value(&self, id: &str, value: f64) -> Result<Device, AppError> {
        let mut entry = self
            .devices
            .get_mut(id)
            .ok_or_else(|| AppError::DeviceNotFound(id.to_string()))?;

        debug!(device_id = %id, old = entry.value, new = value, "Updating device value");
        entry.value = value;

        Ok(entry.value().clone())
    }
}
