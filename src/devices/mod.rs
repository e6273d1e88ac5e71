// devices/mod.rs
mod registry;
pub use registry::DeviceRegistry;

use crate::models::Device;

/// Devices present at startup, in listing order.
pub fn seed_devices() -> Vec<Device> {
    vec![
        Device::new("0feed", "Kitchen", false, 0.0),
        Device::new("aa901", "Foyer 1", true, 0.0),
        Device::new("aa902", "Foyer 2", true, 0.8),
    ]
}
