// Station domain model
use serde::{Deserialize, Serialize};

/// Static metadata about the sensor site shown on the map.
/// Comes from configuration and never changes at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationDescriptor {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// One representative instantaneous reading for the map tooltip.
    pub reading: f64,
    pub unit: String,
}

impl StationDescriptor {
    pub fn tooltip(&self) -> String {
        format!("PM2.5: {} {}", self.reading, self.unit)
    }
}
