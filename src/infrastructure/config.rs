use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::station::StationDescriptor;
use crate::domain::view::MergeStrategy;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    pub data: DataSettings,
    pub station: StationSettings,
    #[serde(default)]
    pub view: ViewSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub port: u16,
    #[serde(default)]
    pub debug: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataSettings {
    pub pm25_path: PathBuf,
    pub humidity_path: PathBuf,
    pub temperature_path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StationSettings {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub reading: f64,
    pub unit: String,
}

impl From<StationSettings> for StationDescriptor {
    fn from(settings: StationSettings) -> Self {
        StationDescriptor {
            name: settings.name,
            latitude: settings.latitude,
            longitude: settings.longitude,
            reading: settings.reading,
            unit: settings.unit,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ViewSettings {
    #[serde(default)]
    pub merge: MergeStrategy,
}

/// Resolve configuration from `config/dashboard.toml` plus `AIRQ`-prefixed
/// environment overrides (for example `AIRQ__SERVER__PORT`).
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard"))
        .add_source(config::Environment::with_prefix("AIRQ").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
