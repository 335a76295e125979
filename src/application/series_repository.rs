// Repository trait for prediction series access
use async_trait::async_trait;

use crate::domain::error::DashboardError;
use crate::domain::measurement::{MeasurementSeries, Quantity};

#[async_trait]
pub trait SeriesRepository: Send + Sync {
    /// Load the full prediction series for one quantity.
    /// Called once per quantity at startup; any failure is fatal.
    async fn load_series(&self, quantity: Quantity) -> Result<MeasurementSeries, DashboardError>;
}
