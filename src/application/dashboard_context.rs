// Immutable startup context - the loaded series and their summary averages
use serde::Serialize;

use crate::domain::error::DashboardError;
use crate::domain::measurement::{MeasurementSeries, Quantity};
use crate::domain::station::StationDescriptor;

use super::series_repository::SeriesRepository;

/// Whole-dataset means, computed once at startup for the header tiles.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SummaryAverages {
    pub pm25: f64,
    pub humidity: f64,
    pub temperature: f64,
}

/// Everything the dashboard serves, loaded once and never mutated.
/// Handlers share it read-only, so concurrent requests need no locking.
pub struct DashboardContext {
    pub station: StationDescriptor,
    pub pm25: MeasurementSeries,
    pub humidity: MeasurementSeries,
    pub temperature: MeasurementSeries,
    pub averages: SummaryAverages,
}

impl DashboardContext {
    /// Load all three series and compute their averages. An unreadable file,
    /// a bad schema, or an empty series aborts startup.
    pub async fn load(
        repository: &dyn SeriesRepository,
        station: StationDescriptor,
    ) -> Result<Self, DashboardError> {
        let pm25 = repository.load_series(Quantity::Pm25).await?;
        let humidity = repository.load_series(Quantity::Humidity).await?;
        let temperature = repository.load_series(Quantity::Temperature).await?;

        let averages = SummaryAverages {
            pm25: pm25.average()?,
            humidity: humidity.average()?,
            temperature: temperature.average()?,
        };

        tracing::info!(
            pm25_rows = pm25.len(),
            humidity_rows = humidity.len(),
            temperature_rows = temperature.len(),
            "loaded prediction series"
        );

        Ok(Self {
            station,
            pm25,
            humidity,
            temperature,
            averages,
        })
    }

    pub fn series(&self, quantity: Quantity) -> &MeasurementSeries {
        match quantity {
            Quantity::Pm25 => &self.pm25,
            Quantity::Humidity => &self.humidity,
            Quantity::Temperature => &self.temperature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::measurement::MeasurementRecord;
    use async_trait::async_trait;
    use chrono::NaiveDate;

    struct InMemoryRepository {
        rows_per_series: usize,
    }

    #[async_trait]
    impl SeriesRepository for InMemoryRepository {
        async fn load_series(
            &self,
            quantity: Quantity,
        ) -> Result<MeasurementSeries, DashboardError> {
            let base = match quantity {
                Quantity::Pm25 => 1.0,
                Quantity::Humidity => 2.0,
                Quantity::Temperature => 3.0,
            };
            let records = (0..self.rows_per_series)
                .map(|h| {
                    MeasurementRecord::new(
                        NaiveDate::from_ymd_opt(2024, 1, 1)
                            .unwrap()
                            .and_hms_opt(h as u32, 0, 0)
                            .unwrap(),
                        base,
                    )
                })
                .collect();
            Ok(MeasurementSeries::new(records))
        }
    }

    fn station() -> StationDescriptor {
        StationDescriptor {
            name: "test".to_string(),
            latitude: 0.0,
            longitude: 0.0,
            reading: 0.0,
            unit: "µg/m³".to_string(),
        }
    }

    #[tokio::test]
    async fn load_computes_one_average_per_quantity() {
        let repository = InMemoryRepository { rows_per_series: 4 };
        let context = DashboardContext::load(&repository, station()).await.unwrap();

        assert_eq!(context.averages.pm25, 1.0);
        assert_eq!(context.averages.humidity, 2.0);
        assert_eq!(context.averages.temperature, 3.0);
        assert_eq!(context.series(Quantity::Humidity).len(), 4);
    }

    #[tokio::test]
    async fn empty_series_abort_startup() {
        let repository = InMemoryRepository { rows_per_series: 0 };
        let result = DashboardContext::load(&repository, station()).await;
        assert!(matches!(result, Err(DashboardError::EmptyInput(_))));
    }
}
