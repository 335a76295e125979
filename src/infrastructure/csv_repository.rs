// CSV-backed prediction series repository
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::application::series_repository::SeriesRepository;
use crate::domain::error::DashboardError;
use crate::domain::measurement::{MeasurementRecord, MeasurementSeries, Quantity};

/// Timestamp format used in the prediction CSVs: "2024-01-01 07:00:00".
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// ISO-8601 fallback with a `T` separator.
const DATETIME_FORMAT_ISO: &str = "%Y-%m-%dT%H:%M:%S";

const DATETIME_COLUMN: &str = "datetime";
const VALUE_COLUMN: &str = "prediction_label";

#[derive(Debug, Clone)]
pub struct CsvSeriesRepository {
    pm25_path: PathBuf,
    humidity_path: PathBuf,
    temperature_path: PathBuf,
}

impl CsvSeriesRepository {
    pub fn new(pm25_path: PathBuf, humidity_path: PathBuf, temperature_path: PathBuf) -> Self {
        Self {
            pm25_path,
            humidity_path,
            temperature_path,
        }
    }

    fn path_for(&self, quantity: Quantity) -> &Path {
        match quantity {
            Quantity::Pm25 => &self.pm25_path,
            Quantity::Humidity => &self.humidity_path,
            Quantity::Temperature => &self.temperature_path,
        }
    }
}

#[async_trait]
impl SeriesRepository for CsvSeriesRepository {
    async fn load_series(&self, quantity: Quantity) -> Result<MeasurementSeries, DashboardError> {
        let path = self.path_for(quantity);
        tracing::debug!(quantity = quantity.slug(), path = %path.display(), "loading series");

        let contents =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| DashboardError::DataSource {
                    path: path.to_path_buf(),
                    source,
                })?;

        read_series(contents.as_bytes(), path)
    }
}

/// Parse a two-column prediction CSV. Extra columns are ignored; a missing
/// expected column or an unparsable cell fails the whole load.
pub fn read_series(reader: impl io::Read, path: &Path) -> Result<MeasurementSeries, DashboardError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| schema_error(path, e.to_string()))?
        .clone();
    let datetime_idx = headers
        .iter()
        .position(|h| h == DATETIME_COLUMN)
        .ok_or_else(|| schema_error(path, format!("missing column '{DATETIME_COLUMN}'")))?;
    let value_idx = headers
        .iter()
        .position(|h| h == VALUE_COLUMN)
        .ok_or_else(|| schema_error(path, format!("missing column '{VALUE_COLUMN}'")))?;

    let mut records = Vec::new();
    for (index, row) in rdr.records().enumerate() {
        // Header is line 1, so data row `index` sits on line `index + 2`.
        let line = index + 2;
        let row = row.map_err(|e| schema_error(path, format!("line {line}: {e}")))?;

        let raw_timestamp = row
            .get(datetime_idx)
            .ok_or_else(|| schema_error(path, format!("line {line}: short row")))?;
        let timestamp = parse_timestamp(raw_timestamp).ok_or_else(|| {
            schema_error(path, format!("line {line}: unparsable timestamp '{raw_timestamp}'"))
        })?;

        let raw_value = row
            .get(value_idx)
            .ok_or_else(|| schema_error(path, format!("line {line}: short row")))?;
        let value: f64 = raw_value.trim().parse().map_err(|_| {
            schema_error(path, format!("line {line}: non-numeric value '{raw_value}'"))
        })?;

        records.push(MeasurementRecord::new(timestamp, value));
    }

    Ok(MeasurementSeries::new(records))
}

/// Write a series back out in the same two-column schema.
pub fn write_series(series: &MeasurementSeries, writer: impl io::Write) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([DATETIME_COLUMN, VALUE_COLUMN])?;
    for record in &series.records {
        wtr.write_record([
            record.timestamp.format(DATETIME_FORMAT).to_string(),
            record.value.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT_ISO))
        .ok()
}

fn schema_error(path: &Path, message: String) -> DashboardError {
    DashboardError::Schema {
        path: path.to_path_buf(),
        message,
    }
}
