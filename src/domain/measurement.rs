// Measurement series domain models
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::error::DashboardError;

/// The three predicted quantities the dashboard tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    Pm25,
    Humidity,
    Temperature,
}

impl Quantity {
    pub const ALL: [Quantity; 3] = [Quantity::Pm25, Quantity::Humidity, Quantity::Temperature];

    pub fn slug(&self) -> &'static str {
        match self {
            Quantity::Pm25 => "pm25",
            Quantity::Humidity => "humidity",
            Quantity::Temperature => "temperature",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Quantity> {
        Quantity::ALL.into_iter().find(|q| q.slug() == slug)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Quantity::Pm25 => "PM2.5",
            Quantity::Humidity => "Humidity",
            Quantity::Temperature => "Temperature",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Quantity::Pm25 => "µg/m³",
            Quantity::Humidity => "%",
            Quantity::Temperature => "°C",
        }
    }
}

/// One predicted sample: a naive local timestamp and its value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    pub timestamp: NaiveDateTime,
    pub value: f64,
}

impl MeasurementRecord {
    pub fn new(timestamp: NaiveDateTime, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Time-ordered samples for one quantity, loaded once and then read-only.
#[derive(Debug, Clone)]
pub struct MeasurementSeries {
    pub records: Vec<MeasurementRecord>,
}

impl MeasurementSeries {
    pub fn new(records: Vec<MeasurementRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Arithmetic mean over the whole series. Empty series are an error:
    /// the dashboard refuses to start without data rather than showing NaN.
    pub fn average(&self) -> Result<f64, DashboardError> {
        if self.records.is_empty() {
            return Err(DashboardError::EmptyInput("cannot average an empty series"));
        }
        let sum: f64 = self.records.iter().map(|r| r.value).sum();
        Ok(sum / self.records.len() as f64)
    }

    /// All records whose timestamp falls on the given calendar day,
    /// in series order.
    pub fn for_day(&self, date: NaiveDate) -> Vec<MeasurementRecord> {
        self.records
            .iter()
            .copied()
            .filter(|r| r.timestamp.date() == date)
            .collect()
    }

    /// Distinct calendar dates in first-seen order. Drives the day dropdown;
    /// the first entry is the default selection.
    pub fn distinct_dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = Vec::new();
        for record in &self.records {
            let date = record.timestamp.date();
            if !dates.contains(&date) {
                dates.push(date);
            }
        }
        dates
    }
}
