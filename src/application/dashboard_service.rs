// Dashboard service - summary and chart view-models
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::measurement::{MeasurementRecord, Quantity};
use crate::domain::station::StationDescriptor;

use super::dashboard_context::{DashboardContext, SummaryAverages};

/// Static header payload: the map marker, the average tiles, and the dates
/// offered by the day dropdown.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub station: StationDescriptor,
    /// Map-marker tooltip text, e.g. "PM2.5: 3.7 µg/m³".
    pub tooltip: String,
    pub averages: SummaryAverages,
    pub available_dates: Vec<NaiveDate>,
    pub default_date: Option<NaiveDate>,
}

/// Full series for one quantity, shaped for a line chart.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    pub quantity: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub points: Vec<MeasurementRecord>,
}

#[derive(Clone)]
pub struct DashboardService {
    context: Arc<DashboardContext>,
}

impl DashboardService {
    pub fn new(context: Arc<DashboardContext>) -> Self {
        Self { context }
    }

    /// The dropdown lists the PM2.5 series' dates with the first one
    /// preselected, as in the source dashboard.
    pub fn summary(&self) -> DashboardSummary {
        let available_dates = self.context.pm25.distinct_dates();
        let default_date = available_dates.first().copied();

        DashboardSummary {
            tooltip: self.context.station.tooltip(),
            station: self.context.station.clone(),
            averages: self.context.averages,
            available_dates,
            default_date,
        }
    }

    pub fn chart_series(&self, quantity: Quantity) -> ChartSeries {
        let series = self.context.series(quantity);
        ChartSeries {
            quantity: quantity.slug(),
            label: quantity.label(),
            unit: quantity.unit(),
            points: series.records.clone(),
        }
    }
}
