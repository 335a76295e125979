// Daily view service - the day-selection use case
use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::view::{build_daily_view, DailyRecord, MergeStrategy};

use super::dashboard_context::DashboardContext;

#[derive(Clone)]
pub struct DailyViewService {
    context: Arc<DashboardContext>,
    strategy: MergeStrategy,
}

impl DailyViewService {
    pub fn new(context: Arc<DashboardContext>, strategy: MergeStrategy) -> Self {
        Self { context, strategy }
    }

    /// Recomputed on every day selection; a date with no data yields an
    /// empty view rather than an error.
    pub fn daily_view(&self, date: NaiveDate) -> Vec<DailyRecord> {
        let view = build_daily_view(
            &self.context.pm25,
            &self.context.humidity,
            &self.context.temperature,
            date,
            self.strategy,
        );
        tracing::debug!(%date, rows = view.len(), "built daily view");
        view
    }
}
