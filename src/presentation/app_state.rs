// Application state for HTTP handlers
use crate::application::daily_view_service::DailyViewService;
use crate::application::dashboard_service::DashboardService;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub daily_view_service: DailyViewService,
}
