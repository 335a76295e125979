// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use axum::{routing::get, Router};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::application::daily_view_service::DailyViewService;
use crate::application::dashboard_context::DashboardContext;
use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::csv_repository::CsvSeriesRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_daily_view, get_dashboard, get_series, health_check};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first; its debug flag sets the default log level
    let config = load_dashboard_config()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if config.server.debug { "debug" } else { "info" })
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Create repository (infrastructure layer)
    let repository = CsvSeriesRepository::new(
        config.data.pm25_path,
        config.data.humidity_path,
        config.data.temperature_path,
    );

    // Load everything once; the context stays immutable for the process
    let context = Arc::new(DashboardContext::load(&repository, config.station.into()).await?);

    // Create services (application layer)
    let dashboard_service = DashboardService::new(context.clone());
    let daily_view_service = DailyViewService::new(context, config.view.merge);

    let state = Arc::new(AppState {
        dashboard_service,
        daily_view_service,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/series/:quantity", get(get_series))
        .route("/daily/:date", get(get_daily_view))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("starting airq-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
