// Application layer - Use cases over the immutable startup context
pub mod daily_view_service;
pub mod dashboard_context;
pub mod dashboard_service;
pub mod series_repository;
