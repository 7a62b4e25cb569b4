pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis_handlers;
use crate::intake::MAX_UPLOAD_BYTES;
use crate::report::handlers as report_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route(
            "/api/v1/analysis/profile",
            post(analysis_handlers::handle_analyze_profile),
        )
        .route(
            "/api/v1/analysis/resume",
            post(analysis_handlers::handle_analyze_resume),
        )
        // Report API
        .route(
            "/api/v1/reports/pdf",
            post(report_handlers::handle_export_pdf),
        )
        .route(
            "/api/v1/reports/share",
            post(report_handlers::handle_share_report),
        )
        // Resume uploads may reach the 5 MB cap plus multipart overhead.
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 64 * 1024))
        .with_state(state)
}
