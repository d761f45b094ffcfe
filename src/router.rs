//! Router construction for the check-in server.

use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::routes::{api, static_files};
use crate::state::AppState;

/// Build the full axum router: API routes, then static files with the
/// front-end entry page as the catch-all.
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/api/register", post(api::register_guest))
        .route("/api/guests.csv", get(api::export_guests))
        .fallback_service(static_files::spa_service(static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
