//! REST API endpoints for guest check-in and the registration export

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::export::{registrations_csv, EXPORT_CONTENT_DISPOSITION};
use crate::state::AppState;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Free-text name typed by the guest; missing and null are both "blank"
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub success: bool,
    pub name: String,
    pub table_number: i32,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FailureResponse {
    pub success: bool,
    pub message: String,
}

// =============================================================================
// REGISTRATION
// =============================================================================

/// POST /api/register
pub async fn register_guest(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let Json(request) = payload?;
    let raw_name = request.name.unwrap_or_default();

    let check_in = state
        .registrations
        .register(&raw_name)
        .await
        .map_err(|e| {
            tracing::info!("Check-in rejected for '{}': {}", raw_name.trim(), e);
            e
        })?;

    if check_in.newly_registered {
        tracing::info!(
            "Checked in '{}' at table {}",
            check_in.seat.name,
            check_in.seat.table_number
        );
    } else {
        tracing::debug!("'{}' already checked in", check_in.seat.name);
    }

    Ok(Json(RegisterResponse {
        success: true,
        name: check_in.seat.name,
        table_number: check_in.seat.table_number,
    }))
}

// =============================================================================
// EXPORT
// =============================================================================

/// GET /api/guests.csv
pub async fn export_guests(State(state): State<AppState>) -> impl IntoResponse {
    let registrations = state.registrations.registrations().await;
    tracing::debug!("Exporting {} registrations", registrations.len());

    (
        [
            (CONTENT_TYPE, "text/csv"),
            (CONTENT_DISPOSITION, EXPORT_CONTENT_DISPOSITION),
        ],
        registrations_csv(&registrations),
    )
}
