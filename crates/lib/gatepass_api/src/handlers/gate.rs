//! Security gate handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::Utc;
use gatepass_core::gate::{self, GateDecision};

use crate::AppState;
use crate::error::AppResult;
use crate::handlers::qr::resolve_scan;
use crate::models::{GateCheckResponse, ScanRequest};

/// `POST /api/gate/check` — grant or deny physical exit for a scan.
///
/// A denial is a domain outcome, not an error: it comes back as 403 with
/// a reason rather than an `AppError` body.
pub async fn check_handler(
    State(state): State<AppState>,
    Json(body): Json<ScanRequest>,
) -> AppResult<(StatusCode, Json<GateCheckResponse>)> {
    let (request_id, token) = resolve_scan(body)?;

    let decision = gate::check_access(&state.pool, request_id, &token, Utc::now()).await?;

    let (status, resp) = match decision {
        GateDecision::Granted => (
            StatusCode::OK,
            GateCheckResponse {
                allowed: true,
                message: "Access granted".into(),
                reason: None,
            },
        ),
        GateDecision::Denied(reason) => (
            StatusCode::FORBIDDEN,
            GateCheckResponse {
                allowed: false,
                message: "Access denied".into(),
                reason: Some(reason),
            },
        ),
    };
    Ok((status, Json(resp)))
}
