//! Approval request handlers (faculty / HOD).

use axum::Json;
use axum::extract::State;
use gatepass_core::passes::{self, lifecycle, queries};

use crate::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{DecisionRequest, PassResponse, PendingRequestResponse, StatsResponse};

/// `GET /api/approvals/pending` — pending requests with requester names,
/// most recent window first.
pub async fn pending_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<PendingRequestResponse>>> {
    let rows = queries::pending_requests(&state.pool).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// `POST /api/approvals/decide` — approve or reject a pending request.
///
/// The approver identity comes from the verified token, not the body.
pub async fn decide_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Json(body): Json<DecisionRequest>,
) -> AppResult<Json<PassResponse>> {
    let decision = passes::parse_decision(&body.decision)?;
    let pass = lifecycle::decide(
        &state.pool,
        body.request_id,
        decision,
        Some(user.0.sub),
        body.rejection_reason.as_deref(),
    )
    .await?;
    Ok(Json(pass.into()))
}

/// `GET /api/approvals/stats` — cumulative counts for the HOD dashboard.
pub async fn stats_handler(State(state): State<AppState>) -> AppResult<Json<StatsResponse>> {
    let stats = queries::stats(&state.pool).await?;
    Ok(Json(StatsResponse {
        total_passes: stats.total,
        approved: stats.approved,
        rejected: stats.rejected,
        pending: stats.pending,
    }))
}
