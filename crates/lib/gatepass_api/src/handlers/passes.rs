//! Pass request handlers.

use axum::Json;
use axum::extract::{Path, State};
use gatepass_core::models::pass::{NewPassRequest, StudentLookup};
use gatepass_core::passes::{self, lifecycle, queries};

use crate::AppState;
use crate::error::AppResult;
use crate::models::{CreatePassRequest, PassResponse, PassSummaryResponse, StudentRef};

impl From<StudentRef> for StudentLookup {
    fn from(r: StudentRef) -> Self {
        match r {
            StudentRef::ById { student_id } => StudentLookup::ById(student_id),
            StudentRef::ByName { name } => StudentLookup::ByName(name),
        }
    }
}

/// `GET /api/passes` — all passes with the assigned faculty name.
pub async fn list_passes_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<PassSummaryResponse>>> {
    let rows = queries::list_passes(&state.pool).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// `POST /api/passes` — create a gate pass request (starts `Pending`).
pub async fn create_pass_handler(
    State(state): State<AppState>,
    Json(body): Json<CreatePassRequest>,
) -> AppResult<Json<PassResponse>> {
    let student_id = queries::resolve_student(&state.pool, &body.student.into()).await?;
    let input = NewPassRequest {
        student_id,
        faculty_id: None,
        reason: body.reason,
        from_time: passes::parse_request_time(&body.from_time)?,
        to_time: passes::parse_request_time(&body.to_time)?,
    };
    let pass = lifecycle::create_request(&state.pool, input).await?;
    Ok(Json(pass.into()))
}

/// `GET /api/students/{student_id}/passes` — a student's pass history.
pub async fn student_passes_handler(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
) -> AppResult<Json<Vec<PassResponse>>> {
    let rows = queries::passes_for_student(&state.pool, student_id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}
