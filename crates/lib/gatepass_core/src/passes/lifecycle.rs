//! Pass lifecycle transitions.
//!
//! A request is created `Pending` and decided at most once. The decision
//! runs under a row lock so two simultaneous approvers serialize; the
//! second one gets a conflict instead of silently overwriting.

use sqlx::PgPool;
use tracing::info;

use super::{PassError, queries};
use crate::models::pass::{Decision, GatePassRequest, NewPassRequest, PassStatus};

// One fixed statement per transition; chosen by a match, never assembled
// by string concatenation.
const APPROVE_SQL: &str = "UPDATE gate_pass_requests \
     SET status = 'Approved', approved_by = $2, approved_at = now() \
     WHERE id = $1 RETURNING *";

const REJECT_SQL: &str = "UPDATE gate_pass_requests \
     SET status = 'Rejected', rejected_at = now() \
     WHERE id = $1 RETURNING *";

const REJECT_WITH_REASON_SQL: &str = "UPDATE gate_pass_requests \
     SET status = 'Rejected', rejection_reason = $2, rejected_at = now() \
     WHERE id = $1 RETURNING *";

/// Validate creation input: reason present, window well-formed.
pub fn validate_new_request(input: &NewPassRequest) -> Result<(), PassError> {
    if input.reason.trim().is_empty() {
        return Err(PassError::Validation("reason is required".into()));
    }
    if input.from_time > input.to_time {
        return Err(PassError::Validation(
            "from_time must not be after to_time".into(),
        ));
    }
    Ok(())
}

/// Create a gate pass request with `Pending` status.
pub async fn create_request(
    pool: &PgPool,
    input: NewPassRequest,
) -> Result<GatePassRequest, PassError> {
    validate_new_request(&input)?;
    let pass = queries::insert_request(pool, &input).await?;
    info!(id = pass.id, student_id = pass.student_id, "gate pass request created");
    Ok(pass)
}

/// Apply an approver's decision to a pending request.
///
/// Sets the status, the matching timestamp, `approved_by` on approval and
/// `rejection_reason` on rejection when one was given. A request that has
/// already been decided yields `PassError::Conflict`.
pub async fn decide(
    pool: &PgPool,
    request_id: i64,
    decision: Decision,
    approver_id: Option<i64>,
    rejection_reason: Option<&str>,
) -> Result<GatePassRequest, PassError> {
    let mut tx = pool.begin().await?;

    let status = sqlx::query_scalar::<_, PassStatus>(
        "SELECT status FROM gate_pass_requests WHERE id = $1 FOR UPDATE",
    )
    .bind(request_id)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(status) = status else {
        return Err(PassError::NotFound(format!("request {request_id} not found")));
    };
    if status != PassStatus::Pending {
        return Err(PassError::Conflict(format!(
            "request {request_id} is already {status}"
        )));
    }

    let reason = rejection_reason
        .map(str::trim)
        .filter(|r| !r.is_empty());

    let pass = match (decision, reason) {
        (Decision::Approved, _) => {
            sqlx::query_as::<_, GatePassRequest>(APPROVE_SQL)
                .bind(request_id)
                .bind(approver_id)
                .fetch_one(&mut *tx)
                .await?
        }
        (Decision::Rejected, Some(reason)) => {
            sqlx::query_as::<_, GatePassRequest>(REJECT_WITH_REASON_SQL)
                .bind(request_id)
                .bind(reason)
                .fetch_one(&mut *tx)
                .await?
        }
        (Decision::Rejected, None) => {
            sqlx::query_as::<_, GatePassRequest>(REJECT_SQL)
                .bind(request_id)
                .fetch_one(&mut *tx)
                .await?
        }
    };

    tx.commit().await?;

    info!(
        id = request_id,
        status = %pass.status,
        approver = approver_id,
        "gate pass request decided"
    );
    Ok(pass)
}
