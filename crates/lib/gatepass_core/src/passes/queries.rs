//! Pass-related database queries.

use sqlx::PgPool;

use super::PassError;
use crate::models::pass::{
    GatePassRequest, NewPassRequest, PassStats, PassSummary, PendingRequest, StudentLookup,
};

/// Insert a new request with `Pending` status, returning the stored row.
pub async fn insert_request(
    pool: &PgPool,
    input: &NewPassRequest,
) -> Result<GatePassRequest, PassError> {
    let pass = sqlx::query_as::<_, GatePassRequest>(
        "INSERT INTO gate_pass_requests \
             (student_id, faculty_id, reason, from_time, to_time) \
         VALUES ($1, $2, $3, $4, $5) \
         RETURNING *",
    )
    .bind(input.student_id)
    .bind(input.faculty_id)
    .bind(&input.reason)
    .bind(input.from_time)
    .bind(input.to_time)
    .fetch_one(pool)
    .await?;
    Ok(pass)
}

/// All pending requests joined with the requester's display name,
/// most recently requested window first.
pub async fn pending_requests(pool: &PgPool) -> Result<Vec<PendingRequest>, PassError> {
    let rows = sqlx::query_as::<_, PendingRequest>(
        "SELECT r.id, r.reason, r.from_time, r.to_time, r.status, \
                s.name AS student_name, s.student_no \
         FROM gate_pass_requests r \
         JOIN students s ON r.student_id = s.id \
         WHERE r.status = 'Pending' \
         ORDER BY r.from_time DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// All passes joined with the assigned faculty's name, newest window first.
pub async fn list_passes(pool: &PgPool) -> Result<Vec<PassSummary>, PassError> {
    let rows = sqlx::query_as::<_, PassSummary>(
        "SELECT r.id, r.student_id, r.reason, r.from_time, r.to_time, r.status, \
                f.name AS faculty_name \
         FROM gate_pass_requests r \
         LEFT JOIN faculty f ON r.faculty_id = f.id \
         ORDER BY r.from_time DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// All passes for one student, newest first.
pub async fn passes_for_student(
    pool: &PgPool,
    student_id: i64,
) -> Result<Vec<GatePassRequest>, PassError> {
    let rows = sqlx::query_as::<_, GatePassRequest>(
        "SELECT * FROM gate_pass_requests \
         WHERE student_id = $1 \
         ORDER BY created_at DESC",
    )
    .bind(student_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Cumulative request counts.
pub async fn stats(pool: &PgPool) -> Result<PassStats, PassError> {
    let stats = sqlx::query_as::<_, PassStats>(
        "SELECT COUNT(*) AS total, \
                COUNT(*) FILTER (WHERE status = 'Approved') AS approved, \
                COUNT(*) FILTER (WHERE status = 'Rejected') AS rejected, \
                COUNT(*) FILTER (WHERE status = 'Pending') AS pending \
         FROM gate_pass_requests",
    )
    .fetch_one(pool)
    .await?;
    Ok(stats)
}

/// Resolve a student reference to the `students` row id.
pub async fn resolve_student(
    pool: &PgPool,
    lookup: &StudentLookup,
) -> Result<i64, PassError> {
    let row = match lookup {
        StudentLookup::ById(id) => {
            sqlx::query_scalar::<_, i64>("SELECT id FROM students WHERE id = $1")
                .bind(id)
                .fetch_optional(pool)
                .await?
        }
        StudentLookup::ByName(name) => {
            sqlx::query_scalar::<_, i64>("SELECT id FROM students WHERE name = $1")
                .bind(name)
                .fetch_optional(pool)
                .await?
        }
    };
    row.ok_or_else(|| PassError::NotFound("student not found".into()))
}
