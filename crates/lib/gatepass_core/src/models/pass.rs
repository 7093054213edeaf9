//! Gate pass domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a gate pass request.
///
/// A request starts `Pending` and transitions at most once, to either
/// `Approved` or `Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "pass_status")]
pub enum PassStatus {
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for PassStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PassStatus::Pending => write!(f, "Pending"),
            PassStatus::Approved => write!(f, "Approved"),
            PassStatus::Rejected => write!(f, "Rejected"),
        }
    }
}

/// An approver's terminal verdict on a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approved,
    Rejected,
}

/// A gate pass request as stored in `gate_pass_requests`.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct GatePassRequest {
    pub id: i64,
    pub student_id: i64,
    pub faculty_id: Option<i64>,
    pub reason: String,
    pub from_time: DateTime<Utc>,
    pub to_time: DateTime<Utc>,
    pub status: PassStatus,
    pub qr_code: Option<String>,
    pub rejection_reason: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
    pub rejected_at: Option<DateTime<Utc>>,
    pub approved_by: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a gate pass request.
#[derive(Debug, Clone)]
pub struct NewPassRequest {
    pub student_id: i64,
    pub faculty_id: Option<i64>,
    pub reason: String,
    pub from_time: DateTime<Utc>,
    pub to_time: DateTime<Utc>,
}

/// How a caller identifies the requesting student.
///
/// Explicit variants instead of the "`student_id` or `name`, whichever is
/// present" request shapes the dashboards used to send.
#[derive(Debug, Clone)]
pub enum StudentLookup {
    ById(i64),
    ByName(String),
}

/// A pending request joined with the requester's display name, as shown
/// on approver dashboards.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PendingRequest {
    pub id: i64,
    pub reason: String,
    pub from_time: DateTime<Utc>,
    pub to_time: DateTime<Utc>,
    pub status: PassStatus,
    pub student_name: String,
    pub student_no: String,
}

/// A pass joined with the assigned faculty's display name, as shown on
/// the student dashboard.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PassSummary {
    pub id: i64,
    pub student_id: i64,
    pub reason: String,
    pub from_time: DateTime<Utc>,
    pub to_time: DateTime<Utc>,
    pub status: PassStatus,
    pub faculty_name: Option<String>,
}

/// Cumulative request counts for the HOD dashboard.
#[derive(Debug, Clone, Copy, Serialize, sqlx::FromRow)]
pub struct PassStats {
    pub total: i64,
    pub approved: i64,
    pub rejected: i64,
    pub pending: i64,
}
