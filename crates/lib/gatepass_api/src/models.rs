//! Request/response DTOs.
//!
//! Wire shapes consumed by the dashboards and the gate scanner client.
//! Kept separate from `gatepass_core::models` so the JSON contract can
//! rename fields without touching the domain types.

use gatepass_core::gate::DenialReason;
use gatepass_core::models::pass::{GatePassRequest, PassSummary, PendingRequest};
use serde::{Deserialize, Serialize};

/// Error body returned for every `AppError`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub role: String,
    pub user_id: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: i64,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub user_id: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub id: i64,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Passes
// ---------------------------------------------------------------------------

/// Explicit student reference: exactly one of the two shapes, instead of
/// optional `student_id`/`name` fields with fallbacks.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum StudentRef {
    ById { student_id: i64 },
    ByName { name: String },
}

#[derive(Debug, Deserialize)]
pub struct CreatePassRequest {
    pub student: StudentRef,
    pub reason: String,
    pub from_time: String,
    pub to_time: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassResponse {
    pub id: i64,
    pub student_id: i64,
    pub faculty_id: Option<i64>,
    pub reason: String,
    pub from_time: String,
    pub to_time: String,
    pub status: String,
    pub qr_code: Option<String>,
    pub rejection_reason: Option<String>,
    pub approved_at: Option<String>,
    pub rejected_at: Option<String>,
    pub approved_by: Option<i64>,
    pub created_at: String,
}

impl From<GatePassRequest> for PassResponse {
    fn from(p: GatePassRequest) -> Self {
        Self {
            id: p.id,
            student_id: p.student_id,
            faculty_id: p.faculty_id,
            reason: p.reason,
            from_time: p.from_time.to_rfc3339(),
            to_time: p.to_time.to_rfc3339(),
            status: p.status.to_string(),
            qr_code: p.qr_code,
            rejection_reason: p.rejection_reason,
            approved_at: p.approved_at.map(|t| t.to_rfc3339()),
            rejected_at: p.rejected_at.map(|t| t.to_rfc3339()),
            approved_by: p.approved_by,
            created_at: p.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassSummaryResponse {
    pub id: i64,
    pub student_id: i64,
    pub reason: String,
    pub from_time: String,
    pub to_time: String,
    pub status: String,
    pub faculty: Option<String>,
}

impl From<PassSummary> for PassSummaryResponse {
    fn from(p: PassSummary) -> Self {
        Self {
            id: p.id,
            student_id: p.student_id,
            reason: p.reason,
            from_time: p.from_time.to_rfc3339(),
            to_time: p.to_time.to_rfc3339(),
            status: p.status.to_string(),
            faculty: p.faculty_name,
        }
    }
}

// ---------------------------------------------------------------------------
// Approvals
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct DecisionRequest {
    pub request_id: i64,
    /// Exactly `Approved` or `Rejected`.
    pub decision: String,
    pub rejection_reason: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingRequestResponse {
    pub id: i64,
    pub reason: String,
    pub from_time: String,
    pub to_time: String,
    pub status: String,
    pub student_name: String,
    pub student_no: String,
}

impl From<PendingRequest> for PendingRequestResponse {
    fn from(r: PendingRequest) -> Self {
        Self {
            id: r.id,
            reason: r.reason,
            from_time: r.from_time.to_rfc3339(),
            to_time: r.to_time.to_rfc3339(),
            status: r.status.to_string(),
            student_name: r.student_name,
            student_no: r.student_no,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_passes: i64,
    pub approved: i64,
    pub rejected: i64,
    pub pending: i64,
}

// ---------------------------------------------------------------------------
// QR & gate
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MintQrResponse {
    pub success: bool,
    pub pass_id: i64,
    pub qr_token: String,
    pub qr_path: String,
}

/// A scan submission: either structured fields or the raw payload string
/// read off the code. Exactly one shape, validated at the boundary.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ScanRequest {
    Fields { request_id: i64, qr: String },
    Payload { payload: String },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyQrResponse {
    pub valid: bool,
    pub pass: PassResponse,
}

#[derive(Debug, Serialize)]
pub struct GateCheckResponse {
    pub allowed: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<DenialReason>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_ref_deserializes_both_shapes() {
        let by_id: StudentRef = serde_json::from_str(r#"{"student_id": 7}"#).unwrap();
        assert!(matches!(by_id, StudentRef::ById { student_id: 7 }));

        let by_name: StudentRef = serde_json::from_str(r#"{"name": "Asha"}"#).unwrap();
        assert!(matches!(by_name, StudentRef::ByName { name } if name == "Asha"));
    }

    #[test]
    fn scan_request_deserializes_both_shapes() {
        let fields: ScanRequest =
            serde_json::from_str(r#"{"request_id": 42, "qr": "abc-123"}"#).unwrap();
        assert!(matches!(fields, ScanRequest::Fields { request_id: 42, .. }));

        let raw: ScanRequest = serde_json::from_str(r#"{"payload": "REQ:42|QR:abc-123"}"#).unwrap();
        assert!(matches!(raw, ScanRequest::Payload { .. }));
    }

    #[test]
    fn scan_request_rejects_empty_object() {
        assert!(serde_json::from_str::<ScanRequest>("{}").is_err());
    }
}
