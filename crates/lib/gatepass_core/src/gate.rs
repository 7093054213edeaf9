//! Gate access decision.
//!
//! Composes QR verification with the pass's current status and validity
//! window at scan time.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use tracing::info;

use crate::models::pass::{GatePassRequest, PassStatus};
use crate::qr::{QrError, service};

/// Why a scan was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    /// No binding matches the presented `(request_id, token)` pair.
    InvalidToken,
    /// The bound request is not in `Approved` status.
    NotApproved,
    /// The scan falls outside the pass's validity window.
    OutsideWindow,
}

/// Outcome of a gate scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Granted,
    Denied(DenialReason),
}

impl GateDecision {
    pub fn is_granted(self) -> bool {
        matches!(self, GateDecision::Granted)
    }
}

/// Pure decision over an already-fetched pass: approved and inside the
/// inclusive `[from_time, to_time]` window, or denied with a reason.
pub fn evaluate(pass: &GatePassRequest, now: DateTime<Utc>) -> GateDecision {
    if pass.status != PassStatus::Approved {
        return GateDecision::Denied(DenialReason::NotApproved);
    }
    if now < pass.from_time || now > pass.to_time {
        return GateDecision::Denied(DenialReason::OutsideWindow);
    }
    GateDecision::Granted
}

/// Full gate check for a scanned `(request_id, token)` pair.
///
/// Resolves the binding, evaluates status and window against `now`, and
/// stamps the binding's first-scan audit marker on a grant. Repeat scans
/// inside the window still grant; the marker is never consulted.
pub async fn check_access(
    pool: &PgPool,
    request_id: i64,
    token: &str,
    now: DateTime<Utc>,
) -> Result<GateDecision, QrError> {
    let pass = match service::verify(pool, request_id, token).await {
        Ok(pass) => pass,
        Err(QrError::NotFound(_)) => {
            info!(request_id, "gate scan with unknown token");
            return Ok(GateDecision::Denied(DenialReason::InvalidToken));
        }
        Err(e) => return Err(e),
    };

    let decision = evaluate(&pass, now);
    if decision.is_granted() {
        service::record_first_scan(pool, request_id, token).await?;
    }

    info!(request_id, granted = decision.is_granted(), "gate scan evaluated");
    Ok(decision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passes::parse_request_time;

    fn pass(status: PassStatus) -> GatePassRequest {
        GatePassRequest {
            id: 1,
            student_id: 1,
            faculty_id: None,
            reason: "medical".into(),
            from_time: parse_request_time("2024-01-01 09:00").unwrap(),
            to_time: parse_request_time("2024-01-01 17:00").unwrap(),
            status,
            qr_code: Some("tok".into()),
            rejection_reason: None,
            approved_at: None,
            rejected_at: None,
            approved_by: None,
            created_at: parse_request_time("2024-01-01 08:00").unwrap(),
        }
    }

    fn at(raw: &str) -> DateTime<Utc> {
        parse_request_time(raw).unwrap()
    }

    #[test]
    fn approved_pass_inside_window_grants() {
        let decision = evaluate(&pass(PassStatus::Approved), at("2024-01-01 12:00"));
        assert_eq!(decision, GateDecision::Granted);
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let p = pass(PassStatus::Approved);
        assert_eq!(evaluate(&p, at("2024-01-01 09:00")), GateDecision::Granted);
        assert_eq!(evaluate(&p, at("2024-01-01 17:00")), GateDecision::Granted);
    }

    #[test]
    fn scan_outside_window_denies() {
        let p = pass(PassStatus::Approved);
        assert_eq!(
            evaluate(&p, at("2024-01-01 20:00")),
            GateDecision::Denied(DenialReason::OutsideWindow)
        );
        assert_eq!(
            evaluate(&p, at("2024-01-01 08:59")),
            GateDecision::Denied(DenialReason::OutsideWindow)
        );
    }

    #[test]
    fn undecided_or_rejected_pass_denies_even_inside_window() {
        let noon = at("2024-01-01 12:00");
        assert_eq!(
            evaluate(&pass(PassStatus::Pending), noon),
            GateDecision::Denied(DenialReason::NotApproved)
        );
        assert_eq!(
            evaluate(&pass(PassStatus::Rejected), noon),
            GateDecision::Denied(DenialReason::NotApproved)
        );
    }

    #[test]
    fn status_is_checked_before_window() {
        // Pending outside the window reports NotApproved, not OutsideWindow.
        let decision = evaluate(&pass(PassStatus::Pending), at("2024-01-02 12:00"));
        assert_eq!(decision, GateDecision::Denied(DenialReason::NotApproved));
    }
}
