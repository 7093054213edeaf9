//! Gate pass lifecycle: creation, approval decisions, listings, stats.

pub mod lifecycle;
pub mod queries;

use chrono::{DateTime, NaiveDateTime, Utc};
use thiserror::Error;

use crate::models::pass::Decision;

/// Pass lifecycle errors.
#[derive(Debug, Error)]
pub enum PassError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Parse an approver decision. Accepts exactly `Approved` or `Rejected`.
pub fn parse_decision(raw: &str) -> Result<Decision, PassError> {
    match raw {
        "Approved" => Ok(Decision::Approved),
        "Rejected" => Ok(Decision::Rejected),
        other => Err(PassError::Validation(format!(
            "decision must be 'Approved' or 'Rejected', got '{other}'"
        ))),
    }
}

/// Parse a request timestamp from client input.
///
/// Accepts RFC 3339 or the dashboards' `YYYY-MM-DD HH:MM[:SS]` form
/// (interpreted as UTC).
pub fn parse_request_time(raw: &str) -> Result<DateTime<Utc>, PassError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }
    Err(PassError::Validation(format!(
        "unparseable date/time: '{raw}'"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parse_decision_accepts_exact_verdicts() {
        assert_eq!(parse_decision("Approved").unwrap(), Decision::Approved);
        assert_eq!(parse_decision("Rejected").unwrap(), Decision::Rejected);
    }

    #[test]
    fn parse_decision_rejects_anything_else() {
        for raw in ["approved", "APPROVED", "Pending", "", "Approved "] {
            assert!(matches!(
                parse_decision(raw),
                Err(PassError::Validation(_))
            ));
        }
    }

    #[test]
    fn parse_request_time_accepts_rfc3339() {
        let dt = parse_request_time("2024-01-01T09:00:00Z").unwrap();
        assert_eq!(dt.hour(), 9);
    }

    #[test]
    fn parse_request_time_accepts_dashboard_form() {
        let dt = parse_request_time("2024-01-01 09:00").unwrap();
        assert_eq!(dt.hour(), 9);
        assert_eq!(dt.minute(), 0);

        let with_secs = parse_request_time("2024-01-01 09:00:30").unwrap();
        assert_eq!(with_secs.second(), 30);
    }

    #[test]
    fn parse_request_time_rejects_garbage() {
        for raw in ["garbage", "2024-13-01 09:00", "09:00", ""] {
            assert!(matches!(
                parse_request_time(raw),
                Err(PassError::Validation(_))
            ));
        }
    }
}
