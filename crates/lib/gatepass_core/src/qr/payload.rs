//! The QR payload wire format.
//!
//! Physical scanners read the raw string `REQ:<id>|QR:<token>` off the
//! code and either forward it whole or split it into fields themselves,
//! so the delimiter grammar here is a compatibility contract.

use super::QrError;

/// A parsed QR payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrPayload {
    pub request_id: i64,
    pub token: String,
}

/// Format the payload string embedded in the QR image.
pub fn format(request_id: i64, token: &str) -> String {
    format!("REQ:{request_id}|QR:{token}")
}

/// Parse a raw scanned payload.
///
/// Fields are pipe-delimited `KEY:value` pairs; both keys must be present
/// and `REQ` must be an integer. Key order is not significant (older
/// scanner firmware emits the pairs reversed).
pub fn parse(raw: &str) -> Result<QrPayload, QrError> {
    let mut request_id: Option<i64> = None;
    let mut token: Option<&str> = None;

    for part in raw.split('|') {
        let Some((key, value)) = part.split_once(':') else {
            continue;
        };
        match key {
            "REQ" => {
                request_id = Some(value.parse().map_err(|_| {
                    QrError::Validation(format!("non-integer request id: '{value}'"))
                })?);
            }
            "QR" => token = Some(value),
            _ => {}
        }
    }

    let request_id =
        request_id.ok_or_else(|| QrError::Validation("payload missing REQ field".into()))?;
    let token = token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| QrError::Validation("payload missing QR field".into()))?;

    Ok(QrPayload {
        request_id,
        token: token.to_string(),
    })
}
