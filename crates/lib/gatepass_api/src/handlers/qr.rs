//! QR minting and verification handlers.

use axum::Json;
use axum::extract::{Path, State};
use gatepass_core::qr::{payload, service};

use crate::AppState;
use crate::error::AppResult;
use crate::models::{MintQrResponse, ScanRequest, VerifyQrResponse};

/// Resolve a scan submission to `(request_id, token)`, parsing the raw
/// payload when that shape was sent.
pub(crate) fn resolve_scan(scan: ScanRequest) -> Result<(i64, String), gatepass_core::qr::QrError> {
    match scan {
        ScanRequest::Fields { request_id, qr } => Ok((request_id, qr)),
        ScanRequest::Payload { payload: raw } => {
            let parsed = payload::parse(&raw)?;
            Ok((parsed.request_id, parsed.token))
        }
    }
}

/// `POST /api/qr/generate/{request_id}` — mint a QR token for a pass.
pub async fn mint_handler(
    State(state): State<AppState>,
    Path(request_id): Path<i64>,
) -> AppResult<Json<MintQrResponse>> {
    let binding = service::mint(&state.pool, state.qr_store.as_ref(), request_id).await?;
    Ok(Json(MintQrResponse {
        success: true,
        pass_id: request_id,
        qr_token: binding.qr_token,
        qr_path: binding.qr_path,
    }))
}

/// `POST /api/qr/verify` — resolve a scanned token to its pass.
///
/// Read-only; the gate decision itself is `POST /api/gate/check`.
pub async fn verify_handler(
    State(state): State<AppState>,
    Json(body): Json<ScanRequest>,
) -> AppResult<Json<VerifyQrResponse>> {
    let (request_id, token) = resolve_scan(body)?;
    let pass = service::verify(&state.pool, request_id, &token).await?;
    Ok(Json(VerifyQrResponse {
        valid: true,
        pass: pass.into(),
    }))
}
