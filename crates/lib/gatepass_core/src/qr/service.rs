//! QR token minting and verification.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use super::{QrError, artifact::QrArtifactStore, payload};
use crate::models::pass::GatePassRequest;
use crate::models::qr::QrBinding;

/// Mint a QR token for an existing request.
///
/// Generates a random 128-bit token, stores the scannable artifact, and
/// persists the binding plus the request-level `qr_code` in a single
/// transaction so a failure leaves no dangling token reference. Re-minting
/// adds a new binding row and replaces the request's current token; older
/// bindings stay on record and keep verifying.
pub async fn mint(
    pool: &PgPool,
    store: &dyn QrArtifactStore,
    request_id: i64,
) -> Result<QrBinding, QrError> {
    let mut tx = pool.begin().await?;

    // Lock the request row so it cannot be deleted between the existence
    // check and the binding insert.
    let locked = sqlx::query_scalar::<_, i64>(
        "SELECT id FROM gate_pass_requests WHERE id = $1 FOR UPDATE",
    )
    .bind(request_id)
    .fetch_optional(&mut *tx)
    .await?;
    if locked.is_none() {
        return Err(QrError::NotFound(format!("request {request_id} not found")));
    }

    let token = Uuid::new_v4().to_string();
    let qr_path = store.store(&token, &payload::format(request_id, &token))?;

    let committed: Result<QrBinding, QrError> = async {
        let binding = sqlx::query_as::<_, QrBinding>(
            "INSERT INTO qr_codes (request_id, qr_token, qr_path) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(request_id)
        .bind(&token)
        .bind(&qr_path)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE gate_pass_requests SET qr_code = $1 WHERE id = $2")
            .bind(&token)
            .bind(request_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(binding)
    }
    .await;

    match committed {
        Ok(binding) => {
            info!(request_id, binding_id = binding.id, "QR token minted");
            Ok(binding)
        }
        Err(e) => {
            // The artifact was already written; drop it rather than leave
            // an orphan file pointing at a binding that never landed.
            store.discard(&token);
            Err(e)
        }
    }
}

/// Verify a presented `(request_id, token)` pair against the stored
/// bindings. Returns the bound request so the caller can inspect its
/// status and validity window. Read-only; the token is not consumed.
pub async fn verify(
    pool: &PgPool,
    request_id: i64,
    token: &str,
) -> Result<GatePassRequest, QrError> {
    let pass = sqlx::query_as::<_, GatePassRequest>(
        "SELECT p.* \
         FROM qr_codes q \
         JOIN gate_pass_requests p ON p.id = q.request_id \
         WHERE q.request_id = $1 AND q.qr_token = $2",
    )
    .bind(request_id)
    .bind(token)
    .fetch_optional(pool)
    .await?;

    pass.ok_or_else(|| QrError::NotFound("Invalid QR code".into()))
}

/// Stamp `scanned_at` on a binding's first successful scan. Audit marker
/// only; never consulted when deciding access.
pub async fn record_first_scan(
    pool: &PgPool,
    request_id: i64,
    token: &str,
) -> Result<(), QrError> {
    sqlx::query(
        "UPDATE qr_codes SET scanned_at = now() \
         WHERE request_id = $1 AND qr_token = $2 AND scanned_at IS NULL",
    )
    .bind(request_id)
    .bind(token)
    .execute(pool)
    .await?;
    Ok(())
}
