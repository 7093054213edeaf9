//! End-to-end flow against a real PostgreSQL instance: register, login,
//! request a pass, approve it, mint a QR token, verify, and scan at the
//! gate.
//!
//! Needs a reachable database; run with:
//! `DATABASE_URL=postgres://localhost:5432/gatepass_test cargo test -- --ignored`

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::{Duration, Utc};
use gatepass_api::config::ApiConfig;
use gatepass_api::{AppState, migrate, router};
use gatepass_core::qr::artifact::PayloadFileStore;
use tower::ServiceExt;

async fn test_app() -> (Router, sqlx::PgPool) {
    let url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "postgres://localhost:5432/gatepass_test".into());
    let pool = sqlx::PgPool::connect(&url).await.expect("connect to PG");
    migrate(&pool).await.expect("run migrations");

    let qr_dir = std::env::temp_dir().join("gatepass-test-qr");
    let state = AppState {
        pool: pool.clone(),
        config: ApiConfig {
            bind_addr: "127.0.0.1:0".into(),
            pg_connection_url: url,
            jwt_secret: "test-secret".into(),
            qr_dir: qr_dir.display().to_string(),
        },
        qr_store: Arc::new(PayloadFileStore::new(qr_dir)),
    };
    (router(state), pool)
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("build request");

    let resp = app.clone().oneshot(request).await.expect("send request");
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("parse JSON body")
    };
    (status, json)
}

#[tokio::test]
#[ignore = "requires a reachable PostgreSQL via DATABASE_URL"]
async fn full_gate_pass_flow() {
    let (app, pool) = test_app().await;
    let tag = Utc::now().timestamp_nanos_opt().unwrap_or_default();

    // Register a faculty approver and log in.
    let (status, _) = send(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(serde_json::json!({
            "name": "Prof. Rao",
            "user_id": format!("F-{tag}"),
            "password": "correct-horse-battery",
            "role": "faculty",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, login) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(serde_json::json!({
            "role": "faculty",
            "user_id": format!("F-{tag}"),
            "password": "correct-horse-battery",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = login["token"].as_str().expect("token").to_string();

    // Protected routes reject missing credentials.
    let (status, _) = send(&app, "GET", "/api/passes", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // A student to request the pass for.
    let student_id: i64 = sqlx::query_scalar(
        "INSERT INTO students (name, student_no) VALUES ($1, $2) RETURNING id",
    )
    .bind("Asha")
    .bind(format!("S-{tag}"))
    .fetch_one(&pool)
    .await
    .expect("insert student");

    // Create a request whose window spans now.
    let from = (Utc::now() - Duration::hours(1)).to_rfc3339();
    let to = (Utc::now() + Duration::hours(1)).to_rfc3339();
    let (status, pass) = send(
        &app,
        "POST",
        "/api/passes",
        Some(&token),
        Some(serde_json::json!({
            "student": {"student_id": student_id},
            "reason": "medical",
            "from_time": from,
            "to_time": to,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(pass["status"], "Pending");
    let request_id = pass["id"].as_i64().expect("request id");

    // An inverted window is rejected up front.
    let (status, _) = send(
        &app,
        "POST",
        "/api/passes",
        Some(&token),
        Some(serde_json::json!({
            "student": {"student_id": student_id},
            "reason": "inverted",
            "from_time": to,
            "to_time": from,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // The pending list shows the request with the requester's name.
    let (status, pending) = send(&app, "GET", "/api/approvals/pending", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let ours = pending
        .as_array()
        .expect("pending array")
        .iter()
        .find(|p| p["id"].as_i64() == Some(request_id))
        .expect("request listed as pending");
    assert_eq!(ours["studentName"], "Asha");

    // Deciding and minting against an id that does not exist both 404.
    let missing_id: i64 = 9_000_000_000_000_000_000;
    let (status, _) = send(
        &app,
        "POST",
        "/api/approvals/decide",
        Some(&token),
        Some(serde_json::json!({"request_id": missing_id, "decision": "Approved"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/qr/generate/{missing_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Gate scan before approval is denied even inside the window.
    let (status, mint) = send(
        &app,
        "POST",
        &format!("/api/qr/generate/{request_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let qr_token = mint["qrToken"].as_str().expect("qr token").to_string();

    let (status, check) = send(
        &app,
        "POST",
        "/api/gate/check",
        Some(&token),
        Some(serde_json::json!({"request_id": request_id, "qr": qr_token})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(check["reason"], "not_approved");

    // Approve.
    let (status, decided) = send(
        &app,
        "POST",
        "/api/approvals/decide",
        Some(&token),
        Some(serde_json::json!({"request_id": request_id, "decision": "Approved"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decided["status"], "Approved");
    assert!(decided["approvedAt"].is_string());
    assert!(decided["rejectedAt"].is_null());

    // Re-deciding a settled request conflicts.
    let (status, _) = send(
        &app,
        "POST",
        "/api/approvals/decide",
        Some(&token),
        Some(serde_json::json!({"request_id": request_id, "decision": "Rejected"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // A malformed decision is rejected.
    let (status, _) = send(
        &app,
        "POST",
        "/api/approvals/decide",
        Some(&token),
        Some(serde_json::json!({"request_id": request_id, "decision": "Maybe"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Verify resolves the raw scanned payload to the pass.
    let (status, verified) = send(
        &app,
        "POST",
        "/api/qr/verify",
        Some(&token),
        Some(serde_json::json!({"payload": format!("REQ:{request_id}|QR:{qr_token}")})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(verified["valid"], true);
    assert_eq!(verified["pass"]["id"].as_i64(), Some(request_id));

    // Correct token inside the window grants.
    let (status, check) = send(
        &app,
        "POST",
        "/api/gate/check",
        Some(&token),
        Some(serde_json::json!({"request_id": request_id, "qr": qr_token})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(check["allowed"], true);

    // A second scan inside the window still grants.
    let (status, _) = send(
        &app,
        "POST",
        "/api/gate/check",
        Some(&token),
        Some(serde_json::json!({"request_id": request_id, "qr": qr_token})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // The first grant stamped the audit marker.
    let scanned: Option<chrono::DateTime<Utc>> =
        sqlx::query_scalar("SELECT scanned_at FROM qr_codes WHERE qr_token = $1")
            .bind(&qr_token)
            .fetch_one(&pool)
            .await
            .expect("fetch scanned_at");
    assert!(scanned.is_some());

    // A wrong token always denies.
    let (status, check) = send(
        &app,
        "POST",
        "/api/gate/check",
        Some(&token),
        Some(serde_json::json!({"request_id": request_id, "qr": "wrong-token"})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(check["reason"], "invalid_token");

    // Stats count the decided request.
    let (status, stats) = send(&app, "GET", "/api/approvals/stats", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(stats["total_passes"].as_i64().unwrap_or(0) >= 1);
    assert!(stats["approved"].as_i64().unwrap_or(0) >= 1);
}
