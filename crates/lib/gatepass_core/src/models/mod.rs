//! Domain models.
//!
//! These are internal domain models, distinct from the API crate's
//! request/response DTOs (which carry `#[serde(rename)]` for the wire
//! shapes the dashboards consume).

pub mod auth;
pub mod pass;
pub mod qr;
