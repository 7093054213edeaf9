//! Service-layer flows shared by handlers.

pub mod auth;
