//! # gatepass_core
//!
//! Core domain logic for Gatepass: the pass lifecycle state machine,
//! QR token minting and verification, and the gate access decision.

pub mod auth;
pub mod gate;
pub mod migrate;
pub mod models;
pub mod passes;
pub mod qr;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
