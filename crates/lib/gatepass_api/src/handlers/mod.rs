//! Request handlers.

pub mod approvals;
pub mod auth;
pub mod gate;
pub mod passes;
pub mod qr;
