//! Request middleware

pub mod auth;
pub mod logging;

pub use auth::{authenticate, enforce_gate};
pub use logging::logging_middleware;
