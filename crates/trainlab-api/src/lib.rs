#![warn(missing_docs)]

//! TrainLab RESTful API
//!
//! Authorization-gated endpoints for adding, listing, counting, relabelling
//! and deleting the training examples of a student's project.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;

pub use auth::{Authenticator, JwtAuthenticator};
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use server::{build_router, ApiServer};
pub use state::AppState;
