//! Authentication and access gate middleware
//!
//! `authenticate` identifies the caller and stores the [`Caller`] in the
//! request extensions; `enforce_gate` then runs an [`AccessGate`] against the
//! class and student named in the path. Both short-circuit before the
//! handler runs.

use std::sync::Arc;

use axum::{
    extract::{Path, Request, State},
    middleware::Next,
    response::Response,
};
use serde::Deserialize;
use trainlab_domain::{AccessGate, Caller, StudentScope};

use crate::{error::ApiError, state::AppState};

/// Path segments every gated route carries
#[derive(Debug, Deserialize)]
pub struct StudentPath {
    /// Class id
    pub classid: String,
    /// Student id
    pub studentid: String,
}

/// Identify the caller
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let caller = state.authenticator.authenticate(request.headers()).await?;
    request.extensions_mut().insert(caller);
    Ok(next.run(request).await)
}

/// Admit the request only if every check of the gate passes
pub async fn enforce_gate(
    State(gate): State<Arc<AccessGate>>,
    Path(path): Path<StudentPath>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let caller = request
        .extensions()
        .get::<Caller>()
        .ok_or_else(|| ApiError::Authentication("request was not authenticated".to_string()))?;

    gate.admit(caller, &StudentScope::new(path.classid, path.studentid))?;
    Ok(next.run(request).await)
}
