//! API route handlers

pub mod health;
pub mod labels;
pub mod training;

use axum::body::Bytes;
use serde::{de::DeserializeOwned, Deserialize};
use trainlab_domain::{ProjectId, StudentScope};
use utoipa::IntoParams;

/// Path of a student's project
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct ProjectPath {
    /// Class id
    pub classid: String,
    /// Student id
    pub studentid: String,
    /// Project id
    pub projectid: String,
}

impl ProjectPath {
    /// Class and student the request acts for
    pub fn scope(&self) -> StudentScope {
        StudentScope::new(self.classid.clone(), self.studentid.clone())
    }

    /// Project named in the path
    pub fn project_id(&self) -> ProjectId {
        ProjectId::from(self.projectid.as_str())
    }
}

/// Read a JSON body leniently.
///
/// An empty or unparsable body yields the default value, so that missing
/// fields surface as validation errors once the project has been resolved
/// instead of pre-empting the not-found and forbidden checks.
pub(crate) fn lenient_json<T: DeserializeOwned + Default>(body: &Bytes) -> T {
    if body.is_empty() {
        return T::default();
    }
    serde_json::from_slice(body).unwrap_or_else(|err| {
        tracing::debug!(error = %err, "ignoring unparsable request body");
        T::default()
    })
}
