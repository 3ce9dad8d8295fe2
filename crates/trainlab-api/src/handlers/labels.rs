//! Label handlers

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use trainlab_domain::LabelCounts;

use super::{lenient_json, ProjectPath};
use crate::{
    error::ApiResult,
    models::{EditLabelRequest, EditLabelResponse},
    state::AppState,
};

/// Count a project's training examples per label
#[utoipa::path(
    get,
    path = "/api/classes/{classid}/students/{studentid}/projects/{projectid}/labels",
    params(ProjectPath),
    responses(
        (status = 200, description = "Mapping of label to number of examples"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Project not found"),
        (status = 501, description = "Project type has no training data support")
    )
)]
pub async fn get_labels(
    State(state): State<AppState>,
    Path(path): Path<ProjectPath>,
) -> ApiResult<Json<LabelCounts>> {
    let labels = state
        .training
        .get_labels(&path.scope(), &path.project_id())
        .await?;
    Ok(Json(labels))
}

/// Rename a label on every example that carries it
#[utoipa::path(
    put,
    path = "/api/classes/{classid}/students/{studentid}/projects/{projectid}/labels",
    params(ProjectPath),
    request_body = EditLabelRequest,
    responses(
        (status = 200, description = "Label renamed", body = EditLabelResponse),
        (status = 400, description = "Missing data"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Project not found"),
        (status = 501, description = "Project type has no training data support")
    )
)]
pub async fn edit_label(
    State(state): State<AppState>,
    Path(path): Path<ProjectPath>,
    body: Bytes,
) -> ApiResult<Json<EditLabelResponse>> {
    let request: EditLabelRequest = lenient_json(&body);
    let renamed = state
        .training
        .rename_label(
            &path.scope(),
            &path.project_id(),
            request.before.as_deref().unwrap_or_default(),
            request.after.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok(Json(EditLabelResponse { renamed }))
}
