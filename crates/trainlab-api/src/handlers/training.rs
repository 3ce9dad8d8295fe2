//! Training data handlers

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{
        header::{CONTENT_RANGE, RANGE},
        HeaderMap, StatusCode,
    },
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use trainlab_domain::{ExampleInput, RangeRequest, TrainingId};
use utoipa::IntoParams;

use super::{lenient_json, ProjectPath};
use crate::{
    error::ApiResult,
    models::{StoreTrainingRequest, TrainingItem, TrainingResponse},
    state::AppState,
};

/// Path of a single training example
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct TrainingPath {
    /// Class id
    pub classid: String,
    /// Student id
    pub studentid: String,
    /// Project id
    pub projectid: String,
    /// Training example id
    pub id: String,
}

impl TrainingPath {
    fn project(&self) -> ProjectPath {
        ProjectPath {
            classid: self.classid.clone(),
            studentid: self.studentid.clone(),
            projectid: self.projectid.clone(),
        }
    }
}

/// List a project's training examples
///
/// Honours `Range: items=START-END` and always answers with
/// `Content-Range: items START-END/TOTAL`.
#[utoipa::path(
    get,
    path = "/api/classes/{classid}/students/{studentid}/projects/{projectid}/training",
    params(
        ProjectPath,
        ("Range" = Option<String>, Header, description = "items=START-END")
    ),
    responses(
        (status = 200, description = "Training examples", body = [TrainingItem]),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Project not found"),
        (status = 501, description = "Project type has no training data support")
    )
)]
pub async fn get_training(
    State(state): State<AppState>,
    Path(path): Path<ProjectPath>,
    headers: HeaderMap,
) -> ApiResult<Response> {
    let range = headers
        .get(RANGE)
        .and_then(|value| value.to_str().ok())
        .and_then(RangeRequest::parse_header);

    let page = state
        .training
        .get_training(&path.scope(), &path.project_id(), range)
        .await?;

    let content_range = page.window().content_range();
    let items: Vec<TrainingItem> = page.items.into_iter().map(TrainingItem::from).collect();

    Ok(([(CONTENT_RANGE, content_range)], Json(items)).into_response())
}

/// Store one training example
#[utoipa::path(
    post,
    path = "/api/classes/{classid}/students/{studentid}/projects/{projectid}/training",
    params(ProjectPath),
    request_body = StoreTrainingRequest,
    responses(
        (status = 201, description = "Training stored", body = TrainingResponse),
        (status = 400, description = "Missing data"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Project not found"),
        (status = 501, description = "Project type has no training data support")
    )
)]
pub async fn store_training(
    State(state): State<AppState>,
    Path(path): Path<ProjectPath>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<TrainingResponse>)> {
    let request: StoreTrainingRequest = lenient_json(&body);
    let input = ExampleInput {
        data: request.data,
        label: request.label,
    };

    let stored = state
        .training
        .store_training(&path.scope(), &path.project_id(), input)
        .await?;

    Ok((StatusCode::CREATED, Json(stored.into())))
}

/// Delete one training example
#[utoipa::path(
    delete,
    path = "/api/classes/{classid}/students/{studentid}/projects/{projectid}/training/{id}",
    params(TrainingPath),
    responses(
        (status = 204, description = "Training deleted"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Project or training not found"),
        (status = 501, description = "Project type has no training data support")
    )
)]
pub async fn delete_training(
    State(state): State<AppState>,
    Path(path): Path<TrainingPath>,
) -> ApiResult<StatusCode> {
    let project = path.project();
    state
        .training
        .delete_training(
            &project.scope(),
            &project.project_id(),
            &TrainingId::from(path.id.as_str()),
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete every training example of a project (supervisors only)
#[utoipa::path(
    delete,
    path = "/api/classes/{classid}/students/{studentid}/projects/{projectid}/training",
    params(ProjectPath),
    responses(
        (status = 204, description = "Training cleared"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Project not found"),
        (status = 501, description = "Project type has no training data support")
    )
)]
pub async fn clear_training(
    State(state): State<AppState>,
    Path(path): Path<ProjectPath>,
) -> ApiResult<StatusCode> {
    state
        .training
        .clear_training(&path.scope(), &path.project_id())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
