//! API route definitions

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    handlers::{health, labels, training},
    middleware::{authenticate, enforce_gate},
    state::AppState,
};

const LABELS: &str = "/api/classes/:classid/students/:studentid/projects/:projectid/labels";
const TRAINING: &str = "/api/classes/:classid/students/:studentid/projects/:projectid/training";
const TRAINING_ITEM: &str =
    "/api/classes/:classid/students/:studentid/projects/:projectid/training/:id";

/// Training data routes
///
/// Every route authenticates the caller first, then runs the access gate
/// for the route before the handler sees the request.
pub fn api_routes(state: &AppState) -> Router<AppState> {
    let student = from_fn_with_state(state.student_gate.clone(), enforce_gate);
    let supervisor = from_fn_with_state(state.supervisor_gate.clone(), enforce_gate);

    Router::new()
        .route(
            LABELS,
            get(labels::get_labels)
                .put(labels::edit_label)
                .route_layer(student.clone()),
        )
        .route(
            TRAINING,
            get(training::get_training)
                .post(training::store_training)
                .route_layer(student.clone())
                .merge(delete(training::clear_training).route_layer(supervisor)),
        )
        .route(
            TRAINING_ITEM,
            delete(training::delete_training).route_layer(student),
        )
        .route_layer(from_fn_with_state(state.clone(), authenticate))
        .layer(CorsLayer::permissive())
}

/// Swagger UI routes
pub fn swagger_routes() -> Router<AppState> {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

/// Combined routes
pub fn all_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(api_routes(state))
        .merge(swagger_routes())
}

/// OpenAPI document for the service
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        labels::get_labels,
        labels::edit_label,
        training::get_training,
        training::store_training,
        training::delete_training,
        training::clear_training,
    ),
    components(schemas(
        crate::models::StoreTrainingRequest,
        crate::models::EditLabelRequest,
        crate::models::EditLabelResponse,
        crate::models::TrainingResponse,
        crate::models::TrainingItem,
        crate::models::HealthResponse,
    )),
    info(
        title = "TrainLab API",
        version = "1.0.0",
        description = "RESTful API for per-project machine-learning training data"
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_training_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths
            .iter()
            .any(|p| p.ends_with("/projects/{projectid}/training/{id}")));
        assert!(paths.iter().any(|p| p.ends_with("/projects/{projectid}/labels")));
    }
}
