use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Local;
use serde_json::json;

use super::domain::{ApplicationId, OnboardingSnapshot};
use super::repository::{ApplicationRepository, CrmAlertPublisher, RepositoryError};
use super::service::{OnboardingService, OnboardingServiceError};

/// Router builder exposing HTTP endpoints for partner intake and triage.
pub fn onboarding_router<R, A>(service: Arc<OnboardingService<R, A>>) -> Router
where
    R: ApplicationRepository + 'static,
    A: CrmAlertPublisher + 'static,
{
    Router::new()
        .route("/api/v1/partners/applications", post(submit_handler::<R, A>))
        .route(
            "/api/v1/partners/applications/:application_id",
            get(status_handler::<R, A>),
        )
        .route(
            "/api/v1/partners/applications/:application_id/triage",
            post(triage_handler::<R, A>),
        )
        .with_state(service)
}

pub(crate) async fn submit_handler<R, A>(
    State(service): State<Arc<OnboardingService<R, A>>>,
    axum::Json(snapshot): axum::Json<OnboardingSnapshot>,
) -> Response
where
    R: ApplicationRepository + 'static,
    A: CrmAlertPublisher + 'static,
{
    match service.submit(snapshot, Local::now().date_naive()) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(OnboardingServiceError::Incomplete { missing }) => {
            let payload = json!({
                "error": "application incomplete",
                "missing": missing,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(OnboardingServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "application already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn status_handler<R, A>(
    State(service): State<Arc<OnboardingService<R, A>>>,
    Path(application_id): Path<String>,
) -> Response
where
    R: ApplicationRepository + 'static,
    A: CrmAlertPublisher + 'static,
{
    let id = ApplicationId(application_id);
    match service.get(&id) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(OnboardingServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "application not found",
                "application_id": id.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn triage_handler<R, A>(
    State(service): State<Arc<OnboardingService<R, A>>>,
    Path(application_id): Path<String>,
) -> Response
where
    R: ApplicationRepository + 'static,
    A: CrmAlertPublisher + 'static,
{
    let id = ApplicationId(application_id);
    match service.triage(&id) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(OnboardingServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "application not found",
                "application_id": id.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
