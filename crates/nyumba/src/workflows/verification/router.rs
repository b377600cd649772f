use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{DocumentId, DocumentSubmission, ReviewCommand, ReviewVerdict, UserId};
use super::repository::{RepositoryError, VerificationRepository};
use super::service::{VerificationService, VerificationServiceError};

/// Router builder exposing HTTP endpoints for the verification workflow.
pub fn verification_router<R>(service: Arc<VerificationService<R>>) -> Router
where
    R: VerificationRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/verification/documents",
            post(submit_handler::<R>),
        )
        .route(
            "/api/v1/verification/documents/:document_id/review",
            post(review_handler::<R>),
        )
        .route(
            "/api/v1/verification/review-queue",
            get(review_queue_handler::<R>),
        )
        .route(
            "/api/v1/users/:user_id/documents",
            get(user_documents_handler::<R>),
        )
        .route(
            "/api/v1/users/:user_id/listing-permission",
            get(permission_handler::<R>),
        )
        .with_state(service)
}

/// Request payload for the administrative review endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct ReviewRequest {
    verdict: ReviewVerdict,
    #[serde(default)]
    admin_notes: Option<String>,
    reviewed_by: String,
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<VerificationService<R>>>,
    axum::Json(submission): axum::Json<DocumentSubmission>,
) -> Response
where
    R: VerificationRepository + 'static,
{
    match service.submit_document(submission) {
        Ok(document) => {
            (StatusCode::ACCEPTED, axum::Json(document.status_view())).into_response()
        }
        Err(VerificationServiceError::UnknownAccount(user_id)) => {
            let payload = json!({
                "error": format!("no account found for user {}", user_id.0),
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

pub(crate) async fn review_handler<R>(
    State(service): State<Arc<VerificationService<R>>>,
    Path(document_id): Path<String>,
    axum::Json(request): axum::Json<ReviewRequest>,
) -> Response
where
    R: VerificationRepository + 'static,
{
    let command = ReviewCommand {
        document_id: DocumentId(document_id),
        verdict: request.verdict,
        admin_notes: request.admin_notes,
        reviewed_by: UserId(request.reviewed_by),
    };

    match service.review_document(command) {
        Ok(document) => (StatusCode::OK, axum::Json(document.status_view())).into_response(),
        Err(VerificationServiceError::AlreadyReviewed {
            document_id,
            status,
        }) => {
            let payload = json!({
                "error": format!("document {} was already reviewed as {status}", document_id.0),
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(VerificationServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "document not found",
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

pub(crate) async fn review_queue_handler<R>(
    State(service): State<Arc<VerificationService<R>>>,
) -> Response
where
    R: VerificationRepository + 'static,
{
    match service.review_queue() {
        Ok(documents) => {
            let views: Vec<_> = documents
                .iter()
                .map(|document| document.status_view())
                .collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn user_documents_handler<R>(
    State(service): State<Arc<VerificationService<R>>>,
    Path(user_id): Path<String>,
) -> Response
where
    R: VerificationRepository + 'static,
{
    match service.documents_for_user(&UserId(user_id)) {
        Ok(documents) => {
            let views: Vec<_> = documents
                .iter()
                .map(|document| document.status_view())
                .collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn permission_handler<R>(
    State(service): State<Arc<VerificationService<R>>>,
    Path(user_id): Path<String>,
) -> Response
where
    R: VerificationRepository + 'static,
{
    match service.listing_permission(&UserId(user_id)) {
        Ok(permission) => (StatusCode::OK, axum::Json(permission)).into_response(),
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
