use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{ListingDraft, ListingId};
use super::repository::ListingRepository;
use super::service::{ListingService, ListingServiceError};
use crate::workflows::verification::domain::UserId;
use crate::workflows::verification::repository::VerificationRepository;

const BROWSE_LIMIT: usize = 50;

/// Router builder exposing HTTP endpoints for the listing workflow.
pub fn listing_router<L, V>(service: Arc<ListingService<L, V>>) -> Router
where
    L: ListingRepository + 'static,
    V: VerificationRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/listings",
            post(create_handler::<L, V>).get(browse_handler::<L, V>),
        )
        .route("/api/v1/listings/:listing_id", get(detail_handler::<L, V>))
        .route(
            "/api/v1/users/:user_id/listings",
            get(owner_listings_handler::<L, V>),
        )
        .with_state(service)
}

pub(crate) async fn create_handler<L, V>(
    State(service): State<Arc<ListingService<L, V>>>,
    axum::Json(draft): axum::Json<ListingDraft>,
) -> Response
where
    L: ListingRepository + 'static,
    V: VerificationRepository + 'static,
{
    match service.create_listing(draft) {
        Ok(created) => {
            let payload = json!({
                "listing": created.listing.summary_view(),
                "permission": created.permission,
            });
            (StatusCode::CREATED, axum::Json(payload)).into_response()
        }
        Err(ListingServiceError::Blocked(permission)) => {
            let payload = json!({
                "error": "listing creation blocked",
                "reason": permission.reason,
                "days_remaining": permission.days_remaining,
            });
            (StatusCode::FORBIDDEN, axum::Json(payload)).into_response()
        }
        Err(ListingServiceError::Rule(violation)) => {
            let payload = json!({
                "error": violation.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn browse_handler<L, V>(
    State(service): State<Arc<ListingService<L, V>>>,
) -> Response
where
    L: ListingRepository + 'static,
    V: VerificationRepository + 'static,
{
    match service.browse(BROWSE_LIMIT) {
        Ok(listings) => {
            let views: Vec<_> = listings
                .iter()
                .map(|listing| listing.summary_view())
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

pub(crate) async fn detail_handler<L, V>(
    State(service): State<Arc<ListingService<L, V>>>,
    Path(listing_id): Path<String>,
) -> Response
where
    L: ListingRepository + 'static,
    V: VerificationRepository + 'static,
{
    use crate::workflows::verification::repository::RepositoryError;

    match service.view_listing(&ListingId(listing_id)) {
        Ok(listing) => (StatusCode::OK, axum::Json(listing)).into_response(),
        Err(ListingServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "listing not found",
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

pub(crate) async fn owner_listings_handler<L, V>(
    State(service): State<Arc<ListingService<L, V>>>,
    Path(user_id): Path<String>,
) -> Response
where
    L: ListingRepository + 'static,
    V: VerificationRepository + 'static,
{
    match service.listings_for_owner(&UserId(user_id)) {
        Ok(listings) => {
            let views: Vec<_> = listings
                .iter()
                .map(|listing| listing.summary_view())
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
