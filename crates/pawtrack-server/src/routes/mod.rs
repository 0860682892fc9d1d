//! PawTrack API Routes
//!
//! - /api/pets - Pet management
//! - /api/reminders - Reminder management, completion and toggling
//! - /api/reminders/day - Grouped day view
//! - /api/reminders/stats - Daily counts and best streak

pub mod day;
pub mod pet;
pub mod reminder;
pub mod swagger;

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};

use pawtrack::DomainError;

use crate::models::ErrorResponse;

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Map a domain error to its HTTP status and `{"error": ..}` body
pub fn api_error(err: DomainError) -> ApiError {
    let status = match &err {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Transport(_) | DomainError::Repository(_) => {
            tracing::error!("Request failed: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    error_body(status, err.to_string())
}

pub fn error_body(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// `Json` body extractor whose rejections use the `{"error": ..}` shape
///
/// Malformed JSON, an unknown enum variant or a missing content type all
/// become 400 instead of axum's plain-text 415/422.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => {
                tracing::warn!("Rejected request body: {}", rejection.body_text());
                Err(error_body(
                    StatusCode::BAD_REQUEST,
                    format!("Validation error: {}", rejection.body_text()),
                ))
            }
        }
    }
}
