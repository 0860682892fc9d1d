//! Reminder Routes
//!
//! HTTP handlers that delegate to ReminderService. Responses carry a
//! snapshot of the owning pet when it still exists.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use uuid::Uuid;

use pawtrack::Reminder;

use super::{api_error, error_body, ApiError, ApiJson};
use crate::models::{
    CreateReminderRequest, ErrorResponse, PetSummaryResponse, ReminderResponse,
    UpdateReminderRequest,
};
use crate::AppState;

/// Attach pet snapshots and derived slots to a batch of reminders
pub(crate) async fn to_responses(
    state: &AppState,
    reminders: Vec<Reminder>,
) -> Result<Vec<ReminderResponse>, ApiError> {
    let service = &state.reminder_service;
    let pets = service
        .pet_summaries(&reminders)
        .await
        .map_err(api_error)?;

    Ok(reminders
        .into_iter()
        .map(|reminder| {
            let pet = pets
                .get(&reminder.pet_id)
                .cloned()
                .map(PetSummaryResponse::from);
            ReminderResponse::new(reminder, pet, service.clock())
        })
        .collect())
}

async fn to_response(state: &AppState, reminder: Reminder) -> Result<ReminderResponse, ApiError> {
    let mut responses = to_responses(state, vec![reminder]).await?;
    responses
        .pop()
        .ok_or_else(|| error_body(StatusCode::INTERNAL_SERVER_ERROR, "Empty response"))
}

/// List all Reminders
#[utoipa::path(
    get,
    path = "/api/reminders",
    responses(
        (status = 200, description = "List of all Reminders", body = Vec<ReminderResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Reminder"
)]
pub async fn list_reminders(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReminderResponse>>, ApiError> {
    let reminders = state
        .reminder_service
        .list_all()
        .await
        .map_err(api_error)?;

    Ok(Json(to_responses(&state, reminders).await?))
}

/// List Reminders of one Pet
#[utoipa::path(
    get,
    path = "/api/reminders/pet/{pet_id}",
    params(("pet_id" = Uuid, Path, description = "Pet ID")),
    responses(
        (status = 200, description = "Reminders of the Pet", body = Vec<ReminderResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Reminder"
)]
pub async fn list_pet_reminders(
    State(state): State<AppState>,
    Path(pet_id): Path<Uuid>,
) -> Result<Json<Vec<ReminderResponse>>, ApiError> {
    let reminders = state
        .reminder_service
        .list_by_pet(pet_id)
        .await
        .map_err(api_error)?;

    Ok(Json(to_responses(&state, reminders).await?))
}

/// Create new Reminder
#[utoipa::path(
    post,
    path = "/api/reminders",
    request_body = CreateReminderRequest,
    responses(
        (status = 201, description = "Reminder created", body = ReminderResponse),
        (status = 400, description = "Missing fields or bad start date", body = ErrorResponse),
        (status = 404, description = "Pet not found", body = ErrorResponse)
    ),
    tag = "Reminder"
)]
pub async fn create_reminder(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateReminderRequest>,
) -> Result<(StatusCode, Json<ReminderResponse>), ApiError> {
    let reminder = state
        .reminder_service
        .create(payload.into())
        .await
        .map_err(api_error)?;

    Ok((StatusCode::CREATED, Json(to_response(&state, reminder).await?)))
}

/// Get Reminder by ID
#[utoipa::path(
    get,
    path = "/api/reminders/{id}",
    params(("id" = Uuid, Path, description = "Reminder ID")),
    responses(
        (status = 200, description = "Reminder found", body = ReminderResponse),
        (status = 404, description = "Reminder not found", body = ErrorResponse)
    ),
    tag = "Reminder"
)]
pub async fn get_reminder(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReminderResponse>, ApiError> {
    let reminder = state
        .reminder_service
        .get_by_id(id)
        .await
        .map_err(api_error)?
        .ok_or_else(|| error_body(StatusCode::NOT_FOUND, "Reminder not found"))?;

    Ok(Json(to_response(&state, reminder).await?))
}

/// Update Reminder
#[utoipa::path(
    patch,
    path = "/api/reminders/{id}",
    params(("id" = Uuid, Path, description = "Reminder ID")),
    request_body = UpdateReminderRequest,
    responses(
        (status = 200, description = "Reminder updated", body = ReminderResponse),
        (status = 400, description = "Blank title or bad start date", body = ErrorResponse),
        (status = 404, description = "Reminder or Pet not found", body = ErrorResponse)
    ),
    tag = "Reminder"
)]
pub async fn update_reminder(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ApiJson(payload): ApiJson<UpdateReminderRequest>,
) -> Result<Json<ReminderResponse>, ApiError> {
    let service = &state.reminder_service;
    let patch = payload.into_patch(service.clock()).map_err(api_error)?;
    let reminder = service.update(id, patch).await.map_err(api_error)?;

    Ok(Json(to_response(&state, reminder).await?))
}

/// Delete Reminder
#[utoipa::path(
    delete,
    path = "/api/reminders/{id}",
    params(("id" = Uuid, Path, description = "Reminder ID")),
    responses(
        (status = 200, description = "Reminder deleted"),
        (status = 404, description = "Reminder not found", body = ErrorResponse)
    ),
    tag = "Reminder"
)]
pub async fn delete_reminder(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = state
        .reminder_service
        .delete(id)
        .await
        .map_err(api_error)?;

    if !deleted {
        return Err(error_body(StatusCode::NOT_FOUND, "Reminder not found"));
    }

    Ok(Json(serde_json::json!({
        "status": "ok",
        "message": "Reminder deleted"
    })))
}

/// Mark Reminder completed (no-op when already completed)
#[utoipa::path(
    patch,
    path = "/api/reminders/{id}/complete",
    params(("id" = Uuid, Path, description = "Reminder ID")),
    responses(
        (status = 200, description = "Reminder completed", body = ReminderResponse),
        (status = 404, description = "Reminder not found", body = ErrorResponse)
    ),
    tag = "Reminder"
)]
pub async fn complete_reminder(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReminderResponse>, ApiError> {
    let reminder = state
        .reminder_service
        .complete(id)
        .await
        .map_err(api_error)?;

    Ok(Json(to_response(&state, reminder).await?))
}

/// Flip Reminder between Pending and Completed
#[utoipa::path(
    patch,
    path = "/api/reminders/{id}/toggle",
    params(("id" = Uuid, Path, description = "Reminder ID")),
    responses(
        (status = 200, description = "Reminder toggled", body = ReminderResponse),
        (status = 404, description = "Reminder not found", body = ErrorResponse)
    ),
    tag = "Reminder"
)]
pub async fn toggle_reminder(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReminderResponse>, ApiError> {
    let reminder = state
        .reminder_service
        .toggle(id)
        .await
        .map_err(api_error)?;

    Ok(Json(to_response(&state, reminder).await?))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/reminders", get(list_reminders).post(create_reminder))
        .route("/api/reminders/pet/:pet_id", get(list_pet_reminders))
        .route(
            "/api/reminders/:id",
            get(get_reminder)
                .patch(update_reminder)
                .put(update_reminder)
                .delete(delete_reminder),
        )
        .route("/api/reminders/:id/complete", patch(complete_reminder))
        .route("/api/reminders/:id/toggle", patch(toggle_reminder))
}
