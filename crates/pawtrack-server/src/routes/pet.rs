//! Pet Routes
//!
//! HTTP handlers that delegate to PetService for business logic.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use super::{api_error, error_body, ApiError, ApiJson};
use crate::models::{CreatePetRequest, ErrorResponse, PetResponse, UpdatePetRequest};
use crate::AppState;

/// List all Pets
#[utoipa::path(
    get,
    path = "/api/pets",
    responses(
        (status = 200, description = "List of all Pets", body = Vec<PetResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Pet"
)]
pub async fn list_pets(State(state): State<AppState>) -> Result<Json<Vec<PetResponse>>, ApiError> {
    let pets = state.pet_service.list_all().await.map_err(api_error)?;

    Ok(Json(pets.into_iter().map(PetResponse::from).collect()))
}

/// Create new Pet
#[utoipa::path(
    post,
    path = "/api/pets",
    request_body = CreatePetRequest,
    responses(
        (status = 201, description = "Pet created", body = PetResponse),
        (status = 400, description = "Missing name, type or owner", body = ErrorResponse)
    ),
    tag = "Pet"
)]
pub async fn create_pet(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreatePetRequest>,
) -> Result<(StatusCode, Json<PetResponse>), ApiError> {
    let pet = state
        .pet_service
        .create(payload.into())
        .await
        .map_err(api_error)?;

    Ok((StatusCode::CREATED, Json(pet.into())))
}

/// Get Pet by ID
#[utoipa::path(
    get,
    path = "/api/pets/{id}",
    params(("id" = Uuid, Path, description = "Pet ID")),
    responses(
        (status = 200, description = "Pet found", body = PetResponse),
        (status = 404, description = "Pet not found", body = ErrorResponse)
    ),
    tag = "Pet"
)]
pub async fn get_pet(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PetResponse>, ApiError> {
    let pet = state
        .pet_service
        .get_by_id(id)
        .await
        .map_err(api_error)?
        .ok_or_else(|| error_body(StatusCode::NOT_FOUND, "Pet not found"))?;

    Ok(Json(pet.into()))
}

/// Update Pet
#[utoipa::path(
    patch,
    path = "/api/pets/{id}",
    params(("id" = Uuid, Path, description = "Pet ID")),
    request_body = UpdatePetRequest,
    responses(
        (status = 200, description = "Pet updated", body = PetResponse),
        (status = 400, description = "Blank field supplied", body = ErrorResponse),
        (status = 404, description = "Pet not found", body = ErrorResponse)
    ),
    tag = "Pet"
)]
pub async fn update_pet(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ApiJson(payload): ApiJson<UpdatePetRequest>,
) -> Result<Json<PetResponse>, ApiError> {
    let pet = state
        .pet_service
        .update(id, payload.into())
        .await
        .map_err(api_error)?;

    Ok(Json(pet.into()))
}

/// Delete Pet and its reminders
#[utoipa::path(
    delete,
    path = "/api/pets/{id}",
    params(("id" = Uuid, Path, description = "Pet ID")),
    responses(
        (status = 200, description = "Pet deleted"),
        (status = 404, description = "Pet not found", body = ErrorResponse)
    ),
    tag = "Pet"
)]
pub async fn delete_pet(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = state.pet_service.delete(id).await.map_err(api_error)?;

    if !deleted {
        return Err(error_body(StatusCode::NOT_FOUND, "Pet not found"));
    }

    Ok(Json(serde_json::json!({
        "status": "ok",
        "message": "Pet deleted"
    })))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/pets", get(list_pets).post(create_pet))
        .route(
            "/api/pets/:id",
            get(get_pet)
                .patch(update_pet)
                .put(update_pet)
                .delete(delete_pet),
        )
}
