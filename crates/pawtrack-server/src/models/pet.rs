//! Pet DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use pawtrack::{NewPet, Pet, PetPatch, PetSummary};

/// Create Pet request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePetRequest {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub pet_type: String,
    pub breed: Option<String>,
    pub age: Option<u32>,
    #[serde(default)]
    pub owner: String,
}

impl From<CreatePetRequest> for NewPet {
    fn from(req: CreatePetRequest) -> Self {
        NewPet {
            name: req.name,
            pet_type: req.pet_type,
            breed: req.breed,
            age: req.age,
            owner: req.owner,
        }
    }
}

/// Update Pet request (absent fields are left unchanged)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePetRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub pet_type: Option<String>,
    pub breed: Option<String>,
    pub age: Option<u32>,
    pub owner: Option<String>,
}

impl From<UpdatePetRequest> for PetPatch {
    fn from(req: UpdatePetRequest) -> Self {
        PetPatch {
            name: req.name,
            pet_type: req.pet_type,
            breed: req.breed,
            age: req.age,
            owner: req.owner,
        }
    }
}

/// Pet response
#[derive(Debug, Serialize, ToSchema)]
pub struct PetResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub pet_type: String,
    pub breed: Option<String>,
    pub age: Option<u32>,
    pub owner: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Pet> for PetResponse {
    fn from(pet: Pet) -> Self {
        PetResponse {
            id: pet.id,
            name: pet.name,
            pet_type: pet.pet_type,
            breed: pet.breed,
            age: pet.age,
            owner: pet.owner,
            created_at: pet.created_at,
            updated_at: pet.updated_at,
        }
    }
}

/// Pet snapshot embedded in reminder responses
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PetSummaryResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub pet_type: String,
}

impl From<PetSummary> for PetSummaryResponse {
    fn from(summary: PetSummary) -> Self {
        PetSummaryResponse {
            id: summary.id,
            name: summary.name,
            pet_type: summary.pet_type,
        }
    }
}
