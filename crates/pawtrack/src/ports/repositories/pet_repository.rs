//! Pet Repository Port

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, NewPet, Pet, PetPatch};

/// Repository interface for Pet entities
#[async_trait]
pub trait PetRepository: Send + Sync {
    /// Find a Pet by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Pet>, DomainError>;

    /// Find all Pets
    async fn find_all(&self) -> Result<Vec<Pet>, DomainError>;

    async fn insert(&self, new: NewPet) -> Result<Pet, DomainError>;

    async fn update(&self, id: Uuid, patch: PetPatch) -> Result<Pet, DomainError>;

    /// Delete a Pet by ID
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Check if Pet exists
    async fn exists(&self, id: Uuid) -> Result<bool, DomainError>;
}
