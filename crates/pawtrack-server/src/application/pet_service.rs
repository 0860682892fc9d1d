//! Pet Application Service (Use Case)
//!
//! Orchestrates domain operations for Pet management.

use std::sync::Arc;
use uuid::Uuid;

use pawtrack::{DomainError, NewPet, Pet, PetPatch, PetRepository, ReminderRepository};

/// Application service for Pet operations
pub struct PetService<P: PetRepository, R: ReminderRepository> {
    repo: Arc<P>,
    reminders: Arc<R>,
}

impl<P: PetRepository, R: ReminderRepository> PetService<P, R> {
    pub fn new(repo: Arc<P>, reminders: Arc<R>) -> Self {
        Self { repo, reminders }
    }

    /// Get all Pets
    pub async fn list_all(&self) -> Result<Vec<Pet>, DomainError> {
        self.repo.find_all().await
    }

    /// Get a Pet by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Pet>, DomainError> {
        self.repo.find_by_id(id).await
    }

    /// Create a new Pet
    pub async fn create(&self, new: NewPet) -> Result<Pet, DomainError> {
        let saved = self.repo.insert(new).await?;

        tracing::info!("Created Pet: {} ({}) - {}", saved.name, saved.id, saved.pet_type);

        Ok(saved)
    }

    /// Update a Pet
    pub async fn update(&self, id: Uuid, patch: PetPatch) -> Result<Pet, DomainError> {
        self.repo.update(id, patch).await
    }

    /// Delete a Pet together with its reminders
    pub async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        if !self.repo.delete(id).await? {
            return Ok(false);
        }

        let removed = self.reminders.delete_by_pet(id).await?;
        tracing::info!("Deleted Pet: {} (and {} reminders)", id, removed);

        Ok(true)
    }
}
