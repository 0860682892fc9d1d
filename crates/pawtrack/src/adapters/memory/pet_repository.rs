//! In-memory implementation of PetRepository

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{DomainError, NewPet, Pet, PetPatch};
use crate::ports::PetRepository;

#[derive(Debug, Default)]
pub struct InMemoryPetRepository {
    pets: RwLock<Vec<Pet>>,
}

impl InMemoryPetRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PetRepository for InMemoryPetRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Pet>, DomainError> {
        let pets = self.pets.read().await;
        Ok(pets.iter().find(|p| p.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Pet>, DomainError> {
        Ok(self.pets.read().await.clone())
    }

    async fn insert(&self, new: NewPet) -> Result<Pet, DomainError> {
        let pet = Pet::from_new(Uuid::new_v4(), new.validate()?, Utc::now());
        self.pets.write().await.push(pet.clone());
        Ok(pet)
    }

    async fn update(&self, id: Uuid, patch: PetPatch) -> Result<Pet, DomainError> {
        let patch = patch.validate()?;

        let mut pets = self.pets.write().await;
        let pet = pets
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DomainError::not_found("Pet", id))?;

        pet.apply_patch(patch, Utc::now());
        Ok(pet.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut pets = self.pets.write().await;
        let before = pets.len();
        pets.retain(|p| p.id != id);
        Ok(pets.len() != before)
    }

    async fn exists(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.pets.read().await.iter().any(|p| p.id == id))
    }
}
