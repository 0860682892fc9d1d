//! Pet - An animal being cared for
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::DomainError;

/// Pet - Owned by the pet repository, referenced from reminders by id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
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

/// Read-only snapshot of a pet carried alongside a reminder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetSummary {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub pet_type: String,
}

/// Pet creation payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewPet {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub pet_type: String,
    pub breed: Option<String>,
    pub age: Option<u32>,
    #[serde(default)]
    pub owner: String,
}

/// Partial pet update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PetPatch {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub pet_type: Option<String>,
    pub breed: Option<String>,
    pub age: Option<u32>,
    pub owner: Option<String>,
}

fn require(field: &str, value: &str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl NewPet {
    /// Check required fields, trimming them
    pub fn validate(self) -> Result<Self, DomainError> {
        Ok(Self {
            name: require("Name", &self.name)?,
            pet_type: require("Type", &self.pet_type)?,
            breed: non_blank(self.breed),
            age: self.age,
            owner: require("Owner", &self.owner)?,
        })
    }
}

impl PetPatch {
    /// Supplied text fields must still be non-empty
    pub fn validate(self) -> Result<Self, DomainError> {
        Ok(Self {
            name: self.name.map(|v| require("Name", &v)).transpose()?,
            pet_type: self.pet_type.map(|v| require("Type", &v)).transpose()?,
            breed: self.breed,
            age: self.age,
            owner: self.owner.map(|v| require("Owner", &v)).transpose()?,
        })
    }
}

impl Pet {
    /// Create a pet from a validated payload
    pub fn from_new(id: Uuid, new: NewPet, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new.name,
            pet_type: new.pet_type,
            breed: new.breed,
            age: new.age,
            owner: new.owner,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_patch(&mut self, patch: PetPatch, now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(pet_type) = patch.pet_type {
            self.pet_type = pet_type;
        }
        if let Some(breed) = patch.breed {
            self.breed = non_blank(Some(breed));
        }
        if let Some(age) = patch.age {
            self.age = Some(age);
        }
        if let Some(owner) = patch.owner {
            self.owner = owner;
        }
        self.updated_at = now.max(self.created_at);
    }

    pub fn summary(&self) -> PetSummary {
        PetSummary {
            id: self.id,
            name: self.name.clone(),
            pet_type: self.pet_type.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_pet() -> NewPet {
        NewPet {
            name: " Mochi ".to_string(),
            pet_type: "Cat".to_string(),
            breed: Some("".to_string()),
            age: Some(3),
            owner: "Aki".to_string(),
        }
    }

    #[test]
    fn test_validate_trims_and_drops_blank_breed() {
        let pet = new_pet().validate().unwrap();
        assert_eq!(pet.name, "Mochi");
        assert_eq!(pet.breed, None);
    }

    #[test]
    fn test_validate_requires_owner() {
        let err = NewPet {
            owner: "   ".to_string(),
            ..new_pet()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, DomainError::validation("Owner is required"));
    }

    #[test]
    fn test_patch_keeps_untouched_fields() {
        let created = Utc::now();
        let mut pet = Pet::from_new(Uuid::new_v4(), new_pet().validate().unwrap(), created);
        let later = created + chrono::Duration::minutes(5);

        pet.apply_patch(
            PetPatch {
                age: Some(4),
                ..Default::default()
            },
            later,
        );

        assert_eq!(pet.name, "Mochi");
        assert_eq!(pet.age, Some(4));
        assert_eq!(pet.updated_at, later);
    }

    #[test]
    fn test_serializes_species_as_type() {
        let pet = Pet::from_new(Uuid::new_v4(), new_pet().validate().unwrap(), Utc::now());
        let json = serde_json::to_value(&pet).unwrap();
        assert_eq!(json["type"], "Cat");
    }
}
