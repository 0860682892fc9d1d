//! Reminder Repository Port
//!
//! Abstract interface for Reminder persistence operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, NewReminder, Reminder, ReminderPatch};

/// Repository interface for Reminder entities
///
/// Each call is atomic on its own; nothing spans two calls.
#[async_trait]
pub trait ReminderRepository: Send + Sync {
    /// All reminders in insertion order
    async fn find_all(&self) -> Result<Vec<Reminder>, DomainError>;

    /// Find a Reminder by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Reminder>, DomainError>;

    /// Reminders belonging to one pet, in insertion order
    async fn find_by_pet(&self, pet_id: Uuid) -> Result<Vec<Reminder>, DomainError>;

    /// Assign an ID, store, and return the new Reminder
    async fn insert(&self, new: NewReminder) -> Result<Reminder, DomainError>;

    /// Merge a partial update; `NotFound` if the ID is unknown
    async fn update(&self, id: Uuid, patch: ReminderPatch) -> Result<Reminder, DomainError>;

    /// Overwrite a stored Reminder with a whole new value
    async fn replace(&self, reminder: &Reminder) -> Result<Reminder, DomainError>;

    /// Read-modify-write one Reminder under a single lock.
    ///
    /// `step` sees the stored value and returns its replacement; `NotFound`
    /// if the ID is unknown.
    async fn modify<F>(&self, id: Uuid, step: F) -> Result<Reminder, DomainError>
    where
        F: FnOnce(&Reminder) -> Reminder + Send + 'static;

    /// Delete a Reminder by ID, `false` if there was nothing to delete
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Delete every Reminder of a pet, returning how many went
    async fn delete_by_pet(&self, pet_id: Uuid) -> Result<usize, DomainError>;
}
