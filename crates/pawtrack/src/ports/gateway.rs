//! Reminder Gateway Port
//!
//! How a `ReminderStore` reaches the authoritative reminder list. The local
//! gateway wraps a repository in the same process; a remote one talks HTTP.
//! Either way the store takes whatever comes back as the new truth.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, NewReminder, Reminder, ReminderPatch};

#[async_trait]
pub trait ReminderGateway: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Reminder>, DomainError>;

    async fn create(&self, new: NewReminder) -> Result<Reminder, DomainError>;

    async fn update(&self, id: Uuid, patch: ReminderPatch) -> Result<Reminder, DomainError>;

    /// `false` when the reminder was already gone
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// One-way completion
    async fn complete(&self, id: Uuid) -> Result<Reminder, DomainError>;

    /// Flip between Pending and Completed
    async fn toggle(&self, id: Uuid) -> Result<Reminder, DomainError>;
}
