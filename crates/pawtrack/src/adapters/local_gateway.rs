//! Local gateway: a store backed directly by a repository
//!
//! Completion runs through the domain's completion engine here, in process.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{self, DomainError, NewReminder, Reminder, ReminderPatch};
use crate::ports::{ReminderGateway, ReminderRepository};

pub struct LocalGateway<R: ReminderRepository> {
    repo: Arc<R>,
}

impl<R: ReminderRepository> LocalGateway<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Run one completion step against the stored value under a single lock
    async fn transition(
        &self,
        id: Uuid,
        step: fn(&Reminder, DateTime<Utc>) -> Reminder,
    ) -> Result<Reminder, DomainError> {
        let now = Utc::now();
        self.repo.modify(id, move |current| step(current, now)).await
    }
}

#[async_trait]
impl<R: ReminderRepository> ReminderGateway for LocalGateway<R> {
    async fn fetch_all(&self) -> Result<Vec<Reminder>, DomainError> {
        self.repo.find_all().await
    }

    async fn create(&self, new: NewReminder) -> Result<Reminder, DomainError> {
        self.repo.insert(new).await
    }

    async fn update(&self, id: Uuid, patch: ReminderPatch) -> Result<Reminder, DomainError> {
        self.repo.update(id, patch).await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        self.repo.delete(id).await
    }

    async fn complete(&self, id: Uuid) -> Result<Reminder, DomainError> {
        self.transition(id, domain::complete).await
    }

    async fn toggle(&self, id: Uuid) -> Result<Reminder, DomainError> {
        self.transition(id, domain::toggle).await
    }
}
