//! In-memory implementation of ReminderRepository

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{DomainError, NewReminder, Reminder, ReminderPatch};
use crate::ports::ReminderRepository;

#[derive(Debug, Default)]
pub struct InMemoryReminderRepository {
    reminders: RwLock<Vec<Reminder>>,
}

impl InMemoryReminderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing list, e.g. a restored snapshot
    pub fn with_reminders(reminders: Vec<Reminder>) -> Self {
        Self {
            reminders: RwLock::new(reminders),
        }
    }

    pub async fn len(&self) -> usize {
        self.reminders.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.reminders.read().await.is_empty()
    }
}

#[async_trait]
impl ReminderRepository for InMemoryReminderRepository {
    async fn find_all(&self) -> Result<Vec<Reminder>, DomainError> {
        Ok(self.reminders.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Reminder>, DomainError> {
        let reminders = self.reminders.read().await;
        Ok(reminders.iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_pet(&self, pet_id: Uuid) -> Result<Vec<Reminder>, DomainError> {
        let reminders = self.reminders.read().await;
        Ok(reminders
            .iter()
            .filter(|r| r.pet_id == pet_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, new: NewReminder) -> Result<Reminder, DomainError> {
        new.ensure_valid()?;

        let reminder = Reminder::from_new(Uuid::new_v4(), new, Utc::now());
        self.reminders.write().await.push(reminder.clone());

        tracing::debug!("Stored reminder {}", reminder.id);
        Ok(reminder)
    }

    async fn update(&self, id: Uuid, patch: ReminderPatch) -> Result<Reminder, DomainError> {
        patch.validate()?;

        let mut reminders = self.reminders.write().await;
        let reminder = reminders
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| DomainError::not_found("Reminder", id))?;

        reminder.apply_patch(patch, Utc::now());
        Ok(reminder.clone())
    }

    async fn replace(&self, reminder: &Reminder) -> Result<Reminder, DomainError> {
        let mut reminders = self.reminders.write().await;
        let slot = reminders
            .iter_mut()
            .find(|r| r.id == reminder.id)
            .ok_or_else(|| DomainError::not_found("Reminder", reminder.id))?;

        *slot = reminder.clone();
        Ok(reminder.clone())
    }

    async fn modify<F>(&self, id: Uuid, step: F) -> Result<Reminder, DomainError>
    where
        F: FnOnce(&Reminder) -> Reminder + Send + 'static,
    {
        let mut reminders = self.reminders.write().await;
        let slot = reminders
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| DomainError::not_found("Reminder", id))?;

        *slot = step(slot);
        Ok(slot.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut reminders = self.reminders.write().await;
        let before = reminders.len();
        reminders.retain(|r| r.id != id);
        Ok(reminders.len() != before)
    }

    async fn delete_by_pet(&self, pet_id: Uuid) -> Result<usize, DomainError> {
        let mut reminders = self.reminders.write().await;
        let before = reminders.len();
        reminders.retain(|r| r.pet_id != pet_id);
        Ok(before - reminders.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Frequency};
    use std::sync::Arc;
    use tokio::task::JoinSet;

    fn new_reminder(title: &str, pet_id: Uuid) -> NewReminder {
        NewReminder {
            title: title.to_string(),
            pet_id,
            category: Category::General,
            notes: None,
            start_date: Utc::now(),
            frequency: Frequency::Daily,
            time_slot: None,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_fresh_pending_reminder() {
        let repo = InMemoryReminderRepository::new();
        let a = repo.insert(new_reminder("feed", Uuid::new_v4())).await.unwrap();
        let b = repo.insert(new_reminder("feed", Uuid::new_v4())).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(a.streak, 0);
        assert!(!a.is_completed());
        assert_eq!(a.created_at, a.updated_at);
        assert_eq!(repo.find_all().await.unwrap(), vec![a, b]);
    }

    #[tokio::test]
    async fn test_insert_with_empty_title_leaves_repository_unchanged() {
        let repo = InMemoryReminderRepository::new();
        repo.insert(new_reminder("feed", Uuid::new_v4())).await.unwrap();

        let err = repo
            .insert(new_reminder("   ", Uuid::new_v4()))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_update_merges_and_reports_missing() {
        let repo = InMemoryReminderRepository::new();
        let stored = repo.insert(new_reminder("feed", Uuid::new_v4())).await.unwrap();

        let updated = repo
            .update(
                stored.id,
                ReminderPatch {
                    category: Some(Category::Health),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "feed");
        assert_eq!(updated.category, Category::Health);
        assert!(updated.updated_at >= stored.updated_at);

        let missing = repo.update(Uuid::new_v4(), ReminderPatch::default()).await;
        assert!(matches!(missing, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_rejected_patch_does_not_touch_stored_reminder() {
        let repo = InMemoryReminderRepository::new();
        let stored = repo.insert(new_reminder("feed", Uuid::new_v4())).await.unwrap();

        let result = repo
            .update(
                stored.id,
                ReminderPatch {
                    title: Some(String::new()),
                    category: Some(Category::Health),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert_eq!(repo.find_by_id(stored.id).await.unwrap(), Some(stored));
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_false() {
        let repo = InMemoryReminderRepository::new();
        let stored = repo.insert(new_reminder("feed", Uuid::new_v4())).await.unwrap();

        assert!(!repo.delete(Uuid::new_v4()).await.unwrap());
        assert_eq!(repo.find_all().await.unwrap(), vec![stored.clone()]);

        assert!(repo.delete(stored.id).await.unwrap());
        assert!(!repo.delete(stored.id).await.unwrap());
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_delete_by_pet() {
        let repo = InMemoryReminderRepository::new();
        let rex = Uuid::new_v4();
        let tom = Uuid::new_v4();
        repo.insert(new_reminder("a", rex)).await.unwrap();
        repo.insert(new_reminder("b", tom)).await.unwrap();
        repo.insert(new_reminder("c", rex)).await.unwrap();

        assert_eq!(repo.find_by_pet(rex).await.unwrap().len(), 2);
        assert_eq!(repo.delete_by_pet(rex).await.unwrap(), 2);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_modify_interleaved_with_patches_loses_nothing() {
        let repo = Arc::new(InMemoryReminderRepository::new());
        let id = repo.insert(new_reminder("feed", Uuid::new_v4())).await.unwrap().id;

        let mut tasks = JoinSet::new();
        for i in 0..100 {
            {
                let repo = repo.clone();
                tasks.spawn(async move {
                    repo.modify(id, |r| {
                        let mut next = r.clone();
                        next.streak += 1;
                        next
                    })
                    .await
                    .unwrap();
                });
            }
            {
                let repo = repo.clone();
                tasks.spawn(async move {
                    repo.update(
                        id,
                        ReminderPatch {
                            notes: Some(format!("note {}", i)),
                            ..Default::default()
                        },
                    )
                    .await
                    .unwrap();
                });
            }
        }
        while let Some(joined) = tasks.join_next().await {
            joined.unwrap();
        }

        let after = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(after.streak, 100);
        assert!(after.notes.is_some());
    }

    #[tokio::test]
    async fn test_modify_unknown_id_is_not_found() {
        let repo = InMemoryReminderRepository::new();
        let result = repo.modify(Uuid::new_v4(), |r| r.clone()).await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }
}
