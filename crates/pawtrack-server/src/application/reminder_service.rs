//! Reminder Application Service (Use Case)
//!
//! Orchestrates domain operations for Reminder management: CRUD, the
//! complete/toggle transitions, and the grouped day view.

use chrono::{NaiveDate, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use pawtrack::{
    best_streak, complete, dates_around, day_counts, filter_reminders, group_by_time_slot,
    today_stats, toggle, DayClock, DayStats, DomainError, GroupedReminders, PetRepository,
    PetSummary, Reminder, ReminderDraft, ReminderPatch, ReminderQuery, ReminderRepository,
};

/// Days shown on each side of the selected date in the calendar strip
const CALENDAR_RADIUS: u32 = 3;

/// Everything the day screen needs in one response
#[derive(Debug, Clone)]
pub struct DayOverview {
    pub query: ReminderQuery,
    pub grouped: GroupedReminders,
    pub calendar: Vec<(NaiveDate, usize)>,
}

/// Application service for Reminder operations
pub struct ReminderService<R: ReminderRepository, P: PetRepository> {
    repo: Arc<R>,
    pets: Arc<P>,
    clock: DayClock,
}

impl<R: ReminderRepository, P: PetRepository> ReminderService<R, P> {
    pub fn new(repo: Arc<R>, pets: Arc<P>, clock: DayClock) -> Self {
        Self { repo, pets, clock }
    }

    pub fn clock(&self) -> &DayClock {
        &self.clock
    }

    /// Get all Reminders
    pub async fn list_all(&self) -> Result<Vec<Reminder>, DomainError> {
        self.repo.find_all().await
    }

    /// Get Reminders of one Pet
    pub async fn list_by_pet(&self, pet_id: Uuid) -> Result<Vec<Reminder>, DomainError> {
        self.repo.find_by_pet(pet_id).await
    }

    /// Get a Reminder by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Reminder>, DomainError> {
        self.repo.find_by_id(id).await
    }

    /// Validate and create a new Reminder for an existing Pet
    pub async fn create(&self, draft: ReminderDraft) -> Result<Reminder, DomainError> {
        let new = draft.validate(&self.clock)?;
        self.ensure_pet(new.pet_id).await?;

        let saved = self.repo.insert(new).await?;

        tracing::info!(
            "Created Reminder: {} ({}) - {} {}",
            saved.title,
            saved.id,
            saved.category,
            saved.frequency
        );

        Ok(saved)
    }

    /// Update a Reminder
    pub async fn update(&self, id: Uuid, patch: ReminderPatch) -> Result<Reminder, DomainError> {
        patch.validate()?;
        if let Some(pet_id) = patch.pet_id {
            self.ensure_pet(pet_id).await?;
        }

        self.repo.update(id, patch).await
    }

    /// Delete a Reminder
    pub async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let deleted = self.repo.delete(id).await?;
        if deleted {
            tracing::info!("Deleted Reminder: {}", id);
        }
        Ok(deleted)
    }

    /// Mark a Reminder completed; a completed one is returned unchanged
    pub async fn complete(&self, id: Uuid) -> Result<Reminder, DomainError> {
        let now = Utc::now();
        let saved = self.repo.modify(id, move |current| complete(current, now)).await?;

        tracing::info!("Completed Reminder: {} (streak {})", id, saved.streak);
        Ok(saved)
    }

    /// Flip a Reminder between Pending and Completed
    pub async fn toggle(&self, id: Uuid) -> Result<Reminder, DomainError> {
        let now = Utc::now();
        let saved = self.repo.modify(id, move |current| toggle(current, now)).await?;

        tracing::info!(
            "Toggled Reminder: {} -> {} (streak {})",
            id,
            saved.status,
            saved.streak
        );
        Ok(saved)
    }

    /// Filtered, slot-grouped reminders of one day plus counts for the days around it
    pub async fn day_overview(&self, query: ReminderQuery) -> Result<DayOverview, DomainError> {
        let reminders = self.repo.find_all().await?;
        let grouped = group_by_time_slot(filter_reminders(&reminders, &query, &self.clock), &self.clock);
        let calendar = day_counts(
            &reminders,
            &query,
            &dates_around(query.date, CALENDAR_RADIUS),
            &self.clock,
        );

        tracing::debug!("Day view for {}: {} reminders", query.date, grouped.len());

        Ok(DayOverview {
            query,
            grouped,
            calendar,
        })
    }

    /// Counts for `date` and the best streak overall
    pub async fn stats(&self, date: NaiveDate) -> Result<(DayStats, u32), DomainError> {
        let reminders = self.repo.find_all().await?;
        Ok((
            today_stats(&reminders, date, &self.clock),
            best_streak(&reminders),
        ))
    }

    /// Read-only pet snapshots for a set of reminders
    pub async fn pet_summaries(
        &self,
        reminders: &[Reminder],
    ) -> Result<HashMap<Uuid, PetSummary>, DomainError> {
        let mut summaries = HashMap::new();
        for pet_id in reminders.iter().map(|r| r.pet_id) {
            if summaries.contains_key(&pet_id) {
                continue;
            }
            if let Some(pet) = self.pets.find_by_id(pet_id).await? {
                summaries.insert(pet_id, pet.summary());
            }
        }
        Ok(summaries)
    }

    async fn ensure_pet(&self, pet_id: Uuid) -> Result<(), DomainError> {
        if !self.pets.exists(pet_id).await? {
            return Err(DomainError::not_found("Pet", pet_id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawtrack::{
        Category, Frequency, InMemoryPetRepository, InMemoryReminderRepository, NewPet,
        ReminderStatus,
    };

    type Service = ReminderService<InMemoryReminderRepository, InMemoryPetRepository>;

    async fn service_with_pet() -> (Service, Uuid) {
        let pets = Arc::new(InMemoryPetRepository::new());
        let pet = pets
            .insert(NewPet {
                name: "Mochi".to_string(),
                pet_type: "Cat".to_string(),
                breed: None,
                age: None,
                owner: "Aki".to_string(),
            })
            .await
            .unwrap();
        let service = ReminderService::new(
            Arc::new(InMemoryReminderRepository::new()),
            pets,
            DayClock::utc(),
        );
        (service, pet.id)
    }

    fn draft(pet_id: Uuid, start: &str) -> ReminderDraft {
        ReminderDraft {
            title: Some("Feed".to_string()),
            pet_id: Some(pet_id),
            category: Some(Category::General),
            notes: None,
            start_date: Some(start.to_string()),
            frequency: Some(Frequency::Daily),
            time_slot: None,
        }
    }

    #[tokio::test]
    async fn test_create_requires_known_pet() {
        let (service, _) = service_with_pet().await;
        let result = service
            .create(draft(Uuid::new_v4(), "2025-03-01T08:00:00Z"))
            .await;

        assert!(matches!(
            result,
            Err(DomainError::NotFound { entity_type, .. }) if entity_type == "Pet"
        ));
        assert!(service.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_complete_is_one_way() {
        let (service, pet) = service_with_pet().await;
        let reminder = service
            .create(draft(pet, "2025-03-01T08:00:00Z"))
            .await
            .unwrap();

        let first = service.complete(reminder.id).await.unwrap();
        let second = service.complete(reminder.id).await.unwrap();

        assert_eq!(first.status, ReminderStatus::Completed);
        assert_eq!(first.streak, 1);
        assert_eq!(second, first);
    }

    #[tokio::test]
    async fn test_complete_keeps_concurrent_patch() {
        let (service, pet) = service_with_pet().await;
        let service = Arc::new(service);
        let id = service
            .create(draft(pet, "2025-03-01T08:00:00Z"))
            .await
            .unwrap()
            .id;

        let completer = {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.complete(id).await })
        };
        let patcher = {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                service
                    .update(
                        id,
                        ReminderPatch {
                            title: Some("Evening walk".to_string()),
                            ..Default::default()
                        },
                    )
                    .await
            })
        };
        completer.await.unwrap().unwrap();
        patcher.await.unwrap().unwrap();

        let stored = service.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.title, "Evening walk");
        assert_eq!(stored.status, ReminderStatus::Completed);
        assert_eq!(stored.streak, 1);
        assert!(service.toggle(Uuid::new_v4()).await.is_err());
    }

    #[tokio::test]
    async fn test_day_overview_and_stats() {
        let (service, pet) = service_with_pet().await;
        let morning = service
            .create(draft(pet, "2025-03-01T08:00:00Z"))
            .await
            .unwrap();
        service
            .create(draft(pet, "2025-03-01T16:30:00Z"))
            .await
            .unwrap();
        service
            .create(draft(pet, "2025-03-03T19:00:00Z"))
            .await
            .unwrap();
        service.toggle(morning.id).await.unwrap();

        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let overview = service
            .day_overview(ReminderQuery::for_date(date))
            .await
            .unwrap();

        assert_eq!(overview.grouped.morning.len(), 1);
        assert_eq!(overview.grouped.afternoon.len(), 1);
        assert_eq!(overview.calendar.len(), 7);
        assert_eq!(overview.calendar[3], (date, 2));
        assert_eq!(overview.calendar[5].1, 1);

        let (stats, best) = service.stats(date).await.unwrap();
        assert_eq!(stats, DayStats::new(1, 2));
        assert_eq!(stats.completion_rate, 50);
        assert_eq!(best, 1);
    }
}
