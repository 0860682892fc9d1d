//! ReminderStore - actions and derived views
//!
//! Mutations go through the gateway first; the local list only changes
//! once the gateway has answered, and then takes the returned entity as is.
//! A failed call records `error` and leaves the reminders untouched.

use chrono::NaiveDate;
use tokio::sync::watch;
use uuid::Uuid;

use crate::domain::{
    self, Category, DayClock, DayStats, DomainError, GroupedReminders, Reminder, ReminderDraft,
    ReminderPatch, ReminderQuery,
};
use crate::ports::ReminderGateway;
use crate::store::{StorePersistence, StoreState};

pub struct ReminderStore<G: ReminderGateway> {
    gateway: G,
    clock: DayClock,
    state: StoreState,
    persistence: Option<Box<dyn StorePersistence>>,
    notifier: watch::Sender<StoreState>,
}

impl<G: ReminderGateway> ReminderStore<G> {
    pub fn new(gateway: G, clock: DayClock) -> Self {
        let state = StoreState::new(clock.today());
        let (notifier, _) = watch::channel(state.clone());
        Self {
            gateway,
            clock,
            state,
            persistence: None,
            notifier,
        }
    }

    /// Save a snapshot after every successful mutation
    pub fn with_persistence(mut self, persistence: impl StorePersistence + 'static) -> Self {
        self.persistence = Some(Box::new(persistence));
        self
    }

    /// Receive the full state after every change
    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.notifier.subscribe()
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn clock(&self) -> &DayClock {
        &self.clock
    }

    /// Load the last saved snapshot, if any. Returns whether one was found.
    pub fn restore(&mut self) -> Result<bool, DomainError> {
        let Some(persistence) = &self.persistence else {
            return Ok(false);
        };
        let Some(saved) = persistence.load()? else {
            return Ok(false);
        };

        self.state.reminders = saved.reminders;
        self.state.selected_pet = saved.selected_pet;
        self.state.selected_category = saved.selected_category;
        self.notify();
        Ok(true)
    }

    // ============================================
    // Actions
    // ============================================

    /// Replace the local list with the authoritative one
    pub async fn fetch(&mut self) -> Result<(), DomainError> {
        self.begin();
        match self.gateway.fetch_all().await {
            Ok(reminders) => {
                self.state.reminders = reminders;
                self.succeed();
                Ok(())
            }
            Err(e) => Err(self.fail("Failed to fetch reminders", e)),
        }
    }

    /// Validate a draft and create it. Invalid drafts never reach the gateway.
    pub async fn add(&mut self, draft: ReminderDraft) -> Result<Reminder, DomainError> {
        let new = match draft.validate(&self.clock) {
            Ok(new) => new,
            Err(e) => return Err(self.fail("Failed to add reminder", e)),
        };

        self.begin();
        match self.gateway.create(new).await {
            Ok(reminder) => {
                tracing::info!("Added reminder: {} ({})", reminder.title, reminder.id);
                self.state.reminders.push(reminder.clone());
                self.succeed();
                Ok(reminder)
            }
            Err(e) => Err(self.fail("Failed to add reminder", e)),
        }
    }

    pub async fn update(
        &mut self,
        id: Uuid,
        patch: ReminderPatch,
    ) -> Result<Reminder, DomainError> {
        if let Err(e) = patch.validate() {
            return Err(self.fail("Failed to update reminder", e));
        }

        self.begin();
        match self.gateway.update(id, patch).await {
            Ok(reminder) => {
                self.replace_local(reminder.clone());
                self.succeed();
                Ok(reminder)
            }
            Err(e) => Err(self.fail("Failed to update reminder", e)),
        }
    }

    /// `Ok(false)` when the reminder was already gone
    pub async fn delete(&mut self, id: Uuid) -> Result<bool, DomainError> {
        self.begin();
        match self.gateway.delete(id).await {
            Ok(deleted) => {
                self.state.reminders.retain(|r| r.id != id);
                self.succeed();
                Ok(deleted)
            }
            Err(e) => Err(self.fail("Failed to delete reminder", e)),
        }
    }

    /// Flip a reminder between Pending and Completed
    pub async fn toggle_complete(&mut self, id: Uuid) -> Result<Reminder, DomainError> {
        self.ensure_known(id, "Failed to complete reminder")?;

        match self.gateway.toggle(id).await {
            Ok(reminder) => {
                self.replace_local(reminder.clone());
                self.succeed();
                Ok(reminder)
            }
            Err(e) => Err(self.fail("Failed to complete reminder", e)),
        }
    }

    /// One-way completion, streak as computed by the gateway
    pub async fn complete(&mut self, id: Uuid) -> Result<Reminder, DomainError> {
        self.ensure_known(id, "Failed to complete reminder")?;

        match self.gateway.complete(id).await {
            Ok(reminder) => {
                self.replace_local(reminder.clone());
                self.succeed();
                Ok(reminder)
            }
            Err(e) => Err(self.fail("Failed to complete reminder", e)),
        }
    }

    pub fn set_selected_date(&mut self, date: NaiveDate) {
        self.state.selected_date = date;
        self.notify();
    }

    pub fn set_selected_pet(&mut self, pet_id: Option<Uuid>) {
        self.state.selected_pet = pet_id;
        self.persist();
        self.notify();
    }

    pub fn set_selected_category(&mut self, category: Option<Category>) {
        self.state.selected_category = category;
        self.persist();
        self.notify();
    }

    pub fn clear_error(&mut self) {
        self.state.error = None;
        self.notify();
    }

    // ============================================
    // Derived views
    // ============================================

    /// The day/pet/category currently selected
    pub fn query(&self) -> ReminderQuery {
        ReminderQuery::for_date(self.state.selected_date)
            .with_pet(self.state.selected_pet)
            .with_category(self.state.selected_category)
    }

    pub fn filtered(&self) -> Vec<Reminder> {
        domain::filter_reminders(&self.state.reminders, &self.query(), &self.clock)
    }

    pub fn grouped(&self) -> GroupedReminders {
        domain::group_by_time_slot(self.filtered(), &self.clock)
    }

    pub fn stats_for(&self, date: NaiveDate) -> DayStats {
        domain::today_stats(&self.state.reminders, date, &self.clock)
    }

    pub fn today_stats(&self) -> DayStats {
        self.stats_for(self.clock.today())
    }

    pub fn today_completed_count(&self) -> usize {
        self.today_stats().completed
    }

    pub fn today_total_count(&self) -> usize {
        self.today_stats().total
    }

    pub fn best_streak(&self) -> u32 {
        domain::best_streak(&self.state.reminders)
    }

    /// Streak of one reminder, 0 if it is not loaded
    pub fn streak_of(&self, id: Uuid) -> u32 {
        self.find(id).map_or(0, |r| r.streak)
    }

    pub fn find(&self, id: Uuid) -> Option<&Reminder> {
        self.state.reminders.iter().find(|r| r.id == id)
    }

    // ============================================
    // Internals
    // ============================================

    fn ensure_known(&mut self, id: Uuid, context: &str) -> Result<(), DomainError> {
        if self.find(id).is_some() {
            return Ok(());
        }
        Err(self.fail(context, DomainError::not_found("Reminder", id)))
    }

    fn replace_local(&mut self, reminder: Reminder) {
        match self.state.reminders.iter_mut().find(|r| r.id == reminder.id) {
            Some(slot) => *slot = reminder,
            None => self.state.reminders.push(reminder),
        }
    }

    fn begin(&mut self) {
        self.state.is_loading = true;
        self.state.error = None;
        self.notify();
    }

    fn succeed(&mut self) {
        self.state.is_loading = false;
        self.state.error = None;
        self.persist();
        self.notify();
    }

    fn fail(&mut self, context: &str, error: DomainError) -> DomainError {
        tracing::warn!("{}: {}", context, error);
        self.state.is_loading = false;
        self.state.error = Some(format!("{}: {}", context, error));
        self.notify();
        error
    }

    fn persist(&self) {
        if let Some(persistence) = &self.persistence {
            if let Err(e) = persistence.save(&self.state.snapshot()) {
                tracing::warn!("Failed to save store snapshot: {}", e);
            }
        }
    }

    fn notify(&self) {
        self.notifier.send_replace(self.state.clone());
    }
}
