//! Store state

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Category, Reminder};

/// Everything a view can observe
#[derive(Debug, Clone, PartialEq)]
pub struct StoreState {
    pub reminders: Vec<Reminder>,
    pub selected_date: NaiveDate,
    pub selected_pet: Option<Uuid>,
    pub selected_category: Option<Category>,
    pub is_loading: bool,
    /// Last failure, for a transient notification
    pub error: Option<String>,
}

impl StoreState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            reminders: Vec::new(),
            selected_date: today,
            selected_pet: None,
            selected_category: None,
            is_loading: false,
            error: None,
        }
    }

    pub fn snapshot(&self) -> PersistedState {
        PersistedState {
            reminders: self.reminders.clone(),
            selected_pet: self.selected_pet,
            selected_category: self.selected_category,
        }
    }
}

/// What survives a restart. The selected day always starts at today.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub reminders: Vec<Reminder>,
    pub selected_pet: Option<Uuid>,
    pub selected_category: Option<Category>,
}
