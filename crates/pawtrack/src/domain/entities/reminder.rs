//! Reminder - A recurring care task for one pet
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::value_objects::{Category, DayClock, Frequency, ReminderStatus, TimeSlot};

/// Reminder - Stored entity
///
/// `status`, `streak` and `last_completed` only change through the completion
/// engine; `last_completed` is present exactly when `status` is `Completed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: Uuid,
    pub title: String,
    pub pet_id: Uuid,
    pub category: Category,
    pub notes: Option<String>,
    pub start_date: DateTime<Utc>,
    pub frequency: Frequency,
    /// Explicitly chosen slot; derived from `start_date` when absent
    pub time_slot: Option<TimeSlot>,
    pub status: ReminderStatus,
    pub last_completed: Option<DateTime<Utc>>,
    pub streak: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Unvalidated creation payload, as entered by a user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReminderDraft {
    pub title: Option<String>,
    pub pet_id: Option<Uuid>,
    pub category: Option<Category>,
    pub notes: Option<String>,
    pub start_date: Option<String>,
    pub frequency: Option<Frequency>,
    pub time_slot: Option<TimeSlot>,
}

/// Validated creation payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReminder {
    pub title: String,
    pub pet_id: Uuid,
    pub category: Category,
    pub notes: Option<String>,
    pub start_date: DateTime<Utc>,
    pub frequency: Frequency,
    pub time_slot: Option<TimeSlot>,
}

/// Partial reminder update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReminderPatch {
    pub title: Option<String>,
    pub pet_id: Option<Uuid>,
    pub category: Option<Category>,
    pub notes: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub frequency: Option<Frequency>,
    /// `Some(None)` clears the explicit slot back to the derived one
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_slot: Option<Option<TimeSlot>>,
}

/// Tell an explicit `null` apart from an absent field
pub fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl ReminderDraft {
    /// Check required fields and parse the start date-time.
    ///
    /// Every missing field is reported in one error.
    pub fn validate(self, clock: &DayClock) -> Result<NewReminder, DomainError> {
        let title = non_blank(self.title);

        let mut missing = Vec::new();
        if title.is_none() {
            missing.push("title");
        }
        if self.pet_id.is_none() {
            missing.push("pet_id");
        }
        if self.category.is_none() {
            missing.push("category");
        }
        if non_blank(self.start_date.clone()).is_none() {
            missing.push("start_date");
        }
        if self.frequency.is_none() {
            missing.push("frequency");
        }

        match (title, self.pet_id, self.category, self.start_date, self.frequency) {
            (Some(title), Some(pet_id), Some(category), Some(start), Some(frequency))
                if missing.is_empty() =>
            {
                Ok(NewReminder {
                    title: title.trim().to_string(),
                    pet_id,
                    category,
                    notes: non_blank(self.notes),
                    start_date: clock.parse_instant(&start)?,
                    frequency,
                    time_slot: self.time_slot,
                })
            }
            _ => Err(DomainError::validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            ))),
        }
    }
}

impl NewReminder {
    /// Re-check invariants of a payload that skipped `ReminderDraft::validate`
    pub fn ensure_valid(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::validation("Title is required"));
        }
        Ok(())
    }
}

impl ReminderPatch {
    pub fn validate(&self) -> Result<(), DomainError> {
        if matches!(&self.title, Some(title) if title.trim().is_empty()) {
            return Err(DomainError::validation("Title is required"));
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Reminder {
    /// Create a fresh, pending reminder
    pub fn from_new(id: Uuid, new: NewReminder, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: new.title,
            pet_id: new.pet_id,
            category: new.category,
            notes: new.notes,
            start_date: new.start_date,
            frequency: new.frequency,
            time_slot: new.time_slot,
            status: ReminderStatus::Pending,
            last_completed: None,
            streak: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a validated patch and refresh `updated_at`
    pub fn apply_patch(&mut self, patch: ReminderPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title.trim().to_string();
        }
        if let Some(pet_id) = patch.pet_id {
            self.pet_id = pet_id;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(notes) = patch.notes {
            self.notes = non_blank(Some(notes));
        }
        if let Some(start_date) = patch.start_date {
            self.start_date = start_date;
        }
        if let Some(frequency) = patch.frequency {
            self.frequency = frequency;
        }
        if let Some(time_slot) = patch.time_slot {
            self.time_slot = time_slot;
        }
        self.touch(now);
    }

    /// Refresh `updated_at`, never moving it before `created_at`
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.created_at);
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    /// The explicit slot, or the one derived from the start hour
    pub fn effective_time_slot(&self, clock: &DayClock) -> TimeSlot {
        self.time_slot
            .unwrap_or_else(|| TimeSlot::from_hour(clock.hour_of(&self.start_date)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn draft() -> ReminderDraft {
        ReminderDraft {
            title: Some("Evening walk".to_string()),
            pet_id: Some(Uuid::new_v4()),
            category: Some(Category::Lifestyle),
            notes: Some("  ".to_string()),
            start_date: Some("2025-03-01T18:30:00Z".to_string()),
            frequency: Some(Frequency::Daily),
            time_slot: None,
        }
    }

    #[test]
    fn test_validate_accepts_complete_draft() {
        let new = draft().validate(&DayClock::utc()).unwrap();
        assert_eq!(new.title, "Evening walk");
        assert_eq!(new.notes, None);
        assert_eq!(
            new.start_date,
            Utc.with_ymd_and_hms(2025, 3, 1, 18, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_validate_lists_missing_fields() {
        let err = ReminderDraft {
            title: Some("".to_string()),
            frequency: None,
            ..draft()
        }
        .validate(&DayClock::utc())
        .unwrap_err();

        assert_eq!(
            err,
            DomainError::validation("Missing required fields: title, frequency")
        );
    }

    #[test]
    fn test_validate_rejects_bad_date() {
        let err = ReminderDraft {
            start_date: Some("not a date".to_string()),
            ..draft()
        }
        .validate(&DayClock::utc())
        .unwrap_err();

        assert!(matches!(err, DomainError::Validation(msg) if msg.starts_with("Invalid date")));
    }

    #[test]
    fn test_patch_refreshes_updated_at_only_forward() {
        let created = Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap();
        let new = draft().validate(&DayClock::utc()).unwrap();
        let mut reminder = Reminder::from_new(Uuid::new_v4(), new, created);

        reminder.apply_patch(
            ReminderPatch {
                title: Some("Long walk".to_string()),
                ..Default::default()
            },
            created - chrono::Duration::hours(1),
        );

        assert_eq!(reminder.title, "Long walk");
        assert_eq!(reminder.updated_at, created);
        assert_eq!(reminder.category, Category::Lifestyle);
    }

    #[test]
    fn test_explicit_slot_wins_over_derived() {
        let new = draft().validate(&DayClock::utc()).unwrap();
        let mut reminder = Reminder::from_new(Uuid::new_v4(), new, Utc::now());
        assert_eq!(reminder.effective_time_slot(&DayClock::utc()), TimeSlot::Evening);

        reminder.time_slot = Some(TimeSlot::Night);
        assert_eq!(reminder.effective_time_slot(&DayClock::utc()), TimeSlot::Night);
    }

    #[test]
    fn test_patch_can_clear_explicit_slot() {
        let new = draft().validate(&DayClock::utc()).unwrap();
        let created = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        let mut reminder = Reminder::from_new(Uuid::new_v4(), new, created);

        let pin: ReminderPatch = serde_json::from_str(r#"{"time_slot":"Night"}"#).unwrap();
        assert_eq!(pin.time_slot, Some(Some(TimeSlot::Night)));
        reminder.apply_patch(pin, created);
        assert_eq!(reminder.effective_time_slot(&DayClock::utc()), TimeSlot::Night);

        let untouched: ReminderPatch = serde_json::from_str(r#"{"title":"Walk"}"#).unwrap();
        assert_eq!(untouched.time_slot, None);
        reminder.apply_patch(untouched, created);
        assert_eq!(reminder.time_slot, Some(TimeSlot::Night));

        let clear: ReminderPatch = serde_json::from_str(r#"{"time_slot":null}"#).unwrap();
        assert_eq!(clear.time_slot, Some(None));
        reminder.apply_patch(clear, created);
        assert_eq!(reminder.time_slot, None);
        assert_eq!(reminder.effective_time_slot(&DayClock::utc()), TimeSlot::Evening);

        let wire = serde_json::to_value(ReminderPatch {
            time_slot: Some(None),
            ..Default::default()
        })
        .unwrap();
        assert!(wire["time_slot"].is_null());
        assert!(wire.as_object().unwrap().contains_key("time_slot"));
        let wire = serde_json::to_value(ReminderPatch::default()).unwrap();
        assert!(!wire.as_object().unwrap().contains_key("time_slot"));
    }
}
