//! Reminder DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use pawtrack::{
    present_or_null, Category, DayClock, DomainError, Frequency, Reminder, ReminderDraft,
    ReminderPatch, ReminderStatus, TimeSlot,
};

use super::PetSummaryResponse;

/// Create Reminder request
///
/// Every field is optional on the wire so that all missing ones can be
/// reported together.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReminderRequest {
    pub title: Option<String>,
    pub pet_id: Option<Uuid>,
    #[schema(value_type = Option<String>, example = "Health")]
    pub category: Option<Category>,
    pub notes: Option<String>,
    /// RFC 3339, or `YYYY-MM-DDTHH:MM` read at the server's UTC offset
    #[schema(example = "2025-03-01T08:00")]
    pub start_date: Option<String>,
    #[schema(value_type = Option<String>, example = "Daily")]
    pub frequency: Option<Frequency>,
    #[schema(value_type = Option<String>, example = "Morning")]
    pub time_slot: Option<TimeSlot>,
}

impl From<CreateReminderRequest> for ReminderDraft {
    fn from(req: CreateReminderRequest) -> Self {
        ReminderDraft {
            title: req.title,
            pet_id: req.pet_id,
            category: req.category,
            notes: req.notes,
            start_date: req.start_date,
            frequency: req.frequency,
            time_slot: req.time_slot,
        }
    }
}

/// Update Reminder request (absent fields are left unchanged)
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateReminderRequest {
    pub title: Option<String>,
    pub pet_id: Option<Uuid>,
    #[schema(value_type = Option<String>)]
    pub category: Option<Category>,
    pub notes: Option<String>,
    pub start_date: Option<String>,
    #[schema(value_type = Option<String>)]
    pub frequency: Option<Frequency>,
    /// `null` drops the explicit slot so it is derived from `start_date` again
    #[serde(default, deserialize_with = "present_or_null")]
    #[schema(value_type = Option<String>, nullable)]
    pub time_slot: Option<Option<TimeSlot>>,
}

impl UpdateReminderRequest {
    /// Parse the start date (if any) and build the domain patch
    pub fn into_patch(self, clock: &DayClock) -> Result<ReminderPatch, DomainError> {
        let start_date = self
            .start_date
            .map(|raw| clock.parse_instant(&raw))
            .transpose()?;

        Ok(ReminderPatch {
            title: self.title,
            pet_id: self.pet_id,
            category: self.category,
            notes: self.notes,
            start_date,
            frequency: self.frequency,
            time_slot: self.time_slot,
        })
    }
}

/// Reminder response
#[derive(Debug, Serialize, ToSchema)]
pub struct ReminderResponse {
    pub id: Uuid,
    pub title: String,
    pub pet_id: Uuid,
    pub pet: Option<PetSummaryResponse>,
    #[schema(value_type = String)]
    pub category: Category,
    pub notes: Option<String>,
    pub start_date: DateTime<Utc>,
    #[schema(value_type = String)]
    pub frequency: Frequency,
    #[schema(value_type = Option<String>)]
    pub time_slot: Option<TimeSlot>,
    /// Explicit slot, or the one derived from the start hour
    #[schema(value_type = String)]
    pub effective_time_slot: TimeSlot,
    #[schema(value_type = String)]
    pub status: ReminderStatus,
    pub last_completed: Option<DateTime<Utc>>,
    pub streak: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ReminderResponse {
    pub fn new(reminder: Reminder, pet: Option<PetSummaryResponse>, clock: &DayClock) -> Self {
        let effective_time_slot = reminder.effective_time_slot(clock);
        ReminderResponse {
            id: reminder.id,
            title: reminder.title,
            pet_id: reminder.pet_id,
            pet,
            category: reminder.category,
            notes: reminder.notes,
            start_date: reminder.start_date,
            frequency: reminder.frequency,
            time_slot: reminder.time_slot,
            effective_time_slot,
            status: reminder.status,
            last_completed: reminder.last_completed,
            streak: reminder.streak,
            created_at: reminder.created_at,
            updated_at: reminder.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_parses_start_date() {
        let clock = DayClock::from_offset_minutes(120).unwrap();
        let patch = UpdateReminderRequest {
            start_date: Some("2025-03-01T10:00".to_string()),
            ..Default::default()
        }
        .into_patch(&clock)
        .unwrap();

        assert_eq!(
            patch.start_date.map(|d| d.to_rfc3339()),
            Some("2025-03-01T08:00:00+00:00".to_string())
        );
        assert!(patch.title.is_none());
    }

    #[test]
    fn test_update_request_rejects_bad_date() {
        let result = UpdateReminderRequest {
            start_date: Some("tomorrow-ish".to_string()),
            ..Default::default()
        }
        .into_patch(&DayClock::utc());

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_update_request_null_slot_clears_it() {
        let keep: UpdateReminderRequest = serde_json::from_str(r#"{"title":"Walk"}"#).unwrap();
        let clear: UpdateReminderRequest = serde_json::from_str(r#"{"time_slot":null}"#).unwrap();
        let pin: UpdateReminderRequest =
            serde_json::from_str(r#"{"time_slot":"Afternoon"}"#).unwrap();

        let clock = DayClock::utc();
        assert_eq!(keep.into_patch(&clock).unwrap().time_slot, None);
        assert_eq!(clear.into_patch(&clock).unwrap().time_slot, Some(None));
        assert_eq!(
            pin.into_patch(&clock).unwrap().time_slot,
            Some(Some(TimeSlot::Afternoon))
        );
    }
}
