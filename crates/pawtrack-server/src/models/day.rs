//! Day view and statistics DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use super::ReminderResponse;

/// Query parameters of the day view
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DayViewParams {
    /// Calendar day (`YYYY-MM-DD`), today when omitted
    #[param(value_type = Option<String>, example = "2025-03-01")]
    pub date: Option<NaiveDate>,
    /// Only reminders of this pet
    pub pet_id: Option<Uuid>,
    /// Only reminders of this category (case-insensitive)
    pub category: Option<String>,
}

/// Query parameters of the stats endpoint
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatsParams {
    /// Calendar day (`YYYY-MM-DD`), today when omitted
    #[param(value_type = Option<String>)]
    pub date: Option<NaiveDate>,
}

/// One time-slot section of the day view
#[derive(Debug, Serialize, ToSchema)]
pub struct SlotSection {
    pub slot: String,
    pub completed: usize,
    pub total: usize,
    pub reminders: Vec<ReminderResponse>,
}

/// Reminder count of one day in the calendar strip
#[derive(Debug, Serialize, ToSchema)]
pub struct CalendarDay {
    #[schema(value_type = String)]
    pub date: NaiveDate,
    pub count: usize,
}

/// Grouped reminders of one day
#[derive(Debug, Serialize, ToSchema)]
pub struct DayViewResponse {
    #[schema(value_type = String)]
    pub date: NaiveDate,
    pub pet_id: Option<Uuid>,
    pub category: Option<String>,
    pub total: usize,
    /// Morning, Afternoon, Evening, Night; empty sections are kept
    pub slots: Vec<SlotSection>,
    pub calendar: Vec<CalendarDay>,
}

/// Counts for one day plus the best streak overall
#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    #[schema(value_type = String)]
    pub date: NaiveDate,
    pub completed: usize,
    pub total: usize,
    /// Rounded percentage, 0 when there is nothing scheduled
    pub completion_rate: u32,
    pub best_streak: u32,
}
