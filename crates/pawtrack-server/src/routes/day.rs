//! Day view and statistics routes

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use pawtrack::{Category, DomainError, ReminderQuery, TimeSlot};

use super::reminder::to_responses;
use super::{api_error, ApiError};
use crate::models::{
    CalendarDay, DayViewParams, DayViewResponse, ErrorResponse, SlotSection, StatsParams,
    StatsResponse,
};
use crate::AppState;

fn parse_category(raw: Option<&str>) -> Result<Option<Category>, DomainError> {
    raw.map(str::trim)
        .filter(|c| !c.is_empty())
        .map(|c| c.parse::<Category>().map_err(DomainError::validation))
        .transpose()
}

/// Reminders of one day grouped by time slot
#[utoipa::path(
    get,
    path = "/api/reminders/day",
    params(DayViewParams),
    responses(
        (status = 200, description = "Grouped day view", body = DayViewResponse),
        (status = 400, description = "Unknown category", body = ErrorResponse)
    ),
    tag = "Day"
)]
pub async fn day_view(
    State(state): State<AppState>,
    Query(params): Query<DayViewParams>,
) -> Result<Json<DayViewResponse>, ApiError> {
    let service = &state.reminder_service;
    let category = parse_category(params.category.as_deref()).map_err(api_error)?;
    let date = params.date.unwrap_or_else(|| service.clock().today());

    let query = ReminderQuery::for_date(date)
        .with_pet(params.pet_id)
        .with_category(category);
    let overview = service.day_overview(query).await.map_err(api_error)?;

    let mut slots = Vec::with_capacity(TimeSlot::ALL.len());
    for slot in TimeSlot::ALL {
        let reminders = overview.grouped.slot(slot).to_vec();
        slots.push(SlotSection {
            slot: slot.to_string(),
            completed: overview.grouped.completed_in(slot),
            total: reminders.len(),
            reminders: to_responses(&state, reminders).await?,
        });
    }

    Ok(Json(DayViewResponse {
        date,
        pet_id: overview.query.pet_id,
        category: category.map(|c| c.to_string()),
        total: overview.grouped.len(),
        slots,
        calendar: overview
            .calendar
            .into_iter()
            .map(|(date, count)| CalendarDay { date, count })
            .collect(),
    }))
}

/// Completed/total counts of one day and the best streak
#[utoipa::path(
    get,
    path = "/api/reminders/stats",
    params(StatsParams),
    responses(
        (status = 200, description = "Daily statistics", body = StatsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Day"
)]
pub async fn stats(
    State(state): State<AppState>,
    Query(params): Query<StatsParams>,
) -> Result<Json<StatsResponse>, ApiError> {
    let service = &state.reminder_service;
    let date = params.date.unwrap_or_else(|| service.clock().today());
    let (day, best_streak) = service.stats(date).await.map_err(api_error)?;

    Ok(Json(StatsResponse {
        date,
        completed: day.completed,
        total: day.total,
        completion_rate: day.completion_rate,
        best_streak,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/reminders/day", get(day_view))
        .route("/api/reminders/stats", get(stats))
}
