//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    // Day models
    CalendarDay,
    // Pet models
    CreatePetRequest,
    // Reminder models
    CreateReminderRequest,
    DayViewResponse,
    ErrorResponse,
    PetResponse,
    PetSummaryResponse,
    ReminderResponse,
    SlotSection,
    StatsResponse,
    UpdatePetRequest,
    UpdateReminderRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Pet endpoints
        super::pet::list_pets,
        super::pet::create_pet,
        super::pet::get_pet,
        super::pet::update_pet,
        super::pet::delete_pet,
        // Reminder endpoints
        super::reminder::list_reminders,
        super::reminder::list_pet_reminders,
        super::reminder::create_reminder,
        super::reminder::get_reminder,
        super::reminder::update_reminder,
        super::reminder::delete_reminder,
        super::reminder::complete_reminder,
        super::reminder::toggle_reminder,
        // Day endpoints
        super::day::day_view,
        super::day::stats,
    ),
    info(
        title = "PawTrack API",
        version = "0.1.0",
        description = "PawTrack - Pet-care reminders grouped by day and time slot, with completion streaks.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Pet", description = "Pet - The animals being cared for"),
        (name = "Reminder", description = "Reminder - Recurring care tasks and their completion"),
        (name = "Day", description = "Day - Grouped day view and statistics"),
    ),
    components(
        schemas(
            // Pet
            CreatePetRequest,
            UpdatePetRequest,
            PetResponse,
            PetSummaryResponse,
            // Reminder
            CreateReminderRequest,
            UpdateReminderRequest,
            ReminderResponse,
            // Day
            SlotSection,
            CalendarDay,
            DayViewResponse,
            StatsResponse,
            // Errors
            ErrorResponse,
        )
    ),
)]
pub struct ApiDoc;
