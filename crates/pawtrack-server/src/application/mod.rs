//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! the pet and reminder repositories.

mod pet_service;
mod reminder_service;

pub use pet_service::PetService;
pub use reminder_service::{DayOverview, ReminderService};
