//! PawTrack Domain Library
//!
//! Core domain types and interfaces for the PawTrack pet-care reminder system.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Pet, Reminder)
//!   - `value_objects/`: Immutable value types (Category, Frequency, TimeSlot, ReminderStatus)
//!   - `services/`: Day queries, time-slot grouping, completion and streaks
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `gateway`: The store's access path to the authoritative reminder list
//!
//! - **Adapters** (`adapters/`): In-memory repository implementations
//!
//! - **Store** (`store/`): Client-side state container with subscribe/notify
//!
//! # Usage
//!
//! ```rust,ignore
//! use pawtrack::{InMemoryReminderRepository, LocalGateway, ReminderStore};
//!
//! let repo = std::sync::Arc::new(InMemoryReminderRepository::new());
//! let mut store = ReminderStore::new(LocalGateway::new(repo), DayClock::utc());
//! store.fetch().await?;
//! let grouped = store.grouped();
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod store;

// Re-export commonly used types
pub use adapters::{InMemoryPetRepository, InMemoryReminderRepository, LocalGateway};
pub use domain::{
    best_streak, complete, dates_around, day_counts, filter_reminders, group_by_time_slot,
    present_or_null, today_stats, toggle, Category, DayClock, DayStats, DomainError, Frequency,
    GroupedReminders, NewPet, NewReminder, Pet, PetPatch, PetSummary, Reminder, ReminderDraft,
    ReminderPatch, ReminderQuery, ReminderStatus, TimeSlot,
};
pub use ports::{PetRepository, ReminderGateway, ReminderRepository};
pub use store::{JsonFilePersistence, PersistedState, ReminderStore, StorePersistence, StoreState};
