//! In-Memory Repository Implementations
//!
//! Each repository owns a `Vec` behind a `tokio::sync::RwLock`, so one
//! instance can sit in shared server state. Insertion order is kept.

mod pet_repository;
mod reminder_repository;

pub use pet_repository::InMemoryPetRepository;
pub use reminder_repository::InMemoryReminderRepository;
