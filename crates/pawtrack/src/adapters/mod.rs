//! Adapters
//!
//! Implementations of the domain ports that need nothing outside the process.

pub mod local_gateway;
pub mod memory;

// Re-exports
pub use local_gateway::LocalGateway;
pub use memory::{InMemoryPetRepository, InMemoryReminderRepository};
