//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with storage and with the authoritative reminder list.
//!
//! Implementations of these traits live in the adapter layers.

pub mod gateway;
pub mod repositories;

// Re-exports
pub use gateway::*;
pub use repositories::*;
