//! PawTrack Data Models
//!
//! Request/response DTOs of the HTTP API.
//!
//! - Pet: the animals being cared for
//! - Reminder: recurring care tasks
//! - Day: grouped day view and statistics

mod day;
mod pet;
mod reminder;

pub use day::*;
pub use pet::*;
pub use reminder::*;

use serde::Serialize;
use utoipa::ToSchema;

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
