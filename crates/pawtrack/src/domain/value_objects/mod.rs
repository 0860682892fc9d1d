//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod category;
mod day_clock;
mod frequency;
mod reminder_status;
mod time_slot;

pub use category::*;
pub use day_clock::*;
pub use frequency::*;
pub use reminder_status::*;
pub use time_slot::*;
