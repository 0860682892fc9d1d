//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Pet: An animal being cared for
//! - Reminder: A recurring care task for one pet

mod pet;
mod reminder;

pub use pet::*;
pub use reminder::*;
