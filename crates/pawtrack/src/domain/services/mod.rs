//! Domain Services
//!
//! Stateless logic over reminder snapshots:
//! - query: day filtering, time-slot grouping, day statistics
//! - completion: the Pending/Completed state machine and streaks

mod completion;
mod query;

pub use completion::*;
pub use query::*;
