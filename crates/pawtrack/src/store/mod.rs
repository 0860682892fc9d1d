//! Reminder Store
//!
//! Client-side state container: the reminder list a view is showing, the
//! selected day/pet/category, and loading/error flags. Built once at start
//! and owned by the caller; views follow it through `subscribe()`.
//!
//! - `state`: `StoreState` and the persisted subset `PersistedState`
//! - `persistence`: snapshot hook called after every successful mutation
//! - `reminder_store`: actions and derived views

mod persistence;
mod reminder_store;
mod state;

pub use persistence::*;
pub use reminder_store::*;
pub use state::*;
