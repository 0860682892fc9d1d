//! ReminderStatus - The two completion states

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
pub enum ReminderStatus {
    #[default]
    Pending,
    Completed,
}

impl ReminderStatus {
    pub fn is_completed(self) -> bool {
        self == ReminderStatus::Completed
    }
}

impl std::fmt::Display for ReminderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReminderStatus::Pending => write!(f, "Pending"),
            ReminderStatus::Completed => write!(f, "Completed"),
        }
    }
}
