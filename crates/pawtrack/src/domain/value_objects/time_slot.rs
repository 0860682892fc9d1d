//! TimeSlot - Bucket of the day a reminder belongs to

use serde::{Deserialize, Serialize};

/// First hour that counts as afternoon
pub const AFTERNOON_START_HOUR: u32 = 12;
/// First hour that counts as evening
pub const EVENING_START_HOUR: u32 = 17;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeSlot {
    /// Display order of the day view
    pub const ALL: [TimeSlot; 4] = [
        TimeSlot::Morning,
        TimeSlot::Afternoon,
        TimeSlot::Evening,
        TimeSlot::Night,
    ];

    /// Derive a slot from a local hour (0-23).
    ///
    /// `[0,12)` is Morning, `[12,17)` Afternoon, everything later Evening.
    /// Night is never derived; it only exists when chosen explicitly.
    pub fn from_hour(hour: u32) -> Self {
        if hour < AFTERNOON_START_HOUR {
            TimeSlot::Morning
        } else if hour < EVENING_START_HOUR {
            TimeSlot::Afternoon
        } else {
            TimeSlot::Evening
        }
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeSlot::Morning => write!(f, "Morning"),
            TimeSlot::Afternoon => write!(f, "Afternoon"),
            TimeSlot::Evening => write!(f, "Evening"),
            TimeSlot::Night => write!(f, "Night"),
        }
    }
}

impl std::str::FromStr for TimeSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morning" => Ok(TimeSlot::Morning),
            "afternoon" => Ok(TimeSlot::Afternoon),
            "evening" => Ok(TimeSlot::Evening),
            "night" => Ok(TimeSlot::Night),
            _ => Err(format!("Unknown time slot: {}", s)),
        }
    }
}
