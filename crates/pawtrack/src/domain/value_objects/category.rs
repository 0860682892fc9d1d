//! Category - What kind of care a reminder is about

use serde::{Deserialize, Serialize};

/// Reminder category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    General,
    Lifestyle,
    Health,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::General, Category::Lifestyle, Category::Health];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::General => write!(f, "General"),
            Category::Lifestyle => write!(f, "Lifestyle"),
            Category::Health => write!(f, "Health"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "general" => Ok(Category::General),
            "lifestyle" => Ok(Category::Lifestyle),
            "health" => Ok(Category::Health),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}
