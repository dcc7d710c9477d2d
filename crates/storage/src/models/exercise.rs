use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::StorageError;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    pub category: ExerciseCategory,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub is_custom: bool,
}

impl Exercise {
    pub fn new(
        name: impl Into<String>,
        category: ExerciseCategory,
        notes: impl Into<String>,
        is_custom: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
            notes: notes.into(),
            created_at: Utc::now(),
            is_custom,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum ExerciseCategory {
    Chest,
    Back,
    Legs,
    Shoulders,
    Arms,
    Core,
    Cardio,
    Other,
}

impl ExerciseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chest => "Chest",
            Self::Back => "Back",
            Self::Legs => "Legs",
            Self::Shoulders => "Shoulders",
            Self::Arms => "Arms",
            Self::Core => "Core",
            Self::Cardio => "Cardio",
            Self::Other => "Other",
        }
    }

    pub fn all() -> &'static [ExerciseCategory] {
        &[
            Self::Chest,
            Self::Back,
            Self::Legs,
            Self::Shoulders,
            Self::Arms,
            Self::Core,
            Self::Cardio,
            Self::Other,
        ]
    }

    /// Category names are matched exactly, the same way stored seed lists spell them.
    fn parse_str(s: &str) -> Result<Self, StorageError> {
        Self::all()
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| {
                StorageError::InvalidValue(format!(
                    "Unknown exercise category: '{}'. Available: {}",
                    s,
                    Self::all()
                        .iter()
                        .map(|c| c.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }
}

impl TryFrom<&str> for ExerciseCategory {
    type Error = StorageError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse_str(value)
    }
}

impl std::str::FromStr for ExerciseCategory {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for ExerciseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
