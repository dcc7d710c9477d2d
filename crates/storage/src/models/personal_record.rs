use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Snapshot of a best performance for one exercise. Never updated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PersonalRecord {
    pub id: Uuid,
    pub exercise_id: Uuid,
    pub exercise_name: String,
    pub weight: Decimal,
    pub reps: u32,
    pub date: DateTime<Utc>,
    pub record_type: RecordType,
}

impl PersonalRecord {
    pub fn new(
        exercise_id: Uuid,
        exercise_name: impl Into<String>,
        weight: Decimal,
        reps: u32,
        record_type: RecordType,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            exercise_id,
            exercise_name: exercise_name.into(),
            weight,
            reps,
            date: Utc::now(),
            record_type,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum RecordType {
    #[serde(rename = "1RM")]
    OneRepMax,
    #[serde(rename = "Max Weight")]
    MaxWeight,
    #[serde(rename = "Max Volume")]
    MaxVolume,
    #[serde(rename = "Max Reps")]
    MaxReps,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneRepMax => "1RM",
            Self::MaxWeight => "Max Weight",
            Self::MaxVolume => "Max Volume",
            Self::MaxReps => "Max Reps",
        }
    }

    pub fn all() -> &'static [RecordType] {
        &[Self::OneRepMax, Self::MaxWeight, Self::MaxVolume, Self::MaxReps]
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
