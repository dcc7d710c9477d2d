use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A single logged set.
///
/// The exercise and session references are plain identifiers. They are resolved
/// through the store when needed and may be absent on a set that has not been
/// attached yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WorkoutSet {
    pub id: Uuid,
    pub reps: u32,
    pub weight: Decimal,
    pub is_completed: bool,
    pub timestamp: DateTime<Utc>,
    pub notes: String,
    pub exercise_id: Option<Uuid>,
    pub session_id: Option<Uuid>,
}

impl WorkoutSet {
    pub fn new(reps: u32, weight: Decimal, is_completed: bool, notes: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            reps,
            weight,
            is_completed,
            timestamp: Utc::now(),
            notes: notes.into(),
            exercise_id: None,
            session_id: None,
        }
    }

    pub fn for_exercise(mut self, exercise_id: Uuid) -> Self {
        self.exercise_id = Some(exercise_id);
        self
    }

    /// Overrides the logging time, used when backfilling earlier sets.
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// weight × reps
    pub fn volume(&self) -> Decimal {
        self.weight * Decimal::from(self.reps)
    }
}
