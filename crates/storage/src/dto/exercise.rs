use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::models::{ExerciseCategory, WorkoutSet};

/// Request to add an exercise to the library
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateExerciseRequest {
    #[validate(
        length(min = 1, max = 100, message = "Exercise name cannot be empty"),
        custom(function = "validate_not_blank")
    )]
    pub name: String,
    pub category: ExerciseCategory,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub notes: String,
    #[serde(default = "default_is_custom")]
    pub is_custom: bool,
}

fn validate_not_blank(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("Exercise name cannot be empty".into());
        return Err(error);
    }
    Ok(())
}

fn default_is_custom() -> bool {
    true
}

/// Lifetime statistics for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExerciseStats {
    pub max_weight: Decimal,
    pub total_reps: u64,
    pub total_volume: Decimal,
    pub total_sets: usize,
    /// Most recent sets first
    pub recent_sets: Vec<WorkoutSet>,
}
