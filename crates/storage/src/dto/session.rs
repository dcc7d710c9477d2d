use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::SessionState;

/// Request to log a set against a session
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LogSetRequest {
    #[validate(range(min = 1, message = "Reps must be at least 1"))]
    pub reps: u32,
    #[validate(custom(function = "validate_non_negative"))]
    pub weight: Decimal,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub notes: String,
}

fn validate_non_negative(weight: &Decimal) -> Result<(), ValidationError> {
    if *weight < Decimal::ZERO {
        let mut error = ValidationError::new("non_negative");
        error.message = Some("Weight cannot be negative".into());
        return Err(error);
    }
    Ok(())
}

/// Derived totals for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SessionSummary {
    pub session_id: Uuid,
    pub state: SessionState,
    pub total_volume: Decimal,
    pub total_sets: usize,
    pub exercise_count: usize,
    pub duration: f64,
}
