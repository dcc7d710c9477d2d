use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Exercise, WorkoutSession, WorkoutSet};

/// Completed sessions sharing one calendar month
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HistoryGroup {
    /// e.g. "March 2025"
    pub label: String,
    pub year: i32,
    pub month: u32,
    pub sessions: Vec<WorkoutSession>,
}

/// Sets of one exercise within a session, oldest first
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ExerciseSetGroup {
    pub exercise: Exercise,
    pub sets: Vec<WorkoutSet>,
}
