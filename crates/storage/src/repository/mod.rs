//! In-memory snapshot of everything the application persists.
//!
//! The store stands in for the external persistence layer: it owns the entity
//! snapshots, enforces referential integrity on delete, and hands slices of them
//! to the services for computation.

mod exercise;
mod record;
mod session;

use serde::{Deserialize, Serialize};

use crate::models::{Exercise, PersonalRecord, WorkoutSession};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkoutStore {
    #[serde(default)]
    exercises: Vec<Exercise>,
    #[serde(default)]
    sessions: Vec<WorkoutSession>,
    #[serde(default)]
    personal_records: Vec<PersonalRecord>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn sessions(&self) -> &[WorkoutSession] {
        &self.sessions
    }

    pub fn all_personal_records(&self) -> &[PersonalRecord] {
        &self.personal_records
    }
}
