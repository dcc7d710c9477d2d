use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::WorkoutSet;
use crate::services::session_summary;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkoutSession {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    /// Seconds between the earliest and latest set, fixed when the session is finished.
    pub duration: f64,
    pub notes: String,
    pub is_completed: bool,
    pub sets: Vec<WorkoutSet>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SessionState {
    Active,
    Completed,
}

impl WorkoutSession {
    pub fn new(date: DateTime<Utc>, notes: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            duration: 0.0,
            notes: notes.into(),
            is_completed: false,
            sets: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        if self.is_completed {
            SessionState::Completed
        } else {
            SessionState::Active
        }
    }

    /// Appends a set and points it back at this session.
    pub fn add_set(&mut self, mut set: WorkoutSet) {
        set.session_id = Some(self.id);
        self.sets.push(set);
    }

    pub fn total_volume(&self) -> Decimal {
        session_summary::total_volume(&self.sets)
    }

    pub fn total_sets(&self) -> usize {
        session_summary::total_sets(&self.sets)
    }

    pub fn exercise_count(&self) -> usize {
        session_summary::exercise_count(&self.sets)
    }

    /// Returns `true` when this call moved the session to `Completed`.
    pub fn finish(&mut self) -> bool {
        session_summary::finish(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_initialization() {
        let date = Utc::now();
        let session = WorkoutSession::new(date, "");

        assert_eq!(session.date, date);
        assert_eq!(session.duration, 0.0);
        assert!(!session.is_completed);
        assert_eq!(session.notes, "");
        assert!(session.sets.is_empty());
        assert_eq!(session.state(), SessionState::Active);
    }

    #[test]
    fn test_add_set_attaches_session_reference() {
        let mut session = WorkoutSession::new(Utc::now(), "Leg day");
        session.add_set(WorkoutSet::new(5, Decimal::from(225), true, ""));

        assert_eq!(session.sets.len(), 1);
        assert_eq!(session.sets[0].session_id, Some(session.id));
    }

    #[test]
    fn test_finish_transitions_state() {
        let mut session = WorkoutSession::new(Utc::now(), "");
        assert!(session.finish());
        assert_eq!(session.state(), SessionState::Completed);
        assert!(!session.finish());
    }
}
