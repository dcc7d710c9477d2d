use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;
use validator::Validate;

use super::WorkoutStore;
use crate::dto::history::HistoryGroup;
use crate::dto::session::{LogSetRequest, SessionSummary};
use crate::error::{Result, StorageError};
use crate::models::{WorkoutSession, WorkoutSet};
use crate::services::{history, session_summary};

impl WorkoutStore {
    pub fn create_session(&mut self, date: DateTime<Utc>, notes: impl Into<String>) -> &WorkoutSession {
        self.sessions.push(WorkoutSession::new(date, notes));
        &self.sessions[self.sessions.len() - 1]
    }

    pub fn insert_session(&mut self, session: WorkoutSession) -> Result<()> {
        if self.sessions.iter().any(|s| s.id == session.id) {
            return Err(StorageError::ConstraintViolation(format!(
                "Session with id {} already exists",
                session.id
            )));
        }
        self.sessions.push(session);
        Ok(())
    }

    pub fn get_session(&self, id: Uuid) -> Result<&WorkoutSession> {
        self.sessions
            .iter()
            .find(|s| s.id == id)
            .ok_or(StorageError::NotFound)
    }

    fn get_session_mut(&mut self, id: Uuid) -> Result<&mut WorkoutSession> {
        self.sessions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(StorageError::NotFound)
    }

    /// Delete a session together with its sets. Returns the number of sets removed.
    pub fn delete_session(&mut self, id: Uuid) -> Result<usize> {
        let position = self
            .sessions
            .iter()
            .position(|s| s.id == id)
            .ok_or(StorageError::NotFound)?;
        let session = self.sessions.remove(position);
        Ok(session.sets.len())
    }

    /// Log a set for an exercise in an active session
    pub fn log_set(
        &mut self,
        session_id: Uuid,
        exercise_id: Uuid,
        request: LogSetRequest,
    ) -> Result<WorkoutSet> {
        request.validate()?;
        self.get_exercise(exercise_id)?;

        let session = self.get_session_mut(session_id)?;
        if session.is_completed {
            return Err(StorageError::ConstraintViolation(format!(
                "Session {} is already completed",
                session_id
            )));
        }

        let set = WorkoutSet::new(request.reps, request.weight, request.is_completed, request.notes)
            .for_exercise(exercise_id);
        session.add_set(set);

        Ok(session.sets[session.sets.len() - 1].clone())
    }

    /// Finish a session. Finishing twice leaves the first result in place.
    pub fn finish_session(&mut self, id: Uuid) -> Result<SessionSummary> {
        let session = self.get_session_mut(id)?;
        session_summary::finish(session);
        Ok(session_summary::summarize(session))
    }

    pub fn session_summary(&self, id: Uuid) -> Result<SessionSummary> {
        self.get_session(id).map(session_summary::summarize)
    }

    pub fn active_sessions(&self) -> Vec<&WorkoutSession> {
        session_summary::active_sessions(&self.sessions)
    }

    /// Completed sessions by month, with months cut in `tz`.
    pub fn history<Tz: TimeZone>(&self, tz: &Tz) -> Vec<HistoryGroup> {
        history::group_by_month(&self.sessions, tz)
    }
}
