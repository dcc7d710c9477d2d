use chrono::{DateTime, TimeZone};
use uuid::Uuid;

use super::WorkoutStore;
use crate::dto::progress::ProgressReport;
use crate::error::Result;
use crate::models::{PersonalRecord, TimeRange};
use crate::services::{personal_records, progress};

impl WorkoutStore {
    /// Snapshot the current bests for an exercise and keep them.
    /// Earlier snapshots stay untouched.
    pub fn record_personal_records(&mut self, exercise_id: Uuid) -> Result<Vec<PersonalRecord>> {
        let exercise = self.get_exercise(exercise_id)?.clone();
        let sets = self.sets_for_exercise(exercise_id);

        let records = personal_records::personal_records_for(&exercise, &sets);
        self.personal_records.extend(records.iter().cloned());

        Ok(records)
    }

    pub fn personal_records(&self, exercise_id: Uuid) -> Vec<&PersonalRecord> {
        self.personal_records
            .iter()
            .filter(|r| r.exercise_id == exercise_id)
            .collect()
    }

    /// Progress of one exercise over `range`, with days cut in the time zone of `now`.
    pub fn progress_report<Tz: TimeZone>(
        &self,
        exercise_id: Uuid,
        range: TimeRange,
        now: &DateTime<Tz>,
    ) -> Result<ProgressReport> {
        self.get_exercise(exercise_id)?;

        let sets = self
            .sessions
            .iter()
            .flat_map(|session| session.sets.iter());

        Ok(progress::build_report(sets, exercise_id, range, now))
    }
}
