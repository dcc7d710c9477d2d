use uuid::Uuid;
use validator::Validate;

use super::WorkoutStore;
use crate::dto::exercise::{CreateExerciseRequest, ExerciseStats};
use crate::error::{Result, StorageError};
use crate::models::{Exercise, WorkoutSet};
use crate::services::exercise_stats;

impl WorkoutStore {
    /// Validate and add a new exercise to the library
    pub fn create_exercise(&mut self, request: CreateExerciseRequest) -> Result<Exercise> {
        request.validate()?;

        let exercise = Exercise::new(
            request.name.trim(),
            request.category,
            request.notes,
            request.is_custom,
        );
        self.insert_exercise(exercise.clone())?;

        Ok(exercise)
    }

    /// Insert an already built exercise. Ids must be unique, names need not be.
    pub fn insert_exercise(&mut self, exercise: Exercise) -> Result<()> {
        if self.exercises.iter().any(|e| e.id == exercise.id) {
            return Err(StorageError::ConstraintViolation(format!(
                "Exercise with id {} already exists",
                exercise.id
            )));
        }
        self.exercises.push(exercise);
        Ok(())
    }

    pub fn has_exercises(&self) -> bool {
        !self.exercises.is_empty()
    }

    pub fn get_exercise(&self, id: Uuid) -> Result<&Exercise> {
        self.exercises
            .iter()
            .find(|e| e.id == id)
            .ok_or(StorageError::NotFound)
    }

    /// First exercise whose name matches, ignoring case
    pub fn find_exercise_by_name(&self, name: &str) -> Result<&Exercise> {
        self.exercises
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name.trim()))
            .ok_or(StorageError::NotFound)
    }

    /// List all exercises, ordered by name
    pub fn list_exercises(&self) -> Vec<&Exercise> {
        let mut exercises: Vec<_> = self.exercises.iter().collect();
        exercises.sort_by(|a, b| a.name.cmp(&b.name));
        exercises
    }

    /// Delete an exercise along with every set and personal record that references it.
    /// Returns the number of sets removed.
    pub fn delete_exercise(&mut self, id: Uuid) -> Result<usize> {
        let position = self
            .exercises
            .iter()
            .position(|e| e.id == id)
            .ok_or(StorageError::NotFound)?;
        self.exercises.remove(position);

        let mut removed = 0;
        for session in &mut self.sessions {
            let before = session.sets.len();
            session.sets.retain(|set| set.exercise_id != Some(id));
            removed += before - session.sets.len();
        }
        self.personal_records.retain(|r| r.exercise_id != id);

        Ok(removed)
    }

    /// Every set logged for the exercise, across all sessions
    pub fn sets_for_exercise(&self, exercise_id: Uuid) -> Vec<WorkoutSet> {
        self.sessions
            .iter()
            .flat_map(|session| session.sets.iter())
            .filter(|set| set.exercise_id == Some(exercise_id))
            .cloned()
            .collect()
    }

    pub fn exercise_stats(&self, exercise_id: Uuid, recent_limit: usize) -> Result<ExerciseStats> {
        self.get_exercise(exercise_id)?;
        let sets = self.sets_for_exercise(exercise_id);
        Ok(exercise_stats::compute_stats(&sets, recent_limit))
    }
}
