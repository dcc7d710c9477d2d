mod exercise;
mod personal_record;
mod time_range;
mod workout_session;
mod workout_set;

pub use exercise::{Exercise, ExerciseCategory};
pub use personal_record::{PersonalRecord, RecordType};
pub use time_range::TimeRange;
pub use workout_session::{SessionState, WorkoutSession};
pub use workout_set::WorkoutSet;
