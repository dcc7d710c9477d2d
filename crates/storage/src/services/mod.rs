pub mod exercise_stats;
pub mod history;
pub mod library;
pub mod one_rep_max;
pub mod personal_records;
pub mod progress;
pub mod session_summary;
