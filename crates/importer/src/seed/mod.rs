mod models;
mod planner;

pub use models::ExerciseSeedEntry;
pub use planner::{SeedPlan, SkippedEntry, plan_seed, seed_store};
