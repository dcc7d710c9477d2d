pub mod exercise;
pub mod history;
pub mod progress;
pub mod session;
