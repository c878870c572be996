pub mod statistics;
pub mod training;

// Re-export commonly used types
pub use statistics::{GameResult, GameStatistics};
pub use training::{Drill, TrainingPlan};
