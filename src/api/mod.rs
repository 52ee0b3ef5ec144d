pub mod client;
pub mod queries;
pub mod types;

pub use client::StatsClient;
pub use types::{Difficulty, DifficultyBucket, UserStats};
