pub mod models;
pub mod scoring;
pub mod submission;

pub use models::*;
pub use scoring::{MatchOutcome, ScoringScheme};
pub use submission::{ScoreBatch, ScoreSubmission, ValidatedScore};
