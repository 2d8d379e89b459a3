use thiserror::Error;

use crate::domain::{CompetitorId, FixtureId, TournamentId};

pub type ScorekeeperResult<T> = Result<T, ScorekeeperError>;

/// Rejected input. Nothing has been written when one of these is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("A tournament needs between 4 and 8 competitors, got {count}")]
    InvalidCompetitorCount { count: usize },

    #[error("Competitor name '{0}' is listed more than once")]
    DuplicateCompetitorName(String),

    #[error("Competitor {0} appears more than once in the schedule input")]
    DuplicateCompetitor(CompetitorId),

    #[error("Scoring scheme '{0}' must look like W/D/L, e.g. 3/1/0")]
    InvalidScoringSchemeFormat(String),

    #[error("Score '{value}' for fixture {fixture_id} is not a non-negative whole number")]
    InvalidScoreFormat { fixture_id: FixtureId, value: String },

    #[error("A tournament named '{0}' already exists")]
    DuplicateTournamentName(String),

    #[error("Tournament name must not be empty")]
    MissingTournamentName,

    #[error("Fixture {0} is submitted more than once in the same batch")]
    DuplicateFixtureSubmission(FixtureId),

    #[error("Unrecognised score field '{0}'")]
    MalformedSubmissionKey(String),
}

#[derive(Debug, Error)]
pub enum ScorekeeperError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Fixture {0} not found")]
    FixtureNotFound(FixtureId),

    #[error("Tournament {0} not found")]
    TournamentNotFound(String),

    #[error("Sign in to continue")]
    Unauthenticated,

    #[error("Tournament {tournament_id} belongs to another organizer")]
    Forbidden { tournament_id: TournamentId },

    #[error("Storage failure: {0:#}")]
    Persistence(#[from] anyhow::Error),
}

impl ScorekeeperError {
    pub fn tournament_not_found(id: impl ToString) -> Self {
        ScorekeeperError::TournamentNotFound(id.to_string())
    }
}
