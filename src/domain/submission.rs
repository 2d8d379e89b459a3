use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

use super::models::FixtureId;

/// A result as typed by the organizer, before any parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSubmission {
    pub fixture_id: FixtureId,
    #[serde(default)]
    pub score1: String,
    #[serde(default)]
    pub score2: String,
}

impl ScoreSubmission {
    pub fn new(fixture_id: FixtureId, score1: impl Into<String>, score2: impl Into<String>) -> Self {
        Self {
            fixture_id,
            score1: score1.into(),
            score2: score2.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedScore {
    pub fixture_id: FixtureId,
    pub score1: u32,
    pub score2: u32,
}

/// A submission batch in which every score has already been parsed.
///
/// Scores are kept ordered by fixture id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBatch {
    scores: Vec<ValidatedScore>,
}

impl ScoreBatch {
    /// Parses the whole batch or nothing: the first bad entry rejects it.
    pub fn validate(submissions: &[ScoreSubmission]) -> Result<Self, ValidationError> {
        let mut by_fixture = BTreeMap::new();

        for submission in submissions {
            let score = ValidatedScore {
                fixture_id: submission.fixture_id,
                score1: parse_score(submission.fixture_id, &submission.score1)?,
                score2: parse_score(submission.fixture_id, &submission.score2)?,
            };
            if by_fixture.insert(score.fixture_id, score).is_some() {
                return Err(ValidationError::DuplicateFixtureSubmission(score.fixture_id));
            }
        }

        Ok(Self {
            scores: by_fixture.into_values().collect(),
        })
    }

    pub fn scores(&self) -> &[ValidatedScore] {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

fn parse_score(fixture_id: FixtureId, raw: &str) -> Result<u32, ValidationError> {
    let value = raw.trim();
    let invalid = || ValidationError::InvalidScoreFormat {
        fixture_id,
        value: raw.to_string(),
    };

    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    value.parse().map_err(|_| invalid())
}
