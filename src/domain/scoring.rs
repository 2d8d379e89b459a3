use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

use super::models::Points;

static SCHEME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)/(\d+)/(\d+)$").expect("scheme pattern is valid"));

/// Points awarded for a win, a draw and a loss, written `W/D/L`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringScheme {
    pub win_points: u32,
    pub draw_points: u32,
    pub lose_points: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    FirstWins,
    SecondWins,
    Draw,
}

impl MatchOutcome {
    pub fn from_scores(score1: u32, score2: u32) -> Self {
        match score1.cmp(&score2) {
            std::cmp::Ordering::Greater => MatchOutcome::FirstWins,
            std::cmp::Ordering::Less => MatchOutcome::SecondWins,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
        }
    }
}

impl ScoringScheme {
    pub fn new(win_points: u32, draw_points: u32, lose_points: u32) -> Self {
        Self {
            win_points,
            draw_points,
            lose_points,
        }
    }

    /// Points for (competitor1, competitor2) given the outcome.
    pub fn award(&self, outcome: MatchOutcome) -> (Points, Points) {
        let (first, second) = match outcome {
            MatchOutcome::FirstWins => (self.win_points, self.lose_points),
            MatchOutcome::SecondWins => (self.lose_points, self.win_points),
            MatchOutcome::Draw => (self.draw_points, self.draw_points),
        };
        (Points::from(first), Points::from(second))
    }
}

impl Default for ScoringScheme {
    fn default() -> Self {
        Self::new(3, 1, 0)
    }
}

impl FromStr for ScoringScheme {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let invalid = || ValidationError::InvalidScoringSchemeFormat(raw.to_string());

        let captures = SCHEME_PATTERN.captures(raw).ok_or_else(invalid)?;
        let value = |idx: usize| -> Result<u32, ValidationError> {
            captures[idx].parse().map_err(|_| invalid())
        };

        Ok(Self::new(value(1)?, value(2)?, value(3)?))
    }
}

impl fmt::Display for ScoringScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.win_points, self.draw_points, self.lose_points
        )
    }
}
