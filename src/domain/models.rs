use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::scoring::ScoringScheme;

pub type TournamentId = i64;
pub type CompetitorId = i64;
pub type FixtureId = i64;
pub type Points = i64;

/// A competitor as seen from one tournament.
///
/// `total_points` is the total inside `tournament_id`; the same name can be
/// entered in several tournaments and keeps a separate total in each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    pub id: CompetitorId,
    pub name: String,
    pub tournament_id: TournamentId,
    pub total_points: Points,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub scoring: ScoringScheme,
    pub created_by: String,
    pub link: String,
    pub created_at: Option<NaiveDateTime>,
}

/// A scheduled match. Scores stay `None` until a result is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: FixtureId,
    pub tournament_id: TournamentId,
    pub round: u32,
    pub competitor1_id: CompetitorId,
    pub competitor2_id: CompetitorId,
    pub score1: Option<u32>,
    pub score2: Option<u32>,
}

impl Fixture {
    /// Both scores, if the fixture has been played.
    pub fn scores(&self) -> Option<(u32, u32)> {
        self.score1.zip(self.score2)
    }

    pub fn is_played(&self) -> bool {
        self.scores().is_some()
    }
}
