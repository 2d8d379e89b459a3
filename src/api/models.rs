use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Competitor, Fixture, ScoreSubmission, Tournament};
use crate::services::TournamentDetail;
use crate::standings::Standing;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSummary {
    pub id: i64,
    pub name: String,
    pub scoring: String,
    pub created_by: String,
    pub link: String,
    pub created_at: Option<String>,
}

impl From<&Tournament> for TournamentSummary {
    fn from(t: &Tournament) -> Self {
        Self {
            id: t.id,
            name: t.name.clone(),
            scoring: t.scoring.to_string(),
            created_by: t.created_by.clone(),
            link: t.link.clone(),
            created_at: t.created_at.map(|d| d.to_string()),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorItem {
    pub id: i64,
    pub name: String,
    pub total_points: i64,
}

impl From<&Competitor> for CompetitorItem {
    fn from(c: &Competitor) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
            total_points: c.total_points,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureItem {
    pub id: i64,
    pub round: u32,
    pub competitor1_id: i64,
    pub competitor1_name: String,
    pub competitor2_id: i64,
    pub competitor2_name: String,
    pub score1: Option<u32>,
    pub score2: Option<u32>,
}

impl FixtureItem {
    fn new(fixture: &Fixture, names: &HashMap<i64, &str>) -> Self {
        let name_of = |id: i64| names.get(&id).map(|n| n.to_string()).unwrap_or_default();
        Self {
            id: fixture.id,
            round: fixture.round,
            competitor1_id: fixture.competitor1_id,
            competitor1_name: name_of(fixture.competitor1_id),
            competitor2_id: fixture.competitor2_id,
            competitor2_name: name_of(fixture.competitor2_id),
            score1: fixture.score1,
            score2: fixture.score2,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentDetailResponse {
    pub tournament: TournamentSummary,
    pub competitors: Vec<CompetitorItem>,
    pub fixtures: Vec<FixtureItem>,
    pub standings: Vec<Standing>,
}

impl From<TournamentDetail> for TournamentDetailResponse {
    fn from(detail: TournamentDetail) -> Self {
        let names: HashMap<i64, &str> = detail
            .competitors
            .iter()
            .map(|c| (c.id, c.name.as_str()))
            .collect();
        let fixtures = detail
            .fixtures
            .iter()
            .map(|f| FixtureItem::new(f, &names))
            .collect();

        Self {
            tournament: TournamentSummary::from(&detail.tournament),
            competitors: detail.competitors.iter().map(CompetitorItem::from).collect(),
            fixtures,
            standings: detail.standings,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsResponse {
    pub tournament_id: i64,
    pub standings: Vec<Standing>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBatchRequest {
    pub scores: Vec<ScoreSubmission>,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}
