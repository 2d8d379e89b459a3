use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{CompetitorId, Fixture, MatchOutcome, Points, ScoringScheme};

/// Aggregated record of one competitor across the scored fixtures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingLine {
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub scored: u64,
    pub conceded: u64,
    #[serde(skip)]
    pub points: Points,
}

impl StandingLine {
    pub fn score_difference(&self) -> i64 {
        self.scored as i64 - self.conceded as i64
    }

    fn record(&mut self, own: u32, other: u32, points: Points) {
        self.played += 1;
        self.scored += u64::from(own);
        self.conceded += u64::from(other);
        self.points += points;
        match own.cmp(&other) {
            std::cmp::Ordering::Greater => self.won += 1,
            std::cmp::Ordering::Less => self.lost += 1,
            std::cmp::Ordering::Equal => self.drawn += 1,
        }
    }
}

/// Folds every scored fixture into per-competitor lines.
///
/// Unplayed fixtures still register both competitors with an empty line.
/// The result depends only on the set of fixtures, not their order.
pub fn tally(scheme: &ScoringScheme, fixtures: &[Fixture]) -> BTreeMap<CompetitorId, StandingLine> {
    let mut lines: BTreeMap<CompetitorId, StandingLine> = BTreeMap::new();

    for fixture in fixtures {
        lines.entry(fixture.competitor1_id).or_default();
        lines.entry(fixture.competitor2_id).or_default();

        let Some((score1, score2)) = fixture.scores() else {
            continue;
        };
        let (points1, points2) = scheme.award(MatchOutcome::from_scores(score1, score2));

        if let Some(line) = lines.get_mut(&fixture.competitor1_id) {
            line.record(score1, score2, points1);
        }
        if let Some(line) = lines.get_mut(&fixture.competitor2_id) {
            line.record(score2, score1, points2);
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(id: i64, c1: i64, c2: i64, scores: Option<(u32, u32)>) -> Fixture {
        Fixture {
            id,
            tournament_id: 1,
            round: 1,
            competitor1_id: c1,
            competitor2_id: c2,
            score1: scores.map(|s| s.0),
            score2: scores.map(|s| s.1),
        }
    }

    #[test]
    fn test_win_and_draw_points() {
        let scheme = ScoringScheme::new(3, 1, 0);
        let lines = tally(
            &scheme,
            &[
                fixture(1, 10, 20, Some((3, 1))),
                fixture(2, 30, 40, Some((2, 2))),
            ],
        );

        assert_eq!(lines[&10].points, 3);
        assert_eq!(lines[&20].points, 0);
        assert_eq!(lines[&30].points, 1);
        assert_eq!(lines[&40].points, 1);
        assert_eq!(lines[&10].won, 1);
        assert_eq!(lines[&20].lost, 1);
        assert_eq!(lines[&30].drawn, 1);
    }

    #[test]
    fn test_unplayed_fixtures_count_nothing() {
        let lines = tally(&ScoringScheme::default(), &[fixture(1, 1, 2, None)]);
        assert_eq!(lines[&1], StandingLine::default());
        assert_eq!(lines[&2], StandingLine::default());
    }

    #[test]
    fn test_loss_points_and_goal_difference() {
        let scheme = ScoringScheme::new(2, 1, 1);
        let lines = tally(
            &scheme,
            &[
                fixture(1, 1, 2, Some((0, 4))),
                fixture(2, 1, 3, Some((5, 1))),
            ],
        );

        assert_eq!(lines[&1].points, 3);
        assert_eq!(lines[&1].played, 2);
        assert_eq!(lines[&1].score_difference(), 0);
        assert_eq!(lines[&2].points, 2);
        assert_eq!(lines[&3].points, 1);
    }

    #[test]
    fn test_order_independent() {
        let scheme = ScoringScheme::new(3, 1, 0);
        let mut fixtures = vec![
            fixture(1, 1, 2, Some((1, 0))),
            fixture(2, 1, 3, Some((1, 1))),
            fixture(3, 2, 3, Some((0, 2))),
        ];
        let forward = tally(&scheme, &fixtures);
        fixtures.reverse();
        assert_eq!(forward, tally(&scheme, &fixtures));
    }
}
