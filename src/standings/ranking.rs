use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{Competitor, CompetitorId, Points};

use super::tally::StandingLine;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub position: usize,
    pub competitor_id: CompetitorId,
    pub name: String,
    pub points: Points,
    #[serde(flatten)]
    pub line: StandingLine,
}

/// Orders competitors by points, wins, score difference and then name.
///
/// Competitors level on points, wins and difference share a position
/// (1, 2, 2, 4). Points come from the stored totals.
pub fn rank(
    competitors: &[Competitor],
    lines: &BTreeMap<CompetitorId, StandingLine>,
) -> Vec<Standing> {
    let mut table: Vec<Standing> = competitors
        .iter()
        .map(|competitor| Standing {
            position: 0,
            competitor_id: competitor.id,
            name: competitor.name.clone(),
            points: competitor.total_points,
            line: lines.get(&competitor.id).copied().unwrap_or_default(),
        })
        .collect();

    table.sort_by(|a, b| compare_level(a, b).then_with(|| a.name.cmp(&b.name)));

    for idx in 0..table.len() {
        table[idx].position = if idx > 0 && compare_level(&table[idx - 1], &table[idx]).is_eq() {
            table[idx - 1].position
        } else {
            idx + 1
        };
    }

    table
}

fn compare_level(a: &Standing, b: &Standing) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.line.won.cmp(&a.line.won))
        .then_with(|| b.line.score_difference().cmp(&a.line.score_difference()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn competitor(id: i64, name: &str, points: Points) -> Competitor {
        Competitor {
            id,
            name: name.to_string(),
            tournament_id: 1,
            total_points: points,
        }
    }

    #[test]
    fn test_sorted_by_points_then_name() {
        let competitors = vec![
            competitor(1, "Dora", 1),
            competitor(2, "Bea", 3),
            competitor(3, "Ana", 1),
        ];
        let table = rank(&competitors, &BTreeMap::new());

        let names: Vec<_> = table.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Bea", "Ana", "Dora"]);
        let positions: Vec<_> = table.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![1, 2, 2]);
    }

    #[test]
    fn test_wins_break_points_tie() {
        let competitors = vec![competitor(1, "A", 3), competitor(2, "B", 3)];
        let mut lines = BTreeMap::new();
        lines.insert(1, StandingLine { played: 3, drawn: 3, points: 3, ..Default::default() });
        lines.insert(2, StandingLine { played: 1, won: 1, points: 3, scored: 1, ..Default::default() });

        let table = rank(&competitors, &lines);
        assert_eq!(table[0].name, "B");
        assert_eq!(table[0].position, 1);
        assert_eq!(table[1].position, 2);
    }

    #[test]
    fn test_competition_ranking_skips_positions() {
        let competitors = vec![
            competitor(1, "A", 6),
            competitor(2, "B", 3),
            competitor(3, "C", 3),
            competitor(4, "D", 0),
        ];
        let positions: Vec<_> = rank(&competitors, &BTreeMap::new())
            .iter()
            .map(|s| s.position)
            .collect();
        assert_eq!(positions, vec![1, 2, 2, 4]);
    }
}
