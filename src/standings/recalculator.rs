use std::collections::BTreeMap;

use log::{debug, info};

use crate::database::TournamentStore;
use crate::domain::{
    CompetitorId, FixtureId, Points, ScoreBatch, ScoreSubmission, TournamentId,
};
use crate::errors::{ScorekeeperError, ScorekeeperResult};

use super::tally::tally;

/// Batch fixtures grouped by the tournament that owns them.
pub type AffectedTournaments = BTreeMap<TournamentId, Vec<FixtureId>>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecomputeOutcome {
    pub totals: BTreeMap<TournamentId, BTreeMap<CompetitorId, Points>>,
}

impl RecomputeOutcome {
    pub fn tournament_ids(&self) -> impl Iterator<Item = TournamentId> + '_ {
        self.totals.keys().copied()
    }
}

/// Validates a raw batch, stores its scores and rebuilds the totals of
/// every tournament it touches.
///
/// The store should be a transaction: validation happens before any read,
/// but a storage failure part-way through leaves the rollback to the caller.
pub fn recompute_standings<S>(
    store: &S,
    submissions: &[ScoreSubmission],
) -> ScorekeeperResult<RecomputeOutcome>
where
    S: TournamentStore + ?Sized,
{
    let batch = ScoreBatch::validate(submissions)?;
    let affected = resolve_affected(store, &batch)?;
    apply_batch(store, &batch, &affected)
}

pub fn resolve_affected<S>(store: &S, batch: &ScoreBatch) -> ScorekeeperResult<AffectedTournaments>
where
    S: TournamentStore + ?Sized,
{
    let mut affected = AffectedTournaments::new();
    for score in batch.scores() {
        let fixture = store
            .get_fixture(score.fixture_id)?
            .ok_or(ScorekeeperError::FixtureNotFound(score.fixture_id))?;
        affected.entry(fixture.tournament_id).or_default().push(fixture.id);
    }
    Ok(affected)
}

pub fn apply_batch<S>(
    store: &S,
    batch: &ScoreBatch,
    affected: &AffectedTournaments,
) -> ScorekeeperResult<RecomputeOutcome>
where
    S: TournamentStore + ?Sized,
{
    for score in batch.scores() {
        store.update_fixture_score(score.fixture_id, score.score1, score.score2)?;
    }

    let mut outcome = RecomputeOutcome::default();
    for (&tournament_id, fixture_ids) in affected {
        debug!(
            "Tournament {} touched by {} submitted fixture(s)",
            tournament_id,
            fixture_ids.len()
        );
        let totals = rebuild_tournament(store, tournament_id)?;
        outcome.totals.insert(tournament_id, totals);
    }

    info!(
        "Applied {} score(s) across {} tournament(s)",
        batch.len(),
        outcome.totals.len()
    );
    Ok(outcome)
}

/// Zeroes a tournament's totals and refolds every scored fixture it has.
pub fn rebuild_tournament<S>(
    store: &S,
    tournament_id: TournamentId,
) -> ScorekeeperResult<BTreeMap<CompetitorId, Points>>
where
    S: TournamentStore + ?Sized,
{
    let scheme = store
        .get_scoring_scheme(tournament_id)?
        .ok_or_else(|| ScorekeeperError::tournament_not_found(tournament_id))?;

    store.reset_competitor_points(tournament_id)?;

    let fixtures = store.list_fixtures_by_tournament(tournament_id)?;
    let lines = tally(&scheme, &fixtures);

    let mut totals = BTreeMap::new();
    for (competitor_id, line) in lines {
        if line.points != 0 {
            store.add_competitor_points(tournament_id, competitor_id, line.points)?;
        }
        totals.insert(competitor_id, line.points);
    }

    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{setup, tournaments};
    use crate::domain::Fixture;
    use crate::errors::ValidationError;
    use rusqlite::Connection;

    struct Cup {
        conn: Connection,
        tournament_id: TournamentId,
        fixtures: Vec<Fixture>,
    }

    impl Cup {
        fn new(scheme: &str) -> Self {
            let conn = Connection::open_in_memory().unwrap();
            conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
            setup::provision(&conn).unwrap();

            let tournament = tournaments::insert_tournament(
                &conn,
                "Cup",
                scheme.parse().unwrap(),
                "org",
                "cup-link",
            )
            .unwrap();

            let ids: Vec<_> = ["A", "B", "C", "D"]
                .iter()
                .enumerate()
                .map(|(seed, name)| conn.create_competitor(name, tournament.id, seed).unwrap().id)
                .collect();
            let fixtures = crate::schedule::generate_fixtures(&ids, tournament.id)
                .unwrap()
                .into_iter()
                .map(|f| {
                    conn.create_fixture(f.round, f.competitor1_id, f.competitor2_id, f.tournament_id)
                        .unwrap()
                })
                .collect();

            Self {
                conn,
                tournament_id: tournament.id,
                fixtures,
            }
        }

        // Fixture ids for A-B and C-D in schedule order: A-B, A-C, A-D, B-C, B-D, C-D.
        fn a_b(&self) -> FixtureId {
            self.fixtures[0].id
        }

        fn c_d(&self) -> FixtureId {
            self.fixtures[5].id
        }

        fn points(&self) -> Vec<(String, Points)> {
            self.conn
                .list_competitors_by_tournament(self.tournament_id)
                .unwrap()
                .into_iter()
                .map(|c| (c.name, c.total_points))
                .collect()
        }
    }

    fn expected(values: [Points; 4]) -> Vec<(String, Points)> {
        ["A", "B", "C", "D"]
            .iter()
            .zip(values)
            .map(|(n, p)| (n.to_string(), p))
            .collect()
    }

    #[test]
    fn test_batch_applies_scheme() {
        let cup = Cup::new("3/1/0");
        let batch = [
            ScoreSubmission::new(cup.a_b(), "2", "0"),
            ScoreSubmission::new(cup.c_d(), "1", "1"),
        ];

        let outcome = recompute_standings(&cup.conn, &batch).unwrap();

        assert_eq!(cup.points(), expected([3, 0, 1, 1]));
        assert_eq!(outcome.tournament_ids().collect::<Vec<_>>(), vec![cup.tournament_id]);
    }

    #[test]
    fn test_resubmission_is_idempotent() {
        let cup = Cup::new("3/1/0");
        let batch = [
            ScoreSubmission::new(cup.a_b(), "2", "0"),
            ScoreSubmission::new(cup.c_d(), "1", "1"),
        ];

        recompute_standings(&cup.conn, &batch).unwrap();
        recompute_standings(&cup.conn, &batch).unwrap();

        assert_eq!(cup.points(), expected([3, 0, 1, 1]));
    }

    #[test]
    fn test_partial_batch_keeps_earlier_results() {
        let cup = Cup::new("3/1/0");
        recompute_standings(&cup.conn, &[ScoreSubmission::new(cup.a_b(), "2", "0")]).unwrap();
        recompute_standings(&cup.conn, &[ScoreSubmission::new(cup.c_d(), "0", "4")]).unwrap();

        assert_eq!(cup.points(), expected([3, 0, 0, 3]));
    }

    #[test]
    fn test_corrected_score_replaces_old_one() {
        let cup = Cup::new("3/1/0");
        recompute_standings(&cup.conn, &[ScoreSubmission::new(cup.a_b(), "2", "0")]).unwrap();
        recompute_standings(&cup.conn, &[ScoreSubmission::new(cup.a_b(), "0", "1")]).unwrap();

        assert_eq!(cup.points(), expected([0, 3, 0, 0]));
    }

    #[test]
    fn test_invalid_score_writes_nothing() {
        let cup = Cup::new("3/1/0");
        let batch = [
            ScoreSubmission::new(cup.a_b(), "2", "0"),
            ScoreSubmission::new(cup.c_d(), "", "1"),
        ];

        let err = recompute_standings(&cup.conn, &batch).unwrap_err();

        assert!(matches!(
            err,
            ScorekeeperError::Validation(ValidationError::InvalidScoreFormat { .. })
        ));
        assert_eq!(cup.points(), expected([0, 0, 0, 0]));
        let stored = cup.conn.get_fixture(cup.a_b()).unwrap().unwrap();
        assert!(!stored.is_played());
    }

    #[test]
    fn test_unknown_fixture_is_reported() {
        let cup = Cup::new("3/1/0");
        let err = recompute_standings(&cup.conn, &[ScoreSubmission::new(9999, "1", "0")]).unwrap_err();
        assert!(matches!(err, ScorekeeperError::FixtureNotFound(9999)));
    }

    #[test]
    fn test_custom_scheme_awards_loss_points() {
        let cup = Cup::new("2/1/1");
        recompute_standings(&cup.conn, &[ScoreSubmission::new(cup.a_b(), "3", "1")]).unwrap();
        assert_eq!(cup.points(), expected([2, 1, 0, 0]));
    }

    #[test]
    fn test_rebuild_repairs_drifted_totals() {
        let cup = Cup::new("3/1/0");
        recompute_standings(&cup.conn, &[ScoreSubmission::new(cup.a_b(), "1", "0")]).unwrap();
        let b = cup.fixtures[0].competitor2_id;
        cup.conn.add_competitor_points(cup.tournament_id, b, 40).unwrap();

        let totals = rebuild_tournament(&cup.conn, cup.tournament_id).unwrap();

        assert_eq!(cup.points(), expected([3, 0, 0, 0]));
        assert_eq!(totals[&b], 0);
    }

    #[test]
    fn test_rebuild_unknown_tournament() {
        let cup = Cup::new("3/1/0");
        let err = rebuild_tournament(&cup.conn, cup.tournament_id + 1).unwrap_err();
        assert!(matches!(err, ScorekeeperError::TournamentNotFound(_)));
    }

    #[test]
    fn test_empty_batch_touches_nothing() {
        let cup = Cup::new("3/1/0");
        let outcome = recompute_standings(&cup.conn, &[]).unwrap();
        assert!(outcome.totals.is_empty());
    }
}
