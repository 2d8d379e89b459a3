//! The narrow read/write surface the scheduling and standings engine uses.
//!
//! The engine only ever talks to a `TournamentStore`. The SQLite
//! implementation below goes through whatever connection it is given, so
//! calling it on a `Transaction` keeps every write inside that transaction.

use anyhow::Result;
use rusqlite::Connection;

use crate::domain::{
    Competitor, CompetitorId, Fixture, FixtureId, Points, ScoringScheme, TournamentId,
};

use super::{competitors, fixtures, tournaments};

pub trait TournamentStore {
    fn list_competitors_by_tournament(&self, tournament_id: TournamentId) -> Result<Vec<Competitor>>;

    /// Returns the existing record when `name` is already registered.
    fn create_competitor(
        &self,
        name: &str,
        tournament_id: TournamentId,
        seed: usize,
    ) -> Result<Competitor>;

    fn create_fixture(
        &self,
        round: u32,
        competitor1_id: CompetitorId,
        competitor2_id: CompetitorId,
        tournament_id: TournamentId,
    ) -> Result<Fixture>;

    fn get_fixture(&self, fixture_id: FixtureId) -> Result<Option<Fixture>>;

    fn list_fixtures_by_tournament(&self, tournament_id: TournamentId) -> Result<Vec<Fixture>>;

    fn update_fixture_score(&self, fixture_id: FixtureId, score1: u32, score2: u32) -> Result<()>;

    fn reset_competitor_points(&self, tournament_id: TournamentId) -> Result<()>;

    fn add_competitor_points(
        &self,
        tournament_id: TournamentId,
        competitor_id: CompetitorId,
        delta: Points,
    ) -> Result<()>;

    fn get_scoring_scheme(&self, tournament_id: TournamentId) -> Result<Option<ScoringScheme>>;
}

impl TournamentStore for Connection {
    fn list_competitors_by_tournament(&self, tournament_id: TournamentId) -> Result<Vec<Competitor>> {
        competitors::list_by_tournament(self, tournament_id)
    }

    fn create_competitor(
        &self,
        name: &str,
        tournament_id: TournamentId,
        seed: usize,
    ) -> Result<Competitor> {
        competitors::register_competitor(self, name, tournament_id, seed)
    }

    fn create_fixture(
        &self,
        round: u32,
        competitor1_id: CompetitorId,
        competitor2_id: CompetitorId,
        tournament_id: TournamentId,
    ) -> Result<Fixture> {
        fixtures::insert_fixture(self, round, competitor1_id, competitor2_id, tournament_id)
    }

    fn get_fixture(&self, fixture_id: FixtureId) -> Result<Option<Fixture>> {
        fixtures::find_by_id(self, fixture_id)
    }

    fn list_fixtures_by_tournament(&self, tournament_id: TournamentId) -> Result<Vec<Fixture>> {
        fixtures::list_by_tournament(self, tournament_id)
    }

    fn update_fixture_score(&self, fixture_id: FixtureId, score1: u32, score2: u32) -> Result<()> {
        fixtures::update_score(self, fixture_id, score1, score2)
    }

    fn reset_competitor_points(&self, tournament_id: TournamentId) -> Result<()> {
        competitors::reset_points(self, tournament_id).map(|_| ())
    }

    fn add_competitor_points(
        &self,
        tournament_id: TournamentId,
        competitor_id: CompetitorId,
        delta: Points,
    ) -> Result<()> {
        competitors::add_points(self, tournament_id, competitor_id, delta)
    }

    fn get_scoring_scheme(&self, tournament_id: TournamentId) -> Result<Option<ScoringScheme>> {
        tournaments::get_scoring_scheme(self, tournament_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{setup, tournaments};

    fn store_with_tournament() -> (Connection, TournamentId) {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
        setup::provision(&conn).unwrap();
        let tournament =
            tournaments::insert_tournament(&conn, "Cup", ScoringScheme::new(3, 1, 0), "org", "link-1")
                .unwrap();
        (conn, tournament.id)
    }

    #[test]
    fn test_competitors_listed_in_seed_order() {
        let (conn, tid) = store_with_tournament();
        for (seed, name) in ["Zed", "Amy", "Max"].iter().enumerate() {
            conn.create_competitor(name, tid, seed).unwrap();
        }

        let names: Vec<_> = conn
            .list_competitors_by_tournament(tid)
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Zed", "Amy", "Max"]);
    }

    #[test]
    fn test_existing_name_is_reattached() {
        let (conn, first) = store_with_tournament();
        let original = conn.create_competitor("Amy", first, 0).unwrap();

        let second =
            tournaments::insert_tournament(&conn, "League", ScoringScheme::new(2, 1, 0), "org", "link-2")
                .unwrap();
        let reused = conn.create_competitor("Amy", second.id, 0).unwrap();

        assert_eq!(original.id, reused.id);
        assert_eq!(reused.tournament_id, second.id);
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM competitors", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_points_are_tracked_per_tournament() {
        let (conn, tid) = store_with_tournament();
        let amy = conn.create_competitor("Amy", tid, 0).unwrap();

        conn.add_competitor_points(tid, amy.id, 3).unwrap();
        conn.add_competitor_points(tid, amy.id, 1).unwrap();
        assert_eq!(conn.list_competitors_by_tournament(tid).unwrap()[0].total_points, 4);

        conn.reset_competitor_points(tid).unwrap();
        assert_eq!(conn.list_competitors_by_tournament(tid).unwrap()[0].total_points, 0);
    }

    #[test]
    fn test_adding_points_outside_tournament_fails() {
        let (conn, tid) = store_with_tournament();
        assert!(conn.add_competitor_points(tid, 999, 3).is_err());
    }

    #[test]
    fn test_fixture_scores_round_trip() {
        let (conn, tid) = store_with_tournament();
        let a = conn.create_competitor("A", tid, 0).unwrap();
        let b = conn.create_competitor("B", tid, 1).unwrap();

        let fixture = conn.create_fixture(1, a.id, b.id, tid).unwrap();
        assert!(!fixture.is_played());

        conn.update_fixture_score(fixture.id, 2, 5).unwrap();
        let stored = conn.get_fixture(fixture.id).unwrap().unwrap();
        assert_eq!(stored.scores(), Some((2, 5)));
        assert!(conn.get_fixture(fixture.id + 100).unwrap().is_none());
    }

    #[test]
    fn test_self_pairing_rejected_by_schema() {
        let (conn, tid) = store_with_tournament();
        let a = conn.create_competitor("A", tid, 0).unwrap();
        assert!(conn.create_fixture(1, a.id, a.id, tid).is_err());
    }

    #[test]
    fn test_scoring_scheme_lookup() {
        let (conn, tid) = store_with_tournament();
        assert_eq!(conn.get_scoring_scheme(tid).unwrap(), Some(ScoringScheme::new(3, 1, 0)));
        assert_eq!(conn.get_scoring_scheme(tid + 1).unwrap(), None);
    }
}
