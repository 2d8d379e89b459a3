use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use crate::domain::{CompetitorId, Fixture, FixtureId, TournamentId};

const FIXTURE_COLUMNS: &str =
    "id, tournament_id, round, competitor1_id, competitor2_id, score1, score2";

pub fn insert_fixture(
    conn: &Connection,
    round: u32,
    competitor1_id: CompetitorId,
    competitor2_id: CompetitorId,
    tournament_id: TournamentId,
) -> Result<Fixture> {
    let sql = format!(
        "INSERT INTO fixtures (round, competitor1_id, competitor2_id, tournament_id) VALUES (?1, ?2, ?3, ?4) RETURNING {FIXTURE_COLUMNS}"
    );

    conn.query_row(
        &sql,
        params![round, competitor1_id, competitor2_id, tournament_id],
        parse_fixture_row,
    )
    .context("Failed to insert fixture")
}

fn parse_fixture_row(row: &rusqlite::Row) -> rusqlite::Result<Fixture> {
    Ok(Fixture {
        id: row.get(0)?,
        tournament_id: row.get(1)?,
        round: row.get(2)?,
        competitor1_id: row.get(3)?,
        competitor2_id: row.get(4)?,
        score1: row.get(5)?,
        score2: row.get(6)?,
    })
}

pub fn find_by_id(conn: &Connection, id: FixtureId) -> Result<Option<Fixture>> {
    let sql = format!("SELECT {FIXTURE_COLUMNS} FROM fixtures WHERE id = ?1");

    conn.query_row(&sql, params![id], parse_fixture_row)
        .optional()
        .context("Failed to query fixture by id")
}

pub fn list_by_tournament(conn: &Connection, tournament_id: TournamentId) -> Result<Vec<Fixture>> {
    let sql = format!(
        "SELECT {FIXTURE_COLUMNS} FROM fixtures WHERE tournament_id = ?1 ORDER BY round, id"
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![tournament_id], parse_fixture_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn update_score(conn: &Connection, id: FixtureId, score1: u32, score2: u32) -> Result<()> {
    let sql = "UPDATE fixtures SET score1 = ?2, score2 = ?3 WHERE id = ?1";

    let updated = conn
        .execute(sql, params![id, score1, score2])
        .context("Failed to update fixture score")?;
    if updated == 0 {
        anyhow::bail!("Fixture {} disappeared while updating its score", id);
    }
    Ok(())
}
