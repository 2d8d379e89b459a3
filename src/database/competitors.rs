use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use crate::domain::{Competitor, CompetitorId, Points, TournamentId};

/// Enters `name` into a tournament, reusing the competitor record if the
/// name is already known.
pub fn register_competitor(
    conn: &Connection,
    name: &str,
    tournament_id: TournamentId,
    seed: usize,
) -> Result<Competitor> {
    let competitor_id = match find_id_by_name(conn, name)? {
        Some(id) => {
            log::debug!("Reattaching existing competitor '{}' ({})", name, id);
            id
        }
        None => insert_new_competitor(conn, name, tournament_id)?,
    };

    insert_membership(conn, tournament_id, competitor_id, seed)?;

    Ok(Competitor {
        id: competitor_id,
        name: name.to_string(),
        tournament_id,
        total_points: 0,
    })
}

fn find_id_by_name(conn: &Connection, name: &str) -> Result<Option<CompetitorId>> {
    let sql = "SELECT id FROM competitors WHERE name = ?1";

    conn.query_row(sql, params![name], |row| row.get(0))
        .optional()
        .context("Failed to query competitor by name")
}

fn insert_new_competitor(
    conn: &Connection,
    name: &str,
    tournament_id: TournamentId,
) -> Result<CompetitorId> {
    let sql = "INSERT INTO competitors (name, tournament_id) VALUES (?1, ?2) RETURNING id";

    conn.query_row(sql, params![name, tournament_id], |row| row.get(0))
        .context("Failed to insert new competitor")
}

fn insert_membership(
    conn: &Connection,
    tournament_id: TournamentId,
    competitor_id: CompetitorId,
    seed: usize,
) -> Result<()> {
    let sql = "INSERT INTO tournament_competitors (tournament_id, competitor_id, seed) VALUES (?1, ?2, ?3)";

    conn.execute(sql, params![tournament_id, competitor_id, seed as i64])
        .context("Failed to enter competitor into tournament")
        .map(|_| ())
}

fn parse_competitor_row(row: &rusqlite::Row) -> rusqlite::Result<Competitor> {
    Ok(Competitor {
        id: row.get(0)?,
        name: row.get(1)?,
        tournament_id: row.get(2)?,
        total_points: row.get(3)?,
    })
}

/// Competitors of a tournament in the order they were entered.
pub fn list_by_tournament(conn: &Connection, tournament_id: TournamentId) -> Result<Vec<Competitor>> {
    let sql = "
        SELECT c.id, c.name, tc.tournament_id, tc.total_points
        FROM tournament_competitors tc
        JOIN competitors c ON c.id = tc.competitor_id
        WHERE tc.tournament_id = ?1
        ORDER BY tc.seed
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![tournament_id], parse_competitor_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn reset_points(conn: &Connection, tournament_id: TournamentId) -> Result<usize> {
    let sql = "UPDATE tournament_competitors SET total_points = 0 WHERE tournament_id = ?1";

    conn.execute(sql, params![tournament_id])
        .context("Failed to reset competitor points")
}

pub fn add_points(
    conn: &Connection,
    tournament_id: TournamentId,
    competitor_id: CompetitorId,
    delta: Points,
) -> Result<()> {
    let sql = "UPDATE tournament_competitors SET total_points = total_points + ?3 WHERE tournament_id = ?1 AND competitor_id = ?2";

    let updated = conn
        .execute(sql, params![tournament_id, competitor_id, delta])
        .context("Failed to add competitor points")?;
    if updated == 0 {
        anyhow::bail!(
            "Competitor {} is not entered in tournament {}",
            competitor_id,
            tournament_id
        );
    }
    Ok(())
}
