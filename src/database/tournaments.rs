use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use crate::domain::{ScoringScheme, Tournament, TournamentId};

const TOURNAMENT_COLUMNS: &str =
    "id, name, win_points, draw_points, lose_points, created_by, link, created_at";

pub fn insert_tournament(
    conn: &Connection,
    name: &str,
    scoring: ScoringScheme,
    created_by: &str,
    link: &str,
) -> Result<Tournament> {
    let sql = format!(
        "INSERT INTO tournaments (name, win_points, draw_points, lose_points, created_by, link) VALUES (?1, ?2, ?3, ?4, ?5, ?6) RETURNING {TOURNAMENT_COLUMNS}"
    );

    conn.query_row(
        &sql,
        params![
            name,
            scoring.win_points,
            scoring.draw_points,
            scoring.lose_points,
            created_by,
            link
        ],
        parse_tournament_row,
    )
    .context("Failed to insert new tournament")
}

fn parse_tournament_row(row: &rusqlite::Row) -> rusqlite::Result<Tournament> {
    Ok(Tournament {
        id: row.get(0)?,
        name: row.get(1)?,
        scoring: ScoringScheme::new(row.get(2)?, row.get(3)?, row.get(4)?),
        created_by: row.get(5)?,
        link: row.get(6)?,
        created_at: row.get(7)?,
    })
}

pub fn find_by_id(conn: &Connection, id: TournamentId) -> Result<Option<Tournament>> {
    let sql = format!("SELECT {TOURNAMENT_COLUMNS} FROM tournaments WHERE id = ?1");

    conn.query_row(&sql, params![id], parse_tournament_row)
        .optional()
        .context("Failed to query tournament by id")
}

pub fn find_by_name(conn: &Connection, name: &str) -> Result<Option<Tournament>> {
    let sql = format!("SELECT {TOURNAMENT_COLUMNS} FROM tournaments WHERE name = ?1");

    conn.query_row(&sql, params![name], parse_tournament_row)
        .optional()
        .context("Failed to query tournament by name")
}

pub fn find_by_link(conn: &Connection, link: &str) -> Result<Option<Tournament>> {
    let sql = format!("SELECT {TOURNAMENT_COLUMNS} FROM tournaments WHERE link = ?1");

    conn.query_row(&sql, params![link], parse_tournament_row)
        .optional()
        .context("Failed to query tournament by link")
}

pub fn list_by_creator(conn: &Connection, created_by: &str) -> Result<Vec<Tournament>> {
    let sql = format!(
        "SELECT {TOURNAMENT_COLUMNS} FROM tournaments WHERE created_by = ?1 ORDER BY id DESC"
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![created_by], parse_tournament_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn get_scoring_scheme(conn: &Connection, id: TournamentId) -> Result<Option<ScoringScheme>> {
    let sql = "SELECT win_points, draw_points, lose_points FROM tournaments WHERE id = ?1";

    conn.query_row(sql, params![id], |row| {
        Ok(ScoringScheme::new(row.get(0)?, row.get(1)?, row.get(2)?))
    })
    .optional()
    .context("Failed to load scoring scheme")
}
