use anyhow::Context;
use log::info;
use rusqlite::{Connection, TransactionBehavior};
use uuid::Uuid;

use crate::database::{tournaments, TournamentStore};
use crate::domain::{Competitor, Fixture, Tournament, TournamentId};
use crate::errors::{ScorekeeperError, ScorekeeperResult, ValidationError};
use crate::registration::{validate_request, TournamentRequest};
use crate::schedule::generate_fixtures;
use crate::standings::Standing;

use super::results::standings_for;

#[derive(Debug, Clone)]
pub struct TournamentDetail {
    pub tournament: Tournament,
    pub competitors: Vec<Competitor>,
    pub fixtures: Vec<Fixture>,
    pub standings: Vec<Standing>,
}

/// Validates the request, then stores the tournament, its competitors and
/// the full schedule in one transaction.
pub fn create_tournament(
    conn: &mut Connection,
    creator: &str,
    request: &TournamentRequest,
) -> ScorekeeperResult<TournamentDetail> {
    let validated = validate_request(request)?;

    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .context("Failed to begin tournament creation")?;

    if tournaments::find_by_name(&tx, &validated.name)?.is_some() {
        return Err(ValidationError::DuplicateTournamentName(validated.name).into());
    }

    let link = Uuid::new_v4().to_string();
    let tournament =
        tournaments::insert_tournament(&tx, &validated.name, validated.scoring, creator, &link)?;

    let competitors = validated
        .competitors
        .iter()
        .enumerate()
        .map(|(seed, name)| tx.create_competitor(name, tournament.id, seed))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let competitor_ids: Vec<_> = competitors.iter().map(|c| c.id).collect();
    let fixtures = generate_fixtures(&competitor_ids, tournament.id)?
        .into_iter()
        .map(|f| tx.create_fixture(f.round, f.competitor1_id, f.competitor2_id, f.tournament_id))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let standings = standings_for(&tx, tournament.id)?;
    tx.commit().context("Failed to commit tournament creation")?;

    info!(
        "Created tournament '{}' ({}) for {}: {} competitors, {} fixtures",
        tournament.name,
        tournament.id,
        creator,
        competitors.len(),
        fixtures.len()
    );

    Ok(TournamentDetail {
        tournament,
        competitors,
        fixtures,
        standings,
    })
}

pub fn load_detail(conn: &Connection, tournament: Tournament) -> ScorekeeperResult<TournamentDetail> {
    let competitors = conn.list_competitors_by_tournament(tournament.id)?;
    let fixtures = conn.list_fixtures_by_tournament(tournament.id)?;
    let standings = standings_for(conn, tournament.id)?;

    Ok(TournamentDetail {
        tournament,
        competitors,
        fixtures,
        standings,
    })
}

pub fn find_tournament(conn: &Connection, id: TournamentId) -> ScorekeeperResult<Tournament> {
    tournaments::find_by_id(conn, id)?.ok_or_else(|| ScorekeeperError::tournament_not_found(id))
}

pub fn find_by_link(conn: &Connection, link: &str) -> ScorekeeperResult<Tournament> {
    tournaments::find_by_link(conn, link)?.ok_or_else(|| ScorekeeperError::tournament_not_found(link))
}

pub fn list_for_creator(conn: &Connection, creator: &str) -> ScorekeeperResult<Vec<Tournament>> {
    Ok(tournaments::list_by_creator(conn, creator)?)
}
