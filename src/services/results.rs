use std::collections::BTreeMap;

use anyhow::Context;
use log::{info, warn};
use rusqlite::{Connection, TransactionBehavior};

use crate::database::{tournaments, TournamentStore};
use crate::domain::{CompetitorId, Points, ScoreBatch, ScoreSubmission, Tournament, TournamentId};
use crate::errors::{ScorekeeperError, ScorekeeperResult};
use crate::standings::{self, rank, tally, Standing};

/// Stores a batch of results for one tournament and returns the new table.
///
/// Only the tournament's creator may submit. The tournament and owner are
/// checked first, then the batch is validated and its fixtures resolved, all
/// before the first write. Reset and reapply run inside a single IMMEDIATE
/// transaction so concurrent batches serialize.
pub fn submit_results(
    conn: &mut Connection,
    actor: &str,
    tournament_id: TournamentId,
    submissions: &[ScoreSubmission],
) -> ScorekeeperResult<Vec<Standing>> {
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .context("Failed to begin result submission")?;

    let tournament = tournaments::find_by_id(&tx, tournament_id)?
        .ok_or_else(|| ScorekeeperError::tournament_not_found(tournament_id))?;
    authorize(&tournament, actor)?;

    let batch = ScoreBatch::validate(submissions)?;

    let affected = standings::resolve_affected(&*tx, &batch)?;
    if let Some(foreign) = affected
        .iter()
        .filter(|(owner, _)| **owner != tournament_id)
        .find_map(|(_, fixture_ids)| fixture_ids.first())
    {
        return Err(ScorekeeperError::FixtureNotFound(*foreign));
    }

    standings::apply_batch(&*tx, &batch, &affected)?;
    tx.commit().context("Failed to commit result submission")?;

    info!(
        "{} submitted {} result(s) for tournament {}",
        actor,
        batch.len(),
        tournament_id
    );
    standings_for(conn, tournament_id)
}

/// Rebuilds one tournament's totals from the scores already stored.
pub fn recompute_tournament(
    conn: &mut Connection,
    tournament_id: TournamentId,
) -> ScorekeeperResult<BTreeMap<CompetitorId, Points>> {
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .context("Failed to begin recomputation")?;
    let totals = standings::rebuild_tournament(&*tx, tournament_id)?;
    tx.commit().context("Failed to commit recomputation")?;
    Ok(totals)
}

pub fn standings_for(conn: &Connection, tournament_id: TournamentId) -> ScorekeeperResult<Vec<Standing>> {
    let scheme = conn
        .get_scoring_scheme(tournament_id)?
        .ok_or_else(|| ScorekeeperError::tournament_not_found(tournament_id))?;
    let competitors = conn.list_competitors_by_tournament(tournament_id)?;
    let fixtures = conn.list_fixtures_by_tournament(tournament_id)?;

    let lines = tally(&scheme, &fixtures);
    for competitor in &competitors {
        let folded = lines.get(&competitor.id).map_or(0, |line| line.points);
        if folded != competitor.total_points {
            warn!(
                "Stored total {} for competitor {} in tournament {} differs from scores ({})",
                competitor.total_points, competitor.id, tournament_id, folded
            );
        }
    }

    Ok(rank(&competitors, &lines))
}

fn authorize(tournament: &Tournament, actor: &str) -> ScorekeeperResult<()> {
    if tournament.created_by == actor {
        Ok(())
    } else {
        warn!(
            "{} tried to submit results for tournament {} owned by {}",
            actor, tournament.id, tournament.created_by
        );
        Err(ScorekeeperError::Forbidden {
            tournament_id: tournament.id,
        })
    }
}
