use axum::{
    extract::{Path, State},
    response::Json,
    Form,
};
use std::sync::Arc;

use crate::api::models::{ScoreBatchRequest, StandingsResponse};
use crate::api::parsers::scores::group_score_form;
use crate::domain::ScoreSubmission;
use crate::errors::ScorekeeperResult;
use crate::services;

use super::{with_connection, AppState, Identity};

pub async fn submit_results(
    State(state): State<Arc<AppState>>,
    Identity(actor): Identity,
    Path(id): Path<i64>,
    Json(request): Json<ScoreBatchRequest>,
) -> ScorekeeperResult<Json<StandingsResponse>> {
    store_batch(&state, actor, id, request.scores).await
}

/// Same as [`submit_results`], for `score1_<id>` / `score2_<id>` form posts.
pub async fn submit_results_form(
    State(state): State<Arc<AppState>>,
    Identity(actor): Identity,
    Path(id): Path<i64>,
    Form(fields): Form<Vec<(String, String)>>,
) -> ScorekeeperResult<Json<StandingsResponse>> {
    let scores = group_score_form(&fields)?;
    store_batch(&state, actor, id, scores).await
}

async fn store_batch(
    state: &Arc<AppState>,
    actor: String,
    tournament_id: i64,
    scores: Vec<ScoreSubmission>,
) -> ScorekeeperResult<Json<StandingsResponse>> {
    let standings = with_connection(state, move |conn| {
        services::submit_results(conn, &actor, tournament_id, &scores)
    })
    .await?;

    Ok(Json(StandingsResponse {
        tournament_id,
        standings,
    }))
}
