use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{StandingsResponse, TournamentDetailResponse, TournamentSummary};
use crate::errors::ScorekeeperResult;
use crate::registration::TournamentRequest;
use crate::services::{self, tournaments};

use super::{with_connection, AppState, Identity};

pub async fn create_tournament(
    State(state): State<Arc<AppState>>,
    Identity(creator): Identity,
    Json(request): Json<TournamentRequest>,
) -> ScorekeeperResult<impl IntoResponse> {
    let detail = with_connection(&state, move |conn| {
        services::create_tournament(conn, &creator, &request)
    })
    .await?;

    Ok((StatusCode::CREATED, Json(TournamentDetailResponse::from(detail))))
}

pub async fn list_my_tournaments(
    State(state): State<Arc<AppState>>,
    Identity(creator): Identity,
) -> ScorekeeperResult<Json<Vec<TournamentSummary>>> {
    let owned = with_connection(&state, move |conn| tournaments::list_for_creator(conn, &creator)).await?;
    Ok(Json(owned.iter().map(TournamentSummary::from).collect()))
}

pub async fn get_tournament(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ScorekeeperResult<Json<TournamentDetailResponse>> {
    let detail = with_connection(&state, move |conn| {
        let tournament = tournaments::find_tournament(conn, id)?;
        services::load_detail(conn, tournament)
    })
    .await?;

    Ok(Json(detail.into()))
}

pub async fn get_standings(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ScorekeeperResult<Json<StandingsResponse>> {
    let standings = with_connection(&state, move |conn| services::standings_for(conn, id)).await?;
    Ok(Json(StandingsResponse {
        tournament_id: id,
        standings,
    }))
}

/// Public view of a tournament reached through its shareable link.
pub async fn join_tournament(
    State(state): State<Arc<AppState>>,
    Path(link): Path<String>,
) -> ScorekeeperResult<Json<TournamentDetailResponse>> {
    let detail = with_connection(&state, move |conn| {
        let tournament = tournaments::find_by_link(conn, &link)?;
        services::load_detail(conn, tournament)
    })
    .await?;

    Ok(Json(detail.into()))
}
