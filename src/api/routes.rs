use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    health,
    results::{submit_results, submit_results_form},
    tournaments::{create_tournament, get_standings, get_tournament, join_tournament, list_my_tournaments},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/tournaments", post(create_tournament).get(list_my_tournaments))
        .route("/api/tournaments/:id", get(get_tournament))
        .route("/api/tournaments/:id/standings", get(get_standings))
        .route("/api/tournaments/:id/results", post(submit_results))
        .route("/api/tournaments/:id/results/form", post(submit_results_form))
        .route("/api/join/:link", get(join_tournament))
        .with_state(state)
}
