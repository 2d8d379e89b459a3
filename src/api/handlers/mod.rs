use std::sync::Arc;

use anyhow::Context;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Json, Response},
};

use crate::api::models::ErrorBody;
use crate::config::settings::AppConfig;
use rusqlite::Connection;

use crate::database::{self, DbPool};
use crate::errors::{ScorekeeperError, ScorekeeperResult};

pub mod results;
pub mod tournaments;

pub struct AppState {
    pub pool: DbPool,
    pub config: AppConfig,
}

/// The signed-in organizer, as reported by the identity proxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity(pub String);

#[async_trait]
impl FromRequestParts<Arc<AppState>> for Identity {
    type Rejection = ScorekeeperError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(state.config.auth.identity_header.as_str())
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| Identity(value.to_string()))
            .ok_or(ScorekeeperError::Unauthenticated)
    }
}

impl IntoResponse for ScorekeeperError {
    fn into_response(self) -> Response {
        let status = match &self {
            ScorekeeperError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ScorekeeperError::FixtureNotFound(_) | ScorekeeperError::TournamentNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            ScorekeeperError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ScorekeeperError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ScorekeeperError::Persistence(e) => {
                log::error!("Request failed: {:?}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let error = if status == StatusCode::INTERNAL_SERVER_ERROR {
            "Internal server error".to_string()
        } else {
            self.to_string()
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}

/// Runs blocking database work on the blocking pool with a pooled connection.
pub(crate) async fn with_connection<T, F>(state: &Arc<AppState>, work: F) -> ScorekeeperResult<T>
where
    F: FnOnce(&mut Connection) -> ScorekeeperResult<T> + Send + 'static,
    T: Send + 'static,
{
    let pool = state.pool.clone();
    tokio::task::spawn_blocking(move || -> ScorekeeperResult<T> {
        let mut conn = database::get_connection(&pool)?;
        work(&mut *conn)
    })
    .await
    .context("Database task failed")?
}

pub async fn health() -> &'static str {
    "ok"
}
