//! Validation of tournament creation requests.
//!
//! Everything here is pure. The duplicate tournament name rule needs the
//! store and is checked by `services::tournaments` inside the creation
//! transaction.

pub mod competitors;

use serde::Deserialize;

use crate::domain::ScoringScheme;
use crate::errors::ValidationError;
use crate::schedule::{MAX_COMPETITORS, MIN_COMPETITORS};

pub use competitors::{ensure_distinct, split_competitor_names};

/// Creation form as the organizer submits it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentRequest {
    pub name: String,
    pub competitors: String,
    pub scoring: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTournament {
    pub name: String,
    pub competitors: Vec<String>,
    pub scoring: ScoringScheme,
}

pub fn validate_request(request: &TournamentRequest) -> Result<ValidatedTournament, ValidationError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingTournamentName);
    }

    let competitors = split_competitor_names(&request.competitors);
    ensure_distinct(&competitors)?;

    let count = competitors.len();
    if !(MIN_COMPETITORS..=MAX_COMPETITORS).contains(&count) {
        return Err(ValidationError::InvalidCompetitorCount { count });
    }

    let scoring = request.scoring.parse()?;

    Ok(ValidatedTournament {
        name: name.to_string(),
        competitors,
        scoring,
    })
}
