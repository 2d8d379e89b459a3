use std::collections::BTreeMap;

use crate::domain::{FixtureId, ScoreSubmission};
use crate::errors::ValidationError;

const SCORE1_PREFIX: &str = "score1_";
const SCORE2_PREFIX: &str = "score2_";

#[derive(Default)]
struct PendingScores {
    score1: Option<String>,
    score2: Option<String>,
}

/// Groups `score1_<fixtureId>` / `score2_<fixtureId>` form fields into one
/// submission per fixture.
///
/// Other fields are ignored. A fixture with only one half present gets a
/// blank score for the other half, which batch validation rejects.
pub fn group_score_form(fields: &[(String, String)]) -> Result<Vec<ScoreSubmission>, ValidationError> {
    let mut pending: BTreeMap<FixtureId, PendingScores> = BTreeMap::new();

    for (key, value) in fields {
        let (rest, first_half) = if let Some(rest) = key.strip_prefix(SCORE1_PREFIX) {
            (rest, true)
        } else if let Some(rest) = key.strip_prefix(SCORE2_PREFIX) {
            (rest, false)
        } else {
            log::debug!("Ignoring form field '{}'", key);
            continue;
        };

        let fixture_id: FixtureId = rest
            .parse()
            .map_err(|_| ValidationError::MalformedSubmissionKey(key.clone()))?;

        let entry = pending.entry(fixture_id).or_default();
        let slot = if first_half {
            &mut entry.score1
        } else {
            &mut entry.score2
        };
        if slot.replace(value.clone()).is_some() {
            return Err(ValidationError::DuplicateFixtureSubmission(fixture_id));
        }
    }

    Ok(pending
        .into_iter()
        .map(|(fixture_id, scores)| {
            ScoreSubmission::new(
                fixture_id,
                scores.score1.unwrap_or_default(),
                scores.score2.unwrap_or_default(),
            )
        })
        .collect())
}
