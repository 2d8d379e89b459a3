use std::collections::HashSet;

use crate::domain::{CompetitorId, TournamentId};
use crate::errors::ValidationError;

use super::{MAX_COMPETITORS, MIN_COMPETITORS};

/// A fixture that has been scheduled but not stored yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledFixture {
    pub tournament_id: TournamentId,
    pub round: u32,
    pub competitor1_id: CompetitorId,
    pub competitor2_id: CompetitorId,
}

/// Single round-robin: one fixture per unordered pair, in input order.
///
/// For ids `[a, b, c, d]` the schedule is `a-b, a-c, a-d, b-c, b-d, c-d`.
pub fn generate_fixtures(
    competitor_ids: &[CompetitorId],
    tournament_id: TournamentId,
) -> Result<Vec<ScheduledFixture>, ValidationError> {
    check_competitors(competitor_ids)?;

    let mut fixtures = Vec::with_capacity(fixture_count(competitor_ids.len()));
    for (i, &first) in competitor_ids.iter().enumerate() {
        for (j, &second) in competitor_ids.iter().enumerate().skip(i + 1) {
            fixtures.push(ScheduledFixture {
                tournament_id,
                round: round_for_pair(i, j),
                competitor1_id: first,
                competitor2_id: second,
            });
        }
    }

    Ok(fixtures)
}

pub fn fixture_count(competitors: usize) -> usize {
    competitors * competitors.saturating_sub(1) / 2
}

fn check_competitors(competitor_ids: &[CompetitorId]) -> Result<(), ValidationError> {
    let count = competitor_ids.len();
    if !(MIN_COMPETITORS..=MAX_COMPETITORS).contains(&count) {
        return Err(ValidationError::InvalidCompetitorCount { count });
    }

    let mut seen = HashSet::with_capacity(count);
    for &id in competitor_ids {
        if !seen.insert(id) {
            return Err(ValidationError::DuplicateCompetitor(id));
        }
    }
    Ok(())
}

// Every pair plays in round 1 for now.
fn round_for_pair(_first: usize, _second: usize) -> u32 {
    1
}
