pub mod ranking;
pub mod recalculator;
pub mod tally;

pub use ranking::{rank, Standing};
pub use recalculator::{
    apply_batch, rebuild_tournament, recompute_standings, resolve_affected, AffectedTournaments,
    RecomputeOutcome,
};
pub use tally::{tally, StandingLine};
