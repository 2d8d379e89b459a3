pub mod results;
pub mod server;
pub mod tournaments;

pub use results::{recompute_tournament, standings_for, submit_results};
pub use tournaments::{create_tournament, load_detail, TournamentDetail};
