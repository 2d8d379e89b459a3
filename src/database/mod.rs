pub mod competitors;
pub mod connection;
pub mod fixtures;
pub mod setup;
pub mod store;
pub mod tournaments;

pub use connection::{create_memory_pool, create_pool, get_connection, DbConn, DbPool};
pub use store::TournamentStore;
