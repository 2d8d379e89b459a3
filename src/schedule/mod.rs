pub mod round_robin;

pub use round_robin::{fixture_count, generate_fixtures, ScheduledFixture};

pub const MIN_COMPETITORS: usize = 4;
pub const MAX_COMPETITORS: usize = 8;
