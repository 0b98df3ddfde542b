//! League Core - round-robin scheduling, match simulation, and standings.
//!
//! This library generates conflict-free round-robin calendars with the
//! circle method, simulates final scores from per-team strength ratings
//! (expected-goals transform + Poisson sampling), and aggregates played
//! fixtures into a ranked standings table.
//!
//! All randomized operations take an explicit seed and are bit-identical
//! for identical seeds. Storage and request serving are external
//! collaborators: the crate exchanges plain data only.

pub mod constants;
pub mod error;
pub mod expected_goals;
pub mod fixture;
pub mod poisson;
pub mod schedule;
pub mod season;
pub mod simulate;
pub mod standings;
pub mod team;

pub use constants::{BASE_GOALS, BYE_TOKEN, HOME_ADVANTAGE, RESULT_POINTS, ROUND_INTERVAL_DAYS};
pub use error::{Error, Result};
pub use expected_goals::{expected_goals, expected_goals_default};
pub use fixture::{Fixture, FixtureStatus};
pub use poisson::poisson;
pub use schedule::{
    assign_dates, generate_round_robin, Pairing, Round, Schedule, ScheduleOptions, ScheduledMatch,
};
pub use season::Season;
pub use simulate::{simulate_fixture, simulate_score};
pub use standings::{league_table, render_table, TableRow};
pub use team::Team;
