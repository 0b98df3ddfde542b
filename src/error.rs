use thiserror::Error;

/// Errors surfaced by the league core.
///
/// All failures are local and synchronous; no partial state survives a
/// failed call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A Poisson mean below zero is outside the distribution's domain.
    #[error("invalid Poisson mean: {0} (must be >= 0)")]
    InvalidLambda(f64),

    /// A fixture referenced a team with no strength record. Callers may
    /// substitute `Team::neutral` explicitly, but never implicitly.
    #[error("no strength record for team: {0}")]
    UnknownTeam(String),

    /// A fixture marked played carried no goal counts.
    #[error("fixture {fixture} is marked played but has no score")]
    MissingScore { fixture: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;
