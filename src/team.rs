use serde::{Deserialize, Serialize};

/// Team with attack/defense strength ratings.
///
/// Ratings are stored relative to the league average (0.0); a higher
/// defense rating means a better defense. Ratings are immutable inputs to
/// simulation, never derived by this crate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,

    /// Attack strength relative to average (e.g. 0.2 = scores more)
    pub attack: f64,

    /// Defense strength relative to average (e.g. 0.2 = concedes less)
    pub defense: f64,
}

impl Team {
    /// Create a new team with the given ratings.
    pub fn new(name: impl Into<String>, attack: f64, defense: f64) -> Self {
        Team {
            name: name.into(),
            attack,
            defense,
        }
    }

    /// Create a team with league-average (0.0/0.0) ratings.
    ///
    /// This is the explicit substitute for a missing strength record;
    /// the simulator itself never defaults silently.
    pub fn neutral(name: impl Into<String>) -> Self {
        Team::new(name, 0.0, 0.0)
    }
}
