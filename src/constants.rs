/// Baseline goals per team per match before rating adjustments
pub const BASE_GOALS: f64 = 1.25;

/// Additive home-advantage term applied inside the exponent of the
/// home side's expected-goals transform
pub const HOME_ADVANTAGE: f64 = 0.12;

/// League points awarded per result: [win, draw, loss]
pub const RESULT_POINTS: [u32; 3] = [3, 1, 0];

/// Default number of days between consecutive rounds
pub const ROUND_INTERVAL_DAYS: i64 = 7;

/// Placeholder opponent inserted for odd team counts; never emitted
pub const BYE_TOKEN: &str = "BYE";

/// Get the points awarded for a (home_goals, away_goals) result,
/// from the home side's perspective.
pub fn home_points(home_goals: u32, away_goals: u32) -> u32 {
    if home_goals > away_goals {
        RESULT_POINTS[0]
    } else if home_goals == away_goals {
        RESULT_POINTS[1]
    } else {
        RESULT_POINTS[2]
    }
}
