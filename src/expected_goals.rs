use crate::constants::{BASE_GOALS, HOME_ADVANTAGE};
use crate::team::Team;

/// Calculate expected goals for a matchup.
///
/// The exponential transform keeps both means strictly positive for any
/// ratings:
///
/// ```text
/// lambda_home = base * exp((attack_home - defense_away) + home_adv)
/// lambda_away = base * exp(attack_away - defense_home)
/// ```
///
/// Home advantage enters the home side's exponent only.
///
/// # Arguments
/// * `home` - Home team strengths
/// * `away` - Away team strengths
/// * `base` - Baseline goals per team per match
/// * `home_adv` - Additive home-advantage term
///
/// # Returns
/// (lambda_home, lambda_away)
pub fn expected_goals(home: &Team, away: &Team, base: f64, home_adv: f64) -> (f64, f64) {
    let lambda_home = base * ((home.attack - away.defense) + home_adv).exp();
    let lambda_away = base * (away.attack - home.defense).exp();
    (lambda_home, lambda_away)
}

/// Expected goals with the crate's default tuning
/// (`BASE_GOALS`, `HOME_ADVANTAGE`).
pub fn expected_goals_default(home: &Team, away: &Team) -> (f64, f64) {
    expected_goals(home, away, BASE_GOALS, HOME_ADVANTAGE)
}
