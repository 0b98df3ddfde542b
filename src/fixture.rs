use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle of a fixture: created scheduled, played exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixtureStatus {
    Scheduled,
    Played,
}

/// One match in the season calendar.
///
/// Invariant: both goal counts are `None` iff `status == Scheduled`, both
/// `Some` iff `status == Played`. Home and away teams are distinct. The
/// only permitted mutation is `record_score`, which transitions
/// `Scheduled -> Played` and is never reverted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: u64,
    pub season: i32,
    pub round: u32,
    pub date: NaiveDate,
    pub home: String,
    pub away: String,
    pub home_goals: Option<u32>,
    pub away_goals: Option<u32>,
    pub status: FixtureStatus,
}

impl Fixture {
    /// Create a scheduled fixture with no score.
    pub fn scheduled(
        id: u64,
        season: i32,
        round: u32,
        date: NaiveDate,
        home: impl Into<String>,
        away: impl Into<String>,
    ) -> Self {
        Fixture {
            id,
            season,
            round,
            date,
            home: home.into(),
            away: away.into(),
            home_goals: None,
            away_goals: None,
            status: FixtureStatus::Scheduled,
        }
    }

    /// Fill in the final score and mark the fixture played.
    pub fn record_score(&mut self, home_goals: u32, away_goals: u32) {
        self.home_goals = Some(home_goals);
        self.away_goals = Some(away_goals);
        self.status = FixtureStatus::Played;
    }

    /// The final score, if the fixture has been played.
    pub fn score(&self) -> Option<(u32, u32)> {
        match (self.home_goals, self.away_goals) {
            (Some(h), Some(a)) => Some((h, a)),
            _ => None,
        }
    }

    pub fn is_played(&self) -> bool {
        self.status == FixtureStatus::Played
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_scheduled_has_no_score() {
        let fx = Fixture::scheduled(1, 2025, 1, date(2025, 9, 20), "A", "B");
        assert_eq!(fx.status, FixtureStatus::Scheduled);
        assert_eq!(fx.score(), None);
        assert!(!fx.is_played());
    }

    #[test]
    fn test_record_score_transitions_to_played() {
        let mut fx = Fixture::scheduled(1, 2025, 1, date(2025, 9, 20), "A", "B");
        fx.record_score(2, 1);
        assert_eq!(fx.status, FixtureStatus::Played);
        assert_eq!(fx.score(), Some((2, 1)));
    }
}
