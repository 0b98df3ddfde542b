use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::home_points;
use crate::error::{Error, Result};
use crate::fixture::Fixture;

/// One team's aggregated record, recomputed from played fixtures on every
/// query. Field names serialize to the serving layer's column set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub team: String,
    #[serde(rename = "Pld")]
    pub played: u32,
    #[serde(rename = "W")]
    pub won: u32,
    #[serde(rename = "D")]
    pub drawn: u32,
    #[serde(rename = "L")]
    pub lost: u32,
    #[serde(rename = "GF")]
    pub goals_for: u32,
    #[serde(rename = "GA")]
    pub goals_against: u32,
    #[serde(rename = "GD")]
    pub goal_difference: i64,
    #[serde(rename = "Pts")]
    pub points: u32,
}

impl TableRow {
    fn empty(team: &str) -> Self {
        TableRow {
            team: team.to_string(),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }

    fn credit(&mut self, scored: u32, conceded: u32) {
        self.played += 1;
        self.goals_for += scored;
        self.goals_against += conceded;
        self.goal_difference = self.goals_for as i64 - self.goals_against as i64;
        self.points += home_points(scored, conceded);
        if scored > conceded {
            self.won += 1;
        } else if scored == conceded {
            self.drawn += 1;
        } else {
            self.lost += 1;
        }
    }
}

/// Reduce played fixtures into a ranked standings table.
///
/// Each played fixture credits both sides with one appearance, the
/// win/draw/loss outcome, goals, and 3/1/0 points. Rows sort by points,
/// then goal difference, then goals for (all descending), then team name
/// ascending, so the order is a deterministic total order. Teams with no
/// played fixtures do not appear.
///
/// Scheduled fixtures are skipped; a fixture marked played without a
/// score is a data-integrity error.
pub fn league_table(fixtures: &[Fixture]) -> Result<Vec<TableRow>> {
    let mut rows: HashMap<String, TableRow> = HashMap::new();

    for fx in fixtures.iter().filter(|f| f.is_played()) {
        let (hg, ag) = fx
            .score()
            .ok_or(Error::MissingScore { fixture: fx.id })?;
        rows.entry(fx.home.clone())
            .or_insert_with(|| TableRow::empty(&fx.home))
            .credit(hg, ag);
        rows.entry(fx.away.clone())
            .or_insert_with(|| TableRow::empty(&fx.away))
            .credit(ag, hg);
    }

    let mut table: Vec<TableRow> = rows.into_values().collect();
    table.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.goal_difference.cmp(&a.goal_difference))
            .then(b.goals_for.cmp(&a.goals_for))
            .then(a.team.cmp(&b.team))
    });
    Ok(table)
}

/// Render a standings table as fixed-width text.
pub fn render_table(rows: &[TableRow]) -> String {
    let mut out = String::new();
    out.push_str("Team                     Pld  W  D  L  GF  GA  GD  Pts\n");
    out.push_str(&"-".repeat(62));
    out.push('\n');
    for row in rows {
        out.push_str(&format!(
            "{:22} {:>3} {:>2} {:>2} {:>2} {:>3} {:>3} {:>3} {:>4}\n",
            row.team,
            row.played,
            row.won,
            row.drawn,
            row.lost,
            row.goals_for,
            row.goals_against,
            row.goal_difference,
            row.points
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::FixtureStatus;
    use chrono::NaiveDate;

    fn played(id: u64, home: &str, away: &str, hg: u32, ag: u32) -> Fixture {
        let mut fx = Fixture::scheduled(
            id,
            2025,
            1,
            NaiveDate::from_ymd_opt(2025, 9, 20).unwrap(),
            home,
            away,
        );
        fx.record_score(hg, ag);
        fx
    }

    #[test]
    fn test_win_and_draw_accumulation() {
        let fixtures = vec![played(1, "A", "B", 2, 0), played(2, "A", "B", 1, 1)];
        let table = league_table(&fixtures).unwrap();

        assert_eq!(table.len(), 2);
        let a = &table[0];
        let b = &table[1];

        assert_eq!(a.team, "A");
        assert_eq!((a.played, a.won, a.drawn, a.lost), (2, 1, 1, 0));
        assert_eq!((a.goals_for, a.goals_against, a.goal_difference), (3, 1, 2));
        assert_eq!(a.points, 4);

        assert_eq!(b.team, "B");
        assert_eq!((b.played, b.won, b.drawn, b.lost), (2, 0, 1, 1));
        assert_eq!((b.goals_for, b.goals_against, b.goal_difference), (1, 3, -2));
        assert_eq!(b.points, 1);
    }

    #[test]
    fn test_name_breaks_full_ties() {
        // Two reversed fixtures with identical scores leave both teams
        // level on every numeric column.
        let fixtures = vec![played(1, "Zeta", "Alpha", 1, 1), played(2, "Alpha", "Zeta", 2, 2)];
        let table = league_table(&fixtures).unwrap();

        assert_eq!(table[0].points, table[1].points);
        assert_eq!(table[0].goal_difference, table[1].goal_difference);
        assert_eq!(table[0].goals_for, table[1].goals_for);
        assert_eq!(table[0].team, "Alpha");
        assert_eq!(table[1].team, "Zeta");
    }

    #[test]
    fn test_scheduled_fixtures_excluded() {
        let mut fixtures = vec![played(1, "A", "B", 1, 0)];
        fixtures.push(Fixture::scheduled(
            2,
            2025,
            2,
            NaiveDate::from_ymd_opt(2025, 9, 27).unwrap(),
            "A",
            "C",
        ));

        let table = league_table(&fixtures).unwrap();
        assert_eq!(table.len(), 2, "team C has no played fixtures");
        assert_eq!(table[0].played, 1);
    }

    #[test]
    fn test_played_without_score_is_error() {
        let mut fx = Fixture::scheduled(
            5,
            2025,
            1,
            NaiveDate::from_ymd_opt(2025, 9, 20).unwrap(),
            "A",
            "B",
        );
        fx.status = FixtureStatus::Played;

        assert_eq!(
            league_table(&[fx]),
            Err(Error::MissingScore { fixture: 5 })
        );
    }

    #[test]
    fn test_sort_by_points_then_gd_then_gf() {
        let fixtures = vec![
            // A: 3 pts, GD +3. B: 3 pts, GD +1. C: 0 pts twice.
            played(1, "A", "C", 3, 0),
            played(2, "B", "C", 1, 0),
        ];
        let table = league_table(&fixtures).unwrap();
        let order: Vec<&str> = table.iter().map(|r| r.team.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_render_has_header_and_rows() {
        let table = league_table(&[played(1, "A", "B", 2, 1)]).unwrap();
        let text = render_table(&table);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("Team"));
        assert_eq!(lines.len(), 4);
    }
}
