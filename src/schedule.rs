use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::constants::BYE_TOKEN;

/// A (home, away) pairing within a round.
pub type Pairing = (String, String);

/// One round of pairings; every team appears at most once.
pub type Round = Vec<Pairing>;

/// Ordered rounds covering the whole competition.
pub type Schedule = Vec<Round>;

/// Options for round-robin generation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScheduleOptions {
    /// Append a mirrored second leg with home/away swapped.
    pub double_round: bool,

    /// Shuffle the team order before rotation begins.
    pub shuffle: bool,

    /// Seed for the shuffle; entropy-seeded when `None`. A fixed seed
    /// makes regeneration reproducible.
    pub seed: Option<u64>,

    /// Placeholder opponent for odd team counts. Pairings against it are
    /// dropped from the output, giving that team a bye.
    pub bye: String,
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        ScheduleOptions {
            double_round: true,
            shuffle: true,
            seed: None,
            bye: BYE_TOKEN.to_string(),
        }
    }
}

/// Generate a round-robin schedule with the circle method.
///
/// The first team stays fixed while the rest rotate one slot per round;
/// each round pairs the two ends of the list inward. Odd-indexed rounds
/// swap home and away to balance home fixtures across the leg. With an
/// odd team count a bye placeholder is appended and its pairings dropped.
///
/// # Arguments
/// * `teams` - Ordered team identifiers; duplicates are not deduplicated
/// * `opts` - Leg count, shuffle, seed, and bye token
///
/// # Returns
/// `effective_n - 1` rounds for a single leg, twice that for a double;
/// fewer than two teams yields an empty schedule.
pub fn generate_round_robin(teams: &[String], opts: &ScheduleOptions) -> Schedule {
    if teams.len() < 2 {
        return Vec::new();
    }

    let mut teams: Vec<String> = teams.to_vec();
    if opts.shuffle {
        let mut rng = match opts.seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        };
        teams.shuffle(&mut rng);
    }
    if teams.len() % 2 == 1 {
        teams.push(opts.bye.clone());
    }

    let n = teams.len();
    let half = n / 2;
    let fixed = teams[0].clone();
    let mut rot: Vec<String> = teams[1..].to_vec();

    let mut rounds: Schedule = Vec::with_capacity(n - 1);
    for r in 0..n - 1 {
        let swap = r % 2 == 1;
        let mut matches: Round = Vec::with_capacity(half);

        // Left column: fixed team plus the front of the rotation.
        // Right column: the back of the rotation, reversed inward.
        for i in 0..half {
            let a: &str = if i == 0 { &fixed } else { &rot[i - 1] };
            let b: &str = &rot[n - 2 - i];
            if a == opts.bye || b == opts.bye {
                continue;
            }
            if swap {
                matches.push((b.to_string(), a.to_string()));
            } else {
                matches.push((a.to_string(), b.to_string()));
            }
        }

        rounds.push(matches);
        rot.rotate_right(1);
    }

    if opts.double_round {
        let mirrored: Vec<Round> = rounds
            .iter()
            .map(|rnd| rnd.iter().map(|(h, a)| (a.clone(), h.clone())).collect())
            .collect();
        rounds.extend(mirrored);
    }

    rounds
}

/// A schedule entry with its round number and calendar date attached.
///
/// This flat row shape is what the storage collaborator persists as
/// fixture records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduledMatch {
    pub round: u32,
    pub date: NaiveDate,
    pub home: String,
    pub away: String,
}

/// Assign each round a date at a fixed cadence and flatten the schedule.
///
/// Round `r` (1-based) plays on `start_on + (r - 1) * interval_days`.
/// Output preserves round order, then intra-round order.
pub fn assign_dates(
    schedule: &Schedule,
    start_on: NaiveDate,
    interval_days: i64,
) -> Vec<ScheduledMatch> {
    let mut out = Vec::new();
    for (idx, rnd) in schedule.iter().enumerate() {
        let date = start_on + Duration::days(idx as i64 * interval_days);
        for (home, away) in rnd {
            out.push(ScheduledMatch {
                round: idx as u32 + 1,
                date,
                home: home.clone(),
                away: away.clone(),
            });
        }
    }
    out
}
