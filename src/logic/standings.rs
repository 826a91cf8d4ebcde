//! Group standings: cumulative per-team counters and the ranked table.

use crate::logic::match_result::{compute_match_result, MatchResult};
use crate::models::{GroupId, Side, StatsError, TeamRegistrationId, TournamentStore};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Cumulative counters for one team registration over a set of matches.
///
/// Additive: `Default` is the zero element and [`AggregateStats::add`] the
/// associative combine, so every wider roll-up (careers, person stats) is a
/// fold over these. Derived values (`points`, the ranking key) are methods,
/// never stored.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub matches: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_scored: u32,
    pub goals_conceded: u32,
    pub goal_difference: i32,
    pub tie_break_goals: u32,
    pub fouls: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
}

impl AggregateStats {
    /// League points: 3 per win, 1 per draw.
    pub fn points(&self) -> u32 {
        3 * self.wins + self.draws
    }

    /// Field-wise sum with another counter set.
    pub fn add(&mut self, other: &AggregateStats) {
        self.matches += other.matches;
        self.wins += other.wins;
        self.draws += other.draws;
        self.losses += other.losses;
        self.goals_scored += other.goals_scored;
        self.goals_conceded += other.goals_conceded;
        self.goal_difference += other.goal_difference;
        self.tie_break_goals += other.tie_break_goals;
        self.fouls += other.fouls;
        self.yellow_cards += other.yellow_cards;
        self.red_cards += other.red_cards;
    }

    /// Fold one match result into the counters, seen from `side`.
    pub fn absorb_match(&mut self, result: &MatchResult, side: Side) {
        let (scored, conceded, tie_break, fouls, yellow, red) = match side {
            Side::Home => (
                result.home_score,
                result.away_score,
                result.home_tie_break_score,
                result.home_fouls,
                result.home_yellow_cards,
                result.home_red_cards,
            ),
            Side::Away => (
                result.away_score,
                result.home_score,
                result.away_tie_break_score,
                result.away_fouls,
                result.away_yellow_cards,
                result.away_red_cards,
            ),
        };
        self.matches += 1;
        if scored > conceded {
            self.wins += 1;
        } else if scored == conceded {
            self.draws += 1;
        } else {
            self.losses += 1;
        }
        self.goals_scored += scored;
        self.goals_conceded += conceded;
        self.goal_difference += scored as i32 - conceded as i32;
        self.tie_break_goals += tie_break;
        self.fouls += fouls;
        self.yellow_cards += yellow;
        self.red_cards += red;
    }

    /// The composite sort value determining standings order.
    pub fn ranking_key(&self) -> RankingKey {
        RankingKey {
            points: self.points(),
            wins: self.wins,
            goal_difference: self.goal_difference,
            attack: self.goals_scored + self.tie_break_goals,
            red_cards: Reverse(self.red_cards),
            yellow_cards: Reverse(self.yellow_cards),
            fouls: Reverse(self.fouls),
        }
    }
}

/// Standings sort key. Field declaration order is the tie-break priority and
/// the derived `Ord` compares lexicographically: points, then wins, then goal
/// difference, then goals scored incl. shootout goals; discipline counters
/// break remaining ties with fewer ranking higher (hence `Reverse`).
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct RankingKey {
    pub points: u32,
    pub wins: u32,
    pub goal_difference: i32,
    pub attack: u32,
    pub red_cards: Reverse<u32>,
    pub yellow_cards: Reverse<u32>,
    pub fouls: Reverse<u32>,
}

/// One row of a group table.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub team_reg_id: TeamRegistrationId,
    pub stats: AggregateStats,
}

/// A registration's cumulative counters within one group.
///
/// Enumerates the group's matches where the registration played either side,
/// skipping matches that have not started, and folds each result in from the
/// registration's perspective.
pub fn compute_team_group_stats(
    store: &TournamentStore,
    group_id: GroupId,
    team_reg_id: TeamRegistrationId,
) -> Result<AggregateStats, StatsError> {
    store.group_by_id(group_id)?;
    store.team_reg_by_id(team_reg_id)?;
    let mut stats = AggregateStats::default();
    for m in store.matches_in_group(group_id) {
        if !m.status.counts_toward_stats() {
            continue;
        }
        let side = match m.side_of(team_reg_id) {
            Some(side) => side,
            None => continue,
        };
        let result = compute_match_result(store, m.id)?;
        stats.absorb_match(&result, side);
    }
    Ok(stats)
}

/// The group's table: every registered team's stats, ranked.
///
/// Rows are sorted descending by [`RankingKey`]. The sort is stable, so teams
/// with exactly equal keys keep their group registration order — reproducible
/// output for genuinely undecidable ties. Fails as a whole if any referenced
/// entity is missing; no row is silently dropped.
pub fn compute_group_standings(
    store: &TournamentStore,
    group_id: GroupId,
) -> Result<Vec<StandingsRow>, StatsError> {
    let member_ids = store.group_by_id(group_id)?.team_reg_ids.clone();
    let mut rows = Vec::with_capacity(member_ids.len());
    for team_reg_id in member_ids {
        let stats = compute_team_group_stats(store, group_id, team_reg_id)?;
        rows.push(StandingsRow { team_reg_id, stats });
    }
    rows.sort_by(|a, b| b.stats.ranking_key().cmp(&a.stats.ranking_key()));
    log::debug!(
        "computed standings for group {}: {} rows",
        group_id,
        rows.len()
    );
    Ok(rows)
}
