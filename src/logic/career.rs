//! Career roll-ups: whole-history statistics for team registrations and
//! people, across groups and tournaments.

use crate::logic::match_result::compute_match_result;
use crate::logic::standings::AggregateStats;
use crate::models::{
    GameStage, MatchEventKind, PersonId, Side, StatsError, TeamRegistrationId, TournamentStore,
};
use serde::{Deserialize, Serialize};

/// Fair-play score of a side that never played: ranked behind every side
/// that did, instead of dividing by zero.
pub const FAIR_PLAY_UNPLAYED: f64 = 1000.0;

/// Whole-career view of one team registration: the additive counters plus
/// achievement and discipline extras that only make sense career-wide.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamCareerStats {
    pub team_reg_id: TeamRegistrationId,
    pub stats: AggregateStats,
    /// Matches with no goal conceded.
    pub clean_sheets: u32,
    /// Own goals credited against this registration.
    pub own_goals: u32,
    /// Wins in final-stage groups.
    pub titles: u32,
    /// Losses in final-stage groups.
    pub runner_ups: u32,
    /// Wins in third-place-stage groups.
    pub third_places: u32,
}

impl TeamCareerStats {
    fn zero(team_reg_id: TeamRegistrationId) -> Self {
        Self {
            team_reg_id,
            stats: AggregateStats::default(),
            clean_sheets: 0,
            own_goals: 0,
            titles: 0,
            runner_ups: 0,
            third_places: 0,
        }
    }

    /// Fouls per match played, lower is better. A registration with no
    /// played matches gets [`FAIR_PLAY_UNPLAYED`].
    pub fn fair_play_score(&self) -> f64 {
        if self.stats.matches == 0 {
            FAIR_PLAY_UNPLAYED
        } else {
            f64::from(self.stats.fouls) / f64::from(self.stats.matches)
        }
    }
}

/// A registration's counters over every match it ever played, all groups and
/// stages, plus clean sheets and stage-gated achievements.
pub fn compute_team_career_stats(
    store: &TournamentStore,
    team_reg_id: TeamRegistrationId,
) -> Result<TeamCareerStats, StatsError> {
    store.team_reg_by_id(team_reg_id)?;
    let mut career = TeamCareerStats::zero(team_reg_id);
    for m in store.matches_for_registration(team_reg_id) {
        if !m.status.counts_toward_stats() {
            continue;
        }
        let side = match m.side_of(team_reg_id) {
            Some(side) => side,
            None => continue,
        };
        let result = compute_match_result(store, m.id)?;
        career.stats.absorb_match(&result, side);

        let (conceded, won, lost) = match side {
            Side::Home => (result.away_score, result.is_home_win(), result.is_away_win()),
            Side::Away => (result.home_score, result.is_away_win(), result.is_home_win()),
        };
        if conceded == 0 {
            career.clean_sheets += 1;
        }
        let stage = store.group_by_id(m.group_id)?.stage;
        if won && stage == GameStage::Final {
            career.titles += 1;
        }
        if lost && stage == GameStage::Final {
            career.runner_ups += 1;
        }
        if won && stage == GameStage::ThirdPlace {
            career.third_places += 1;
        }
        career.own_goals += store
            .events_for_match(m.id)
            .filter(|e| e.team_reg_id == Some(team_reg_id) && e.kind == MatchEventKind::OwnGoal)
            .count() as u32;
    }
    Ok(career)
}

/// Whole-career view of one person.
///
/// Two families of counters with different sources: the personal ones
/// (`goals` through `red_cards`) count events attributed to the person's
/// player registrations; the team-delegated ones (`matches` through
/// `clean_sheets`) are the sum of the team-level careers of every
/// registration the person ever played under.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PersonCareerStats {
    pub person_id: PersonId,
    /// Tournaments entered = player registrations held.
    pub tournaments: u32,
    pub goals: u32,
    pub own_goals: u32,
    pub fouls: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub matches: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_conceded: u32,
    pub tie_break_goals: u32,
    pub clean_sheets: u32,
}

/// A person's career counters, summed over every player registration they
/// ever held.
///
/// The team-delegated side sums each underlying registration's full team
/// career: a person holding overlapping registrations is counted once per
/// registration, shared matches included. Callers rely on that definition;
/// do not dedupe here.
pub fn compute_person_career_stats(
    store: &TournamentStore,
    person_id: PersonId,
) -> Result<PersonCareerStats, StatsError> {
    store.person_by_id(person_id)?;
    let regs: Vec<_> = store.player_regs_for_person(person_id).cloned().collect();
    let mut out = PersonCareerStats {
        person_id,
        tournaments: regs.len() as u32,
        goals: 0,
        own_goals: 0,
        fouls: 0,
        yellow_cards: 0,
        red_cards: 0,
        matches: 0,
        wins: 0,
        draws: 0,
        losses: 0,
        goals_conceded: 0,
        tie_break_goals: 0,
        clean_sheets: 0,
    };

    for reg in &regs {
        let team = compute_team_career_stats(store, reg.team_reg_id)?;
        out.matches += team.stats.matches;
        out.wins += team.stats.wins;
        out.draws += team.stats.draws;
        out.losses += team.stats.losses;
        out.goals_conceded += team.stats.goals_conceded;
        out.tie_break_goals += team.stats.tie_break_goals;
        out.clean_sheets += team.clean_sheets;
    }

    for ev in store.events() {
        let attributed = match ev.player_reg_id {
            Some(player) => regs.iter().any(|r| r.id == player),
            None => false,
        };
        if !attributed {
            continue;
        }
        if !store.match_by_id(ev.match_id)?.status.counts_toward_stats() {
            continue;
        }
        match ev.kind {
            MatchEventKind::Goal => out.goals += 1,
            MatchEventKind::OwnGoal => out.own_goals += 1,
            MatchEventKind::Foul => out.fouls += 1,
            MatchEventKind::YellowCard => out.yellow_cards += 1,
            MatchEventKind::RedCard => out.red_cards += 1,
            // Shootout goals reach the person through the team delegation above.
            MatchEventKind::TieBreakPenaltyGoal => {}
        }
    }
    Ok(out)
}
