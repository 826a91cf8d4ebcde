//! Match result derivation: score, tie-break score and discipline tallies
//! recomputed from a match's events on every call.

use crate::models::{MatchEventKind, MatchId, StatsError, TournamentStore};
use serde::{Deserialize, Serialize};

/// Raw per-party event counts. Additive; `Default` is the zero tally.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct EventTally {
    pub goals: u32,
    pub own_goals: u32,
    pub tie_break_goals: u32,
    pub fouls: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
}

impl EventTally {
    /// Count one event of the given kind.
    pub fn record(&mut self, kind: MatchEventKind) {
        match kind {
            MatchEventKind::Goal => self.goals += 1,
            MatchEventKind::OwnGoal => self.own_goals += 1,
            MatchEventKind::TieBreakPenaltyGoal => self.tie_break_goals += 1,
            MatchEventKind::Foul => self.fouls += 1,
            MatchEventKind::YellowCard => self.yellow_cards += 1,
            MatchEventKind::RedCard => self.red_cards += 1,
        }
    }
}

/// One match's derived result.
///
/// A side's score is its own goals plus the opponent's own goals; the
/// tie-break score counts only the side's own shootout goals. The outcome
/// accessors classify on regulation score alone, so a shootout never turns
/// a drawn match into a win at this level (see the tie-break accessors for
/// knockout display).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_id: MatchId,
    pub home_score: u32,
    pub away_score: u32,
    pub home_tie_break_score: u32,
    pub away_tie_break_score: u32,
    pub home_fouls: u32,
    pub away_fouls: u32,
    pub home_yellow_cards: u32,
    pub away_yellow_cards: u32,
    pub home_red_cards: u32,
    pub away_red_cards: u32,
}

impl MatchResult {
    pub fn is_draw(&self) -> bool {
        self.home_score == self.away_score
    }

    pub fn is_home_win(&self) -> bool {
        self.home_score > self.away_score
    }

    pub fn is_away_win(&self) -> bool {
        self.home_score < self.away_score
    }

    /// Shootout winner, for displaying drawn knockout matches.
    pub fn is_home_tie_break_win(&self) -> bool {
        self.home_tie_break_score > self.away_tie_break_score
    }

    pub fn is_away_tie_break_win(&self) -> bool {
        self.home_tie_break_score < self.away_tie_break_score
    }
}

/// Compute a match's result from its event log.
///
/// A match with no events yields an all-zero 0-0 draw. Events attributed to
/// a team that is not a participant are rejected rather than miscounted;
/// events with no team attribution (player-only rows) do not feed the
/// team-level result.
pub fn compute_match_result(
    store: &TournamentStore,
    match_id: MatchId,
) -> Result<MatchResult, StatsError> {
    let m = store.match_by_id(match_id)?;
    let mut home = EventTally::default();
    let mut away = EventTally::default();
    for ev in store.events_for_match(match_id) {
        let team = match ev.team_reg_id {
            Some(team) => team,
            None => continue,
        };
        if team == m.home_reg_id {
            home.record(ev.kind);
        } else if team == m.away_reg_id {
            away.record(ev.kind);
        } else {
            return Err(StatsError::InconsistentReference(
                "event team is not a participant of the match".into(),
            ));
        }
    }
    Ok(MatchResult {
        match_id,
        home_score: home.goals + away.own_goals,
        away_score: away.goals + home.own_goals,
        home_tie_break_score: home.tie_break_goals,
        away_tie_break_score: away.tie_break_goals,
        home_fouls: home.fouls,
        away_fouls: away.fouls,
        home_yellow_cards: home.yellow_cards,
        away_yellow_cards: away.yellow_cards,
        home_red_cards: home.red_cards,
        away_red_cards: away.red_cards,
    })
}
