//! Single-match breakdown: per-team and per-player tallies for live input screens.

use crate::logic::match_result::EventTally;
use crate::models::{
    Match, MatchId, PersonId, PlayerRegistrationId, StatsError, TeamRegistrationId, TournamentStore,
};
use serde::{Deserialize, Serialize};

/// Both sides of one match, tallied for display.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub match_id: MatchId,
    pub home: TeamBreakdown,
    pub away: TeamBreakdown,
}

/// One side's team-level tally and per-player lines, in squad order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamBreakdown {
    pub team_reg_id: TeamRegistrationId,
    /// Events attributed to the team itself (includes player-and-team rows).
    pub tally: EventTally,
    pub players: Vec<PlayerBreakdown>,
}

/// One squad member's tally within the match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerBreakdown {
    pub player_reg_id: PlayerRegistrationId,
    pub person_id: PersonId,
    pub shirt_no: String,
    pub tally: EventTally,
}

/// Tally one match's events per team and per player, for the live input form.
pub fn compute_match_breakdown(
    store: &TournamentStore,
    match_id: MatchId,
) -> Result<MatchBreakdown, StatsError> {
    let m = store.match_by_id(match_id)?;
    Ok(MatchBreakdown {
        match_id,
        home: side_breakdown(store, m, m.home_reg_id),
        away: side_breakdown(store, m, m.away_reg_id),
    })
}

fn side_breakdown(
    store: &TournamentStore,
    m: &Match,
    team_reg_id: TeamRegistrationId,
) -> TeamBreakdown {
    let mut side = TeamBreakdown {
        team_reg_id,
        tally: EventTally::default(),
        players: store
            .player_regs_for_team(team_reg_id)
            .map(|reg| PlayerBreakdown {
                player_reg_id: reg.id,
                person_id: reg.person_id,
                shirt_no: reg.shirt_no.clone(),
                tally: EventTally::default(),
            })
            .collect(),
    };
    for ev in store.events_for_match(m.id) {
        if ev.team_reg_id == Some(team_reg_id) {
            side.tally.record(ev.kind);
        }
        if let Some(player) = ev.player_reg_id {
            if let Some(line) = side.players.iter_mut().find(|p| p.player_reg_id == player) {
                line.tally.record(ev.kind);
            }
        }
    }
    side
}
