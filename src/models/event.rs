//! Match events: the append-only source every statistic is recomputed from.

use crate::models::game::MatchId;
use crate::models::registration::{PlayerRegistrationId, TeamRegistrationId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match event.
pub type MatchEventId = Uuid;

/// Closed vocabulary of recordable events. Fixed reference data.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchEventKind {
    Goal,
    OwnGoal,
    /// A goal in a penalty shootout; counted apart from regulation score.
    TieBreakPenaltyGoal,
    Foul,
    YellowCard,
    RedCard,
}

/// One logged occurrence in a match. Immutable once appended; statistics are
/// always folds over these, never stored totals.
///
/// Attribution is optional on both axes: a team-attributed event with no
/// player is valid (e.g. a bench foul), and vice versa.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchEvent {
    pub id: MatchEventId,
    pub match_id: MatchId,
    pub kind: MatchEventKind,
    pub player_reg_id: Option<PlayerRegistrationId>,
    pub team_reg_id: Option<TeamRegistrationId>,
    pub timestamp: Option<DateTime<Utc>>,
    /// Elapsed match minutes at the moment the event was recorded
    /// (0 when the match had no recorded kickoff).
    pub match_time_minutes: f64,
}

impl MatchEvent {
    pub fn new(
        match_id: MatchId,
        kind: MatchEventKind,
        player_reg_id: Option<PlayerRegistrationId>,
        team_reg_id: Option<TeamRegistrationId>,
        timestamp: Option<DateTime<Utc>>,
        match_time_minutes: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            match_id,
            kind,
            player_reg_id,
            team_reg_id,
            timestamp,
            match_time_minutes,
        }
    }
}
