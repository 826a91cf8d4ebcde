//! Match, MatchStatus and the home/away perspective.

use crate::models::entity::VenueId;
use crate::models::group::GroupId;
use crate::models::registration::TeamRegistrationId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Lifecycle status of a match: `Scheduled` → `InProgress` → `Finished`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    InProgress,
    Finished,
}

impl MatchStatus {
    /// Ordinal position in the lifecycle: scheduled 1, in progress 2, finished 3.
    pub fn ordinal(self) -> u8 {
        match self {
            MatchStatus::Scheduled => 1,
            MatchStatus::InProgress => 2,
            MatchStatus::Finished => 3,
        }
    }

    /// Whether matches in this status feed aggregates. Scheduled matches
    /// contribute nothing, even if events were entered for them.
    pub fn counts_toward_stats(self) -> bool {
        self.ordinal() > MatchStatus::Scheduled.ordinal()
    }
}

/// Which side of a match a team registration played on.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Home,
    Away,
}

/// A fixture between two team registrations in a group. The score is never
/// stored here; it is recomputed from the match's events on every read.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    /// Human-assigned match number within the tournament.
    pub match_no: u32,
    pub group_id: GroupId,
    pub home_reg_id: TeamRegistrationId,
    pub away_reg_id: TeamRegistrationId,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub actual_start: Option<DateTime<Utc>>,
    pub actual_finish: Option<DateTime<Utc>>,
    pub status: MatchStatus,
    pub venue_id: Option<VenueId>,
}

impl Match {
    pub fn new(
        match_no: u32,
        group_id: GroupId,
        home_reg_id: TeamRegistrationId,
        away_reg_id: TeamRegistrationId,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            match_no,
            group_id,
            home_reg_id,
            away_reg_id,
            scheduled_at: None,
            actual_start: None,
            actual_finish: None,
            status: MatchStatus::Scheduled,
            venue_id: None,
        }
    }

    /// Whether the registration is one of the two participants.
    pub fn involves(&self, team_reg_id: TeamRegistrationId) -> bool {
        self.home_reg_id == team_reg_id || self.away_reg_id == team_reg_id
    }

    /// The side the registration played on, or `None` if it did not take part.
    pub fn side_of(&self, team_reg_id: TeamRegistrationId) -> Option<Side> {
        if self.home_reg_id == team_reg_id {
            Some(Side::Home)
        } else if self.away_reg_id == team_reg_id {
            Some(Side::Away)
        } else {
            None
        }
    }
}
