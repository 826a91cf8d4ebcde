//! Team and player registrations: the enrollment records statistics accumulate on.

use crate::models::entity::{PersonId, TeamId, TournamentId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team registration.
pub type TeamRegistrationId = Uuid;
/// Unique identifier for a player registration.
pub type PlayerRegistrationId = Uuid;

/// A team's enrollment in one tournament. Scoped to exactly one tournament
/// and one team; this is the unit of standings membership, not the team itself.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamRegistration {
    pub id: TeamRegistrationId,
    pub tournament_id: TournamentId,
    pub team_id: TeamId,
    pub captain_id: PersonId,
}

impl TeamRegistration {
    pub fn new(tournament_id: TournamentId, team_id: TeamId, captain_id: PersonId) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            team_id,
            captain_id,
        }
    }
}

/// A person's enrollment under one team registration, carrying a shirt number.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerRegistration {
    pub id: PlayerRegistrationId,
    pub person_id: PersonId,
    pub team_reg_id: TeamRegistrationId,
    /// Shirt numbers are free-form ("10", "10a") per the registration desk.
    pub shirt_no: String,
    pub position: Option<String>,
}

impl PlayerRegistration {
    pub fn new(
        person_id: PersonId,
        team_reg_id: TeamRegistrationId,
        shirt_no: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            person_id,
            team_reg_id,
            shirt_no: shirt_no.into(),
            position: None,
        }
    }
}
