//! Reference entities surrounding the tournament structure: competitions,
//! seasons, tournaments, teams, people and venues.
//!
//! Only the fields the aggregation engine reads are modeled; contact data,
//! photos and the like live in the excluded administration layer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a competition.
pub type CompetitionId = Uuid;
/// Unique identifier for a season.
pub type SeasonId = Uuid;
/// Unique identifier for a tournament.
pub type TournamentId = Uuid;
/// Unique identifier for a team.
pub type TeamId = Uuid;
/// Unique identifier for a person.
pub type PersonId = Uuid;
/// Unique identifier for a venue.
pub type VenueId = Uuid;

/// A competition (e.g. a city cup) that tournaments are editions of.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Competition {
    pub id: CompetitionId,
    pub name: String,
}

impl Competition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

/// A season grouping tournament editions in time.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Season {
    pub id: SeasonId,
    pub name: String,
}

impl Season {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

/// One edition of a competition within a season. Teams enroll in tournaments
/// (see `TeamRegistration`), and groups and matches are scoped to one.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    /// Short display name (e.g. for score lines).
    pub short: String,
    pub competition_id: CompetitionId,
    pub season_id: SeasonId,
}

impl Tournament {
    pub fn new(
        name: impl Into<String>,
        short: impl Into<String>,
        competition_id: CompetitionId,
        season_id: SeasonId,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            short: short.into(),
            competition_id,
            season_id,
        }
    }
}

/// A team, independent of any tournament. Standings never accumulate here
/// directly; they accumulate on the team's registration in a tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub short: String,
}

impl Team {
    pub fn new(name: impl Into<String>, short: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            short: short.into(),
        }
    }
}

/// A person: player, captain or official.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub short: String,
}

impl Person {
    pub fn new(name: impl Into<String>, short: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            short: short.into(),
        }
    }
}

/// Where a match is played.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
}

impl Venue {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}
