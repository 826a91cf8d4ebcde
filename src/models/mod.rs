//! Data structures for the tournament: entities, registrations, matches,
//! events and the in-memory store.

mod entity;
mod event;
mod game;
mod group;
mod registration;
mod store;

pub use entity::{
    Competition, CompetitionId, Person, PersonId, Season, SeasonId, Team, TeamId, Tournament,
    TournamentId, Venue, VenueId,
};
pub use event::{MatchEvent, MatchEventId, MatchEventKind};
pub use game::{Match, MatchId, MatchStatus, Side};
pub use group::{GameStage, Group, GroupId};
pub use registration::{
    PlayerRegistration, PlayerRegistrationId, TeamRegistration, TeamRegistrationId,
};
pub use store::{StatsError, TournamentStore};
