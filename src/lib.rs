//! Tournament statistics engine: derives match results, group standings and
//! career statistics from an append-only log of match events.
//!
//! Nothing derived is ever stored; every read recomputes from the event log,
//! so retroactive corrections are picked up by simply asking again.

pub mod logic;
pub mod models;

pub use logic::{
    compute_group_standings, compute_match_breakdown, compute_match_result,
    compute_person_career_stats, compute_team_career_stats, compute_team_group_stats, finish_match,
    record_event, start_match, AggregateStats, Clock, EventTally, MatchBreakdown, MatchResult,
    PersonCareerStats, PlayerBreakdown, RankingKey, StandingsRow, SystemClock, TeamBreakdown,
    TeamCareerStats, FAIR_PLAY_UNPLAYED,
};
pub use models::{
    Competition, CompetitionId, GameStage, Group, GroupId, Match, MatchEvent, MatchEventId,
    MatchEventKind, MatchId, MatchStatus, Person, PersonId, PlayerRegistration,
    PlayerRegistrationId, Season, SeasonId, Side, StatsError, Team, TeamId, TeamRegistration,
    TeamRegistrationId, Tournament, TournamentId, TournamentStore, Venue, VenueId,
};
