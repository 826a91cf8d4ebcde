//! Statistics engine: match results, standings, careers, breakdowns and the
//! match lifecycle.

mod breakdown;
mod career;
mod lifecycle;
mod match_result;
mod standings;

pub use breakdown::{compute_match_breakdown, MatchBreakdown, PlayerBreakdown, TeamBreakdown};
pub use career::{
    compute_person_career_stats, compute_team_career_stats, PersonCareerStats, TeamCareerStats,
    FAIR_PLAY_UNPLAYED,
};
pub use lifecycle::{finish_match, record_event, start_match, Clock, SystemClock};
pub use match_result::{compute_match_result, EventTally, MatchResult};
pub use standings::{
    compute_group_standings, compute_team_group_stats, AggregateStats, RankingKey, StandingsRow,
};
