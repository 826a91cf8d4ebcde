//! In-memory entity store: lookup and filter collections plus the
//! append-only event log.
//!
//! This is the engine's view of persistence. Collections are plain `Vec`s in
//! insertion order, which keeps every derived statistic reproducible: group
//! membership order is the standings tie fallback, and event order is append
//! order. Reads hand out shared references; the only mutations are inserts,
//! event appends and the match lifecycle transitions in `logic::lifecycle`.

use crate::models::entity::{
    Competition, CompetitionId, Person, PersonId, Season, SeasonId, Team, TeamId, Tournament,
    TournamentId, Venue, VenueId,
};
use crate::models::event::{MatchEvent, MatchEventId, MatchEventKind};
use crate::models::game::{Match, MatchId, MatchStatus};
use crate::models::group::{GameStage, Group, GroupId};
use crate::models::registration::{
    PlayerRegistration, PlayerRegistrationId, TeamRegistration, TeamRegistrationId,
};
use chrono::{DateTime, Utc};

/// Errors surfaced by the store and the statistics engine.
#[derive(Clone, Debug, PartialEq)]
pub enum StatsError {
    TournamentNotFound(TournamentId),
    GroupNotFound(GroupId),
    MatchNotFound(MatchId),
    TeamNotFound(TeamId),
    PersonNotFound(PersonId),
    VenueNotFound(VenueId),
    TeamRegistrationNotFound(TeamRegistrationId),
    PlayerRegistrationNotFound(PlayerRegistrationId),
    /// The registration is already a member of the group.
    AlreadyInGroup(TeamRegistrationId),
    /// Lifecycle action attempted from a status that does not allow it.
    InvalidTransition {
        status: MatchStatus,
        action: &'static str,
    },
    /// A reference points outside the match's participants or the group's tournament.
    InconsistentReference(String),
}

impl std::fmt::Display for StatsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsError::TournamentNotFound(_) => write!(f, "Tournament not found"),
            StatsError::GroupNotFound(_) => write!(f, "Group not found"),
            StatsError::MatchNotFound(_) => write!(f, "Match not found"),
            StatsError::TeamNotFound(_) => write!(f, "Team not found"),
            StatsError::PersonNotFound(_) => write!(f, "Person not found"),
            StatsError::VenueNotFound(_) => write!(f, "Venue not found"),
            StatsError::TeamRegistrationNotFound(_) => write!(f, "Team registration not found"),
            StatsError::PlayerRegistrationNotFound(_) => write!(f, "Player registration not found"),
            StatsError::AlreadyInGroup(_) => write!(f, "Team registration already in group"),
            StatsError::InvalidTransition { status, action } => {
                write!(f, "Cannot {} a match that is {:?}", action, status)
            }
            StatsError::InconsistentReference(what) => {
                write!(f, "Inconsistent reference: {}", what)
            }
        }
    }
}

impl std::error::Error for StatsError {}

/// All tournament entities and the event log, held in memory.
#[derive(Clone, Debug, Default)]
pub struct TournamentStore {
    competitions: Vec<Competition>,
    seasons: Vec<Season>,
    tournaments: Vec<Tournament>,
    teams: Vec<Team>,
    people: Vec<Person>,
    venues: Vec<Venue>,
    team_regs: Vec<TeamRegistration>,
    player_regs: Vec<PlayerRegistration>,
    groups: Vec<Group>,
    matches: Vec<Match>,
    events: Vec<MatchEvent>,
}

impl TournamentStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ----- inserts -----

    pub fn add_competition(&mut self, name: impl Into<String>) -> CompetitionId {
        let c = Competition::new(name);
        let id = c.id;
        self.competitions.push(c);
        id
    }

    pub fn add_season(&mut self, name: impl Into<String>) -> SeasonId {
        let s = Season::new(name);
        let id = s.id;
        self.seasons.push(s);
        id
    }

    pub fn add_tournament(
        &mut self,
        name: impl Into<String>,
        short: impl Into<String>,
        competition_id: CompetitionId,
        season_id: SeasonId,
    ) -> TournamentId {
        let t = Tournament::new(name, short, competition_id, season_id);
        let id = t.id;
        self.tournaments.push(t);
        id
    }

    pub fn add_team(&mut self, name: impl Into<String>, short: impl Into<String>) -> TeamId {
        let t = Team::new(name, short);
        let id = t.id;
        self.teams.push(t);
        id
    }

    pub fn add_person(&mut self, name: impl Into<String>, short: impl Into<String>) -> PersonId {
        let p = Person::new(name, short);
        let id = p.id;
        self.people.push(p);
        id
    }

    pub fn add_venue(&mut self, name: impl Into<String>) -> VenueId {
        let v = Venue::new(name);
        let id = v.id;
        self.venues.push(v);
        id
    }

    /// Enroll a team in a tournament.
    pub fn register_team(
        &mut self,
        tournament_id: TournamentId,
        team_id: TeamId,
        captain_id: PersonId,
    ) -> Result<TeamRegistrationId, StatsError> {
        self.tournament_by_id(tournament_id)?;
        if !self.teams.iter().any(|t| t.id == team_id) {
            return Err(StatsError::TeamNotFound(team_id));
        }
        self.person_by_id(captain_id)?;
        let reg = TeamRegistration::new(tournament_id, team_id, captain_id);
        let id = reg.id;
        self.team_regs.push(reg);
        Ok(id)
    }

    /// Enroll a person under a team registration with a shirt number.
    pub fn register_player(
        &mut self,
        person_id: PersonId,
        team_reg_id: TeamRegistrationId,
        shirt_no: impl Into<String>,
    ) -> Result<PlayerRegistrationId, StatsError> {
        self.person_by_id(person_id)?;
        self.team_reg_by_id(team_reg_id)?;
        let reg = PlayerRegistration::new(person_id, team_reg_id, shirt_no);
        let id = reg.id;
        self.player_regs.push(reg);
        Ok(id)
    }

    pub fn add_group(
        &mut self,
        name: impl Into<String>,
        tournament_id: TournamentId,
        stage: GameStage,
    ) -> Result<GroupId, StatsError> {
        self.tournament_by_id(tournament_id)?;
        let g = Group::new(name, tournament_id, stage);
        let id = g.id;
        self.groups.push(g);
        Ok(id)
    }

    /// Add a team registration to a group's standings. Membership order is
    /// kept; it is the fallback order for exactly tied standings rows.
    pub fn add_team_to_group(
        &mut self,
        group_id: GroupId,
        team_reg_id: TeamRegistrationId,
    ) -> Result<(), StatsError> {
        let reg_tournament = self.team_reg_by_id(team_reg_id)?.tournament_id;
        let group = self
            .groups
            .iter_mut()
            .find(|g| g.id == group_id)
            .ok_or(StatsError::GroupNotFound(group_id))?;
        if group.tournament_id != reg_tournament {
            return Err(StatsError::InconsistentReference(
                "team registration belongs to a different tournament than the group".into(),
            ));
        }
        if group.team_reg_ids.contains(&team_reg_id) {
            return Err(StatsError::AlreadyInGroup(team_reg_id));
        }
        group.team_reg_ids.push(team_reg_id);
        Ok(())
    }

    /// Create a match between two registrations in a group, initially `Scheduled`.
    pub fn schedule_match(
        &mut self,
        match_no: u32,
        group_id: GroupId,
        home_reg_id: TeamRegistrationId,
        away_reg_id: TeamRegistrationId,
        venue_id: Option<VenueId>,
        scheduled_at: Option<DateTime<Utc>>,
    ) -> Result<MatchId, StatsError> {
        let group_tournament = self.group_by_id(group_id)?.tournament_id;
        if home_reg_id == away_reg_id {
            return Err(StatsError::InconsistentReference(
                "a match needs two distinct team registrations".into(),
            ));
        }
        for reg_id in [home_reg_id, away_reg_id] {
            let reg = self.team_reg_by_id(reg_id)?;
            if reg.tournament_id != group_tournament {
                return Err(StatsError::InconsistentReference(
                    "participant belongs to a different tournament than the group".into(),
                ));
            }
        }
        if let Some(v) = venue_id {
            if !self.venues.iter().any(|venue| venue.id == v) {
                return Err(StatsError::VenueNotFound(v));
            }
        }
        let mut m = Match::new(match_no, group_id, home_reg_id, away_reg_id);
        m.venue_id = venue_id;
        m.scheduled_at = scheduled_at;
        let id = m.id;
        self.matches.push(m);
        Ok(id)
    }

    /// Append an event to the log. This is the administrative entry path: it
    /// validates attribution against the match's participants but does not
    /// look at match status (backfilling a finished match is legal here);
    /// live input goes through `logic::lifecycle::record_event`.
    pub fn append_event(
        &mut self,
        match_id: MatchId,
        kind: MatchEventKind,
        player_reg_id: Option<PlayerRegistrationId>,
        team_reg_id: Option<TeamRegistrationId>,
        timestamp: Option<DateTime<Utc>>,
        match_time_minutes: f64,
    ) -> Result<MatchEventId, StatsError> {
        let m = self.match_by_id(match_id)?;
        let (home, away) = (m.home_reg_id, m.away_reg_id);
        if let Some(team) = team_reg_id {
            if team != home && team != away {
                return Err(StatsError::InconsistentReference(
                    "event team is not a participant of the match".into(),
                ));
            }
        }
        if let Some(player) = player_reg_id {
            let player_team = self.player_reg_by_id(player)?.team_reg_id;
            if player_team != home && player_team != away {
                return Err(StatsError::InconsistentReference(
                    "event player is not registered with either participant".into(),
                ));
            }
            if let Some(team) = team_reg_id {
                if player_team != team {
                    return Err(StatsError::InconsistentReference(
                        "event player is not registered with the event team".into(),
                    ));
                }
            }
        }
        let ev = MatchEvent::new(
            match_id,
            kind,
            player_reg_id,
            team_reg_id,
            timestamp,
            match_time_minutes,
        );
        let id = ev.id;
        self.events.push(ev);
        Ok(id)
    }

    // ----- lookups -----

    pub fn tournament_by_id(&self, id: TournamentId) -> Result<&Tournament, StatsError> {
        self.tournaments
            .iter()
            .find(|t| t.id == id)
            .ok_or(StatsError::TournamentNotFound(id))
    }

    pub fn group_by_id(&self, id: GroupId) -> Result<&Group, StatsError> {
        self.groups
            .iter()
            .find(|g| g.id == id)
            .ok_or(StatsError::GroupNotFound(id))
    }

    pub fn match_by_id(&self, id: MatchId) -> Result<&Match, StatsError> {
        self.matches
            .iter()
            .find(|m| m.id == id)
            .ok_or(StatsError::MatchNotFound(id))
    }

    pub(crate) fn match_by_id_mut(&mut self, id: MatchId) -> Result<&mut Match, StatsError> {
        self.matches
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(StatsError::MatchNotFound(id))
    }

    pub fn team_by_id(&self, id: TeamId) -> Result<&Team, StatsError> {
        self.teams
            .iter()
            .find(|t| t.id == id)
            .ok_or(StatsError::TeamNotFound(id))
    }

    pub fn person_by_id(&self, id: PersonId) -> Result<&Person, StatsError> {
        self.people
            .iter()
            .find(|p| p.id == id)
            .ok_or(StatsError::PersonNotFound(id))
    }

    pub fn team_reg_by_id(&self, id: TeamRegistrationId) -> Result<&TeamRegistration, StatsError> {
        self.team_regs
            .iter()
            .find(|r| r.id == id)
            .ok_or(StatsError::TeamRegistrationNotFound(id))
    }

    pub fn player_reg_by_id(
        &self,
        id: PlayerRegistrationId,
    ) -> Result<&PlayerRegistration, StatsError> {
        self.player_regs
            .iter()
            .find(|r| r.id == id)
            .ok_or(StatsError::PlayerRegistrationNotFound(id))
    }

    // ----- filters (all in insertion order) -----

    /// Events of one match, in append order.
    pub fn events_for_match(&self, match_id: MatchId) -> impl Iterator<Item = &MatchEvent> + '_ {
        self.events.iter().filter(move |e| e.match_id == match_id)
    }

    /// The whole event log, in append order.
    pub fn events(&self) -> impl Iterator<Item = &MatchEvent> + '_ {
        self.events.iter()
    }

    pub fn matches_in_group(&self, group_id: GroupId) -> impl Iterator<Item = &Match> + '_ {
        self.matches.iter().filter(move |m| m.group_id == group_id)
    }

    /// Every match the registration took part in, home or away, across all groups.
    pub fn matches_for_registration(
        &self,
        team_reg_id: TeamRegistrationId,
    ) -> impl Iterator<Item = &Match> + '_ {
        self.matches.iter().filter(move |m| m.involves(team_reg_id))
    }

    /// Squad of a team registration, in registration order.
    pub fn player_regs_for_team(
        &self,
        team_reg_id: TeamRegistrationId,
    ) -> impl Iterator<Item = &PlayerRegistration> + '_ {
        self.player_regs
            .iter()
            .filter(move |r| r.team_reg_id == team_reg_id)
    }

    /// Every player registration a person ever held, in registration order.
    pub fn player_regs_for_person(
        &self,
        person_id: PersonId,
    ) -> impl Iterator<Item = &PlayerRegistration> + '_ {
        self.player_regs
            .iter()
            .filter(move |r| r.person_id == person_id)
    }
}
