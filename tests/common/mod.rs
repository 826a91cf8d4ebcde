//! Shared fixtures: a small tournament with two registered teams, squads,
//! one group and one scheduled match.
#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use tournament_stats::{
    finish_match, record_event, start_match, Clock, GameStage, GroupId, MatchEventKind, MatchId,
    PersonId, PlayerRegistrationId, TeamRegistrationId, TournamentId, TournamentStore,
};

/// Clock pinned to one instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn kickoff() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 15, 0, 0).unwrap()
}

pub struct Fixture {
    pub store: TournamentStore,
    pub tournament_id: TournamentId,
    pub group_id: GroupId,
    pub home_reg: TeamRegistrationId,
    pub away_reg: TeamRegistrationId,
    /// Two squad members per side; index 0 is the captain.
    pub home_players: Vec<PlayerRegistrationId>,
    pub away_players: Vec<PlayerRegistrationId>,
    pub home_persons: Vec<PersonId>,
    pub away_persons: Vec<PersonId>,
    pub match_id: MatchId,
}

/// Two teams registered in one tournament, both in a group of the given
/// stage, with one scheduled match between them (home: Red Lions).
pub fn two_team_group(stage: GameStage) -> Fixture {
    let mut store = TournamentStore::new();
    let competition_id = store.add_competition("City Cup");
    let season_id = store.add_season("2024");
    let tournament_id = store.add_tournament("City Cup 2024", "CC24", competition_id, season_id);
    let venue_id = store.add_venue("Main Field");

    let reds = store.add_team("Red Lions", "RED");
    let blues = store.add_team("Blue Falcons", "BLU");
    let home_persons = vec![
        store.add_person("Ana Souza", "Ana"),
        store.add_person("Carla Mota", "Carla"),
    ];
    let away_persons = vec![
        store.add_person("Bruno Lima", "Bruno"),
        store.add_person("Davi Rocha", "Davi"),
    ];

    let home_reg = store
        .register_team(tournament_id, reds, home_persons[0])
        .unwrap();
    let away_reg = store
        .register_team(tournament_id, blues, away_persons[0])
        .unwrap();
    let home_players = vec![
        store.register_player(home_persons[0], home_reg, "9").unwrap(),
        store.register_player(home_persons[1], home_reg, "10").unwrap(),
    ];
    let away_players = vec![
        store.register_player(away_persons[0], away_reg, "1").unwrap(),
        store.register_player(away_persons[1], away_reg, "7").unwrap(),
    ];

    let group_id = store.add_group("Group A", tournament_id, stage).unwrap();
    store.add_team_to_group(group_id, home_reg).unwrap();
    store.add_team_to_group(group_id, away_reg).unwrap();

    let match_id = store
        .schedule_match(1, group_id, home_reg, away_reg, Some(venue_id), Some(kickoff()))
        .unwrap();

    Fixture {
        store,
        tournament_id,
        group_id,
        home_reg,
        away_reg,
        home_players,
        away_players,
        home_persons,
        away_persons,
        match_id,
    }
}

/// Start the match, record team-attributed events one minute apart, finish it.
pub fn play(
    store: &mut TournamentStore,
    match_id: MatchId,
    events: &[(MatchEventKind, TeamRegistrationId)],
) {
    start_match(store, match_id, &FixedClock(kickoff())).unwrap();
    for (i, (kind, team)) in events.iter().enumerate() {
        let at = kickoff() + Duration::minutes(i as i64 + 1);
        record_event(store, match_id, *kind, None, Some(*team), &FixedClock(at)).unwrap();
    }
    finish_match(store, match_id, &FixedClock(kickoff() + Duration::minutes(90))).unwrap();
}

/// Schedule a fresh match in the group and play it through.
pub fn play_new_match(
    store: &mut TournamentStore,
    match_no: u32,
    group_id: GroupId,
    home_reg: TeamRegistrationId,
    away_reg: TeamRegistrationId,
    events: &[(MatchEventKind, TeamRegistrationId)],
) -> MatchId {
    let match_id = store
        .schedule_match(match_no, group_id, home_reg, away_reg, None, None)
        .unwrap();
    play(store, match_id, events);
    match_id
}
