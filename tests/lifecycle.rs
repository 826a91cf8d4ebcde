//! Integration tests for the match state machine and live event recording.

mod common;

use chrono::Duration;
use common::{kickoff, two_team_group, FixedClock};
use tournament_stats::{
    finish_match, record_event, start_match, GameStage, MatchStatus, StatsError,
};

use tournament_stats::MatchEventKind::{Foul, Goal};

#[test]
fn start_stamps_kickoff_and_moves_to_in_progress() {
    let mut f = two_team_group(GameStage::GroupStage);
    start_match(&mut f.store, f.match_id, &FixedClock(kickoff())).unwrap();

    let m = f.store.match_by_id(f.match_id).unwrap();
    assert_eq!(m.status, MatchStatus::InProgress);
    assert_eq!(m.actual_start, Some(kickoff()));
    assert_eq!(m.actual_finish, None);
}

#[test]
fn finish_stamps_the_end_and_terminates() {
    let mut f = two_team_group(GameStage::GroupStage);
    let end = kickoff() + Duration::minutes(50);
    start_match(&mut f.store, f.match_id, &FixedClock(kickoff())).unwrap();
    finish_match(&mut f.store, f.match_id, &FixedClock(end)).unwrap();

    let m = f.store.match_by_id(f.match_id).unwrap();
    assert_eq!(m.status, MatchStatus::Finished);
    assert_eq!(m.actual_finish, Some(end));

    // Terminal: no restart, no second finish.
    assert!(matches!(
        start_match(&mut f.store, f.match_id, &FixedClock(end)),
        Err(StatsError::InvalidTransition { status: MatchStatus::Finished, .. })
    ));
    assert!(matches!(
        finish_match(&mut f.store, f.match_id, &FixedClock(end)),
        Err(StatsError::InvalidTransition { status: MatchStatus::Finished, .. })
    ));
}

#[test]
fn finish_requires_a_running_match() {
    let mut f = two_team_group(GameStage::GroupStage);
    assert!(matches!(
        finish_match(&mut f.store, f.match_id, &FixedClock(kickoff())),
        Err(StatsError::InvalidTransition { status: MatchStatus::Scheduled, .. })
    ));
}

#[test]
fn events_are_rejected_outside_the_live_window() {
    let mut f = two_team_group(GameStage::GroupStage);
    // Still scheduled.
    assert!(matches!(
        record_event(&mut f.store, f.match_id, Goal, None, Some(f.home_reg), &FixedClock(kickoff())),
        Err(StatsError::InvalidTransition { status: MatchStatus::Scheduled, .. })
    ));

    start_match(&mut f.store, f.match_id, &FixedClock(kickoff())).unwrap();
    finish_match(&mut f.store, f.match_id, &FixedClock(kickoff())).unwrap();
    // Already finished.
    assert!(matches!(
        record_event(&mut f.store, f.match_id, Goal, None, Some(f.home_reg), &FixedClock(kickoff())),
        Err(StatsError::InvalidTransition { status: MatchStatus::Finished, .. })
    ));
}

#[test]
fn elapsed_minutes_are_measured_from_kickoff() {
    let mut f = two_team_group(GameStage::GroupStage);
    start_match(&mut f.store, f.match_id, &FixedClock(kickoff())).unwrap();
    let at = kickoff() + Duration::minutes(34) + Duration::seconds(30);
    let event_id = record_event(&mut f.store, f.match_id, Goal, None, Some(f.home_reg), &FixedClock(at)).unwrap();

    let ev = f.store.events().find(|e| e.id == event_id).unwrap();
    assert_eq!(ev.match_time_minutes, 34.5);
    assert_eq!(ev.timestamp, Some(at));
}

#[test]
fn attribution_must_match_the_participants() {
    let mut f = two_team_group(GameStage::GroupStage);
    // A registration from a different tournament altogether.
    let other_tournament = {
        let c = f.store.add_competition("Winter Cup");
        let s = f.store.add_season("2024/25");
        f.store.add_tournament("Winter Cup 2024", "WC24", c, s)
    };
    let outsider_team = f.store.add_team("Grey Wolves", "GRY");
    let outsider_captain = f.store.add_person("Gil Ramos", "Gil");
    let outsider_reg = f
        .store
        .register_team(other_tournament, outsider_team, outsider_captain)
        .unwrap();
    let outsider_player = f
        .store
        .register_player(outsider_captain, outsider_reg, "5")
        .unwrap();

    start_match(&mut f.store, f.match_id, &FixedClock(kickoff())).unwrap();
    let clock = FixedClock(kickoff());

    assert!(matches!(
        record_event(&mut f.store, f.match_id, Goal, None, Some(outsider_reg), &clock),
        Err(StatsError::InconsistentReference(_))
    ));
    assert!(matches!(
        record_event(&mut f.store, f.match_id, Foul, Some(outsider_player), None, &clock),
        Err(StatsError::InconsistentReference(_))
    ));
    // Player and team both valid participants, but of opposite sides.
    assert!(matches!(
        record_event(&mut f.store, f.match_id, Goal, Some(f.home_players[0]), Some(f.away_reg), &clock),
        Err(StatsError::InconsistentReference(_))
    ));
    // Nothing was appended by the rejected calls.
    assert_eq!(f.store.events_for_match(f.match_id).count(), 0);
}

#[test]
fn administrative_append_skips_status_but_not_references() {
    let mut f = two_team_group(GameStage::GroupStage);
    start_match(&mut f.store, f.match_id, &FixedClock(kickoff())).unwrap();
    finish_match(&mut f.store, f.match_id, &FixedClock(kickoff())).unwrap();

    // Backfill on a finished match is allowed through the admin path.
    f.store
        .append_event(f.match_id, Goal, None, Some(f.home_reg), None, 12.0)
        .unwrap();
    assert_eq!(f.store.events_for_match(f.match_id).count(), 1);

    let stranger = f.store.add_team("Grey Wolves", "GRY");
    let captain = f.store.add_person("Gil Ramos", "Gil");
    let stranger_reg = f
        .store
        .register_team(f.tournament_id, stranger, captain)
        .unwrap();
    assert!(matches!(
        f.store
            .append_event(f.match_id, Goal, None, Some(stranger_reg), None, 0.0),
        Err(StatsError::InconsistentReference(_))
    ));
}

#[test]
fn store_rejects_malformed_fixtures() {
    let mut f = two_team_group(GameStage::GroupStage);
    // Same registration on both sides.
    assert!(matches!(
        f.store
            .schedule_match(9, f.group_id, f.home_reg, f.home_reg, None, None),
        Err(StatsError::InconsistentReference(_))
    ));

    // Group membership across tournaments.
    let c = f.store.add_competition("Winter Cup");
    let s = f.store.add_season("2024/25");
    let other_tournament = f.store.add_tournament("Winter Cup 2024", "WC24", c, s);
    let wolves = f.store.add_team("Grey Wolves", "GRY");
    let gil = f.store.add_person("Gil Ramos", "Gil");
    let wolves_reg = f
        .store
        .register_team(other_tournament, wolves, gil)
        .unwrap();
    assert!(matches!(
        f.store.add_team_to_group(f.group_id, wolves_reg),
        Err(StatsError::InconsistentReference(_))
    ));
    // A cross-tournament fixture is equally malformed.
    assert!(matches!(
        f.store
            .schedule_match(10, f.group_id, f.home_reg, wolves_reg, None, None),
        Err(StatsError::InconsistentReference(_))
    ));

    // Registering the same team twice in one group.
    assert_eq!(
        f.store.add_team_to_group(f.group_id, f.home_reg),
        Err(StatsError::AlreadyInGroup(f.home_reg))
    );
}
