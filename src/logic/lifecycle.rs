//! Match lifecycle: status transitions and live event recording.
//!
//! This module and the store's insert methods are the engine's entire
//! mutation surface; everything else is a pure read.

use crate::models::{
    MatchEventId, MatchEventKind, MatchId, MatchStatus, PlayerRegistrationId, StatsError,
    TeamRegistrationId, TournamentStore,
};
use chrono::{DateTime, Utc};

/// Source of wall-clock time, so transitions and elapsed-minute stamps are
/// deterministic under test.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Kick off a scheduled match: stamp the actual start and move to `InProgress`.
pub fn start_match(
    store: &mut TournamentStore,
    match_id: MatchId,
    clock: &impl Clock,
) -> Result<(), StatsError> {
    let now = clock.now();
    let m = store.match_by_id_mut(match_id)?;
    if m.status != MatchStatus::Scheduled {
        return Err(StatsError::InvalidTransition {
            status: m.status,
            action: "start",
        });
    }
    m.actual_start = Some(now);
    m.status = MatchStatus::InProgress;
    log::info!("match {} started at {}", m.match_no, now);
    Ok(())
}

/// End a running match: stamp the actual finish and move to `Finished`.
pub fn finish_match(
    store: &mut TournamentStore,
    match_id: MatchId,
    clock: &impl Clock,
) -> Result<(), StatsError> {
    let now = clock.now();
    let m = store.match_by_id_mut(match_id)?;
    if m.status != MatchStatus::InProgress {
        return Err(StatsError::InvalidTransition {
            status: m.status,
            action: "finish",
        });
    }
    m.actual_finish = Some(now);
    m.status = MatchStatus::Finished;
    log::info!("match {} finished at {}", m.match_no, now);
    Ok(())
}

/// Record a live event against a running match.
///
/// Rejected with `InvalidTransition` unless the match is `InProgress`; events
/// outside the live window go through the administrative
/// [`TournamentStore::append_event`] path instead. Attribution references are
/// validated against the match's participants before the append. The stamped
/// elapsed minutes are measured from the actual kickoff (0 if none was
/// recorded).
pub fn record_event(
    store: &mut TournamentStore,
    match_id: MatchId,
    kind: MatchEventKind,
    player_reg_id: Option<PlayerRegistrationId>,
    team_reg_id: Option<TeamRegistrationId>,
    clock: &impl Clock,
) -> Result<MatchEventId, StatsError> {
    let now = clock.now();
    let m = store.match_by_id(match_id)?;
    if m.status != MatchStatus::InProgress {
        return Err(StatsError::InvalidTransition {
            status: m.status,
            action: "record an event for",
        });
    }
    let minutes = match m.actual_start {
        Some(start) => (now - start).num_seconds() as f64 / 60.0,
        None => 0.0,
    };
    let match_no = m.match_no;
    let id = store.append_event(match_id, kind, player_reg_id, team_reg_id, Some(now), minutes)?;
    log::debug!(
        "match {}: recorded {:?} at {:.2} min",
        match_no,
        kind,
        minutes
    );
    Ok(id)
}
