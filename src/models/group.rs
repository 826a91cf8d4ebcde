//! Groups: standings-bearing subsets of registrations, tagged with a game stage.

use crate::models::entity::TournamentId;
use crate::models::registration::TeamRegistrationId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a group.
pub type GroupId = Uuid;

/// Stage of the tournament a group belongs to. The ordinal gates achievement
/// counters: a win in a `Final` group is a title, a loss a runner-up finish,
/// a win in a `ThirdPlace` group a third-place finish.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStage {
    GroupStage,
    ThirdPlace,
    Final,
}

impl GameStage {
    /// Ordinal position: group stage 1, third-place 2, final 3.
    pub fn ordinal(self) -> u8 {
        match self {
            GameStage::GroupStage => 1,
            GameStage::ThirdPlace => 2,
            GameStage::Final => 3,
        }
    }
}

/// A named subset of team registrations within a tournament. The order of
/// `team_reg_ids` is registration order and is what standings fall back to
/// when two teams' ranking keys are exactly equal.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub tournament_id: TournamentId,
    pub stage: GameStage,
    pub team_reg_ids: Vec<TeamRegistrationId>,
}

impl Group {
    pub fn new(name: impl Into<String>, tournament_id: TournamentId, stage: GameStage) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            tournament_id,
            stage,
            team_reg_ids: Vec::new(),
        }
    }
}
