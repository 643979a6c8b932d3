use uuid::Uuid;

use touchline_types::{
    player::{Player, PlayerDraft, PlayerPatch},
    stats::{StatAdjustment, StatDirection, StatField},
};

use crate::cqrs::Command;

/// Adds a player to the roster.
#[derive(Debug, Clone)]
pub struct CreatePlayer {
    pub id: Uuid,
    pub draft: PlayerDraft,
}

impl CreatePlayer {
    pub fn new(draft: PlayerDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            draft,
        }
    }
}

impl Command for CreatePlayer {
    type Output = Player;
}

/// Applies a partial update to a player.
#[derive(Debug, Clone)]
pub struct UpdatePlayer {
    pub player_id: Uuid,
    pub patch: PlayerPatch,
}

impl Command for UpdatePlayer {
    type Output = Player;
}

/// Removes a player and the statistic rows that reference it.
#[derive(Debug, Clone)]
pub struct DeletePlayer {
    pub player_id: Uuid,
}

impl Command for DeletePlayer {
    type Output = ();
}

/// Moves one counter of a player's statistic row by one.
#[derive(Debug, Clone)]
pub struct AdjustStatistic {
    pub player_id: Uuid,
    pub season: String,
    pub competition: String,
    pub field: StatField,
    pub direction: StatDirection,
}

impl Command for AdjustStatistic {
    type Output = StatAdjustment;
}
