use thiserror::Error;
use uuid::Uuid;

use crate::stats::StatField;

/// Errors for domain rules on stored data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantError {
    #[error("Cannot decrement {field} below zero for player {player_id}")]
    CounterBelowZero { player_id: Uuid, field: StatField },
}
