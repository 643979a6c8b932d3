use thiserror::Error;
use uuid::Uuid;

/// Errors coming from the store.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Player with ID {0} not found")]
    PlayerNotFound(Uuid),

    #[error("Statistic row with ID {0} not found")]
    PlayerStatNotFound(Uuid),

    #[error("Duplicate record: {0}")]
    Duplicate(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("Transaction error: {0}")]
    Transaction(String),

    #[error("Invalid value for column {column}: {value}")]
    InvalidColumnValue { column: &'static str, value: i64 },
}
