mod player_repository;
mod player_stat_repository;

pub use player_repository::PostgresPlayerRepository;
pub use player_stat_repository::PostgresPlayerStatRepository;

use touchline_types::errors::{ApplicationError, DbError};

/// Maps a failed write, turning unique violations into `DbError::Duplicate`.
pub(crate) fn write_error(what: &str, e: sqlx::Error) -> ApplicationError {
    let unique_violation = e
        .as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation());
    if unique_violation {
        ApplicationError::Db(DbError::Duplicate(what.to_string()))
    } else {
        ApplicationError::Db(DbError::Database(e))
    }
}
