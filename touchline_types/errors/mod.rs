use thiserror::Error;

pub mod db_error;
pub mod invariant_error;
pub mod validation_error;

pub use db_error::DbError;
pub use invariant_error::InvariantError;
pub use validation_error::ValidationError;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Invariant(#[from] InvariantError),

    #[error(transparent)]
    Db(#[from] DbError),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    #[error("An unknown error occurred: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for ApplicationError {
    fn from(err: anyhow::Error) -> Self {
        ApplicationError::Unknown(err.to_string())
    }
}

impl ApplicationError {
    /// True when the store has no record for the requested id.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApplicationError::Db(DbError::PlayerNotFound(_)))
    }
}
