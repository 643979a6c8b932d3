use thiserror::Error;

/// Errors raised on user input, before the store is touched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingField(&'static str),

    #[error("Player name can't be blank")]
    BlankName,

    #[error("Jersey number must be between 0 and {max}")]
    JerseyNumberOutOfRange { max: u32 },

    #[error("Image URL must start with http:// or https://")]
    InvalidImageUrl,

    #[error("Unknown {field} '{value}'")]
    UnknownValue { field: &'static str, value: String },

    #[error("Nothing to update")]
    EmptyPatch,

    #[error("Season can't be blank")]
    BlankSeason,

    #[error("Select a competition before adjusting statistics")]
    CompetitionRequired,
}
