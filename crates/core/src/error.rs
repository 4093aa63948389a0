use crate::types::SeasonId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid date '{0}': expected an existing calendar day formatted YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange { start: String, end: String },

    #[error("Range {start}..={end} spans more than {max_days} days")]
    RangeTooLong {
        start: String,
        end: String,
        max_days: usize,
    },

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: SeasonId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl CoreError {
    /// Shorthand for the season-missing case raised by every operation that
    /// targets a season by id.
    pub fn season_not_found(id: impl Into<SeasonId>) -> Self {
        CoreError::NotFound {
            entity: "Season",
            id: id.into(),
        }
    }
}
