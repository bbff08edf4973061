use thiserror::Error;

// ---------------------------------------------------------------------------
// Table validation errors
// ---------------------------------------------------------------------------

/// Reasons a set of parsed rows cannot become a [`crate::data::model::LaunchTable`].
#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("dataset contains no launch records")]
    Empty,

    /// `record` counts data rows from 1, header excluded.
    #[error("launch record {record}: payload mass {value} is not a finite, non-negative number")]
    InvalidPayload { record: usize, value: f64 },

    #[error("outcome class must be 0 or 1, got {0}")]
    InvalidOutcome(i64),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
}
