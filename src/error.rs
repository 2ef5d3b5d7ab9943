//! Error types for experiment-showcase
//!
//! The filter, aggregation and recommendation engines are total; errors only
//! arise at the boundaries (parsing vocabularies, loading records, building
//! links, driving the dashboard shell).

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// experiment-showcase error types
#[derive(Error, Debug)]
pub enum Error {
    /// Neither `id` nor `experiment_id` resolved to a non-empty identifier
    #[error("Experiment record has no identifier\nSet a non-empty `id` or `experiment_id`")]
    MissingIdentifier,

    /// A vocabulary value (status, sort key, area, goal, tab) was not recognized
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The requested experiment is not part of the active collection
    #[error("Unknown experiment: {0}\nIt is not part of the active tab's collection")]
    UnknownExperiment(String),

    /// Recommendations require a non-blank description
    #[error("Experiment description is empty\nDescribe the change before requesting a recommendation")]
    EmptyDescription,

    /// The configured experiment host does not form a valid URL
    #[error("Invalid experiment link: {0}")]
    InvalidLink(#[from] url::ParseError),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
