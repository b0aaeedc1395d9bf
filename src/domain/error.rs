use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Unknown precision {0}, cannot determine confidence")]
    UnknownPrecision(String),

    #[error("Unknown confidence level: {0}")]
    UnknownConfidence(String),

    #[error("Unknown rule_type: {0}")]
    UnknownRuleType(String),

    #[error("Unknown observation source: {0}")]
    UnknownSource(String),

    #[error("No data: {0}")]
    NoData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Corrupted daily max snapshot: {0}")]
    CorruptedSnapshot(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error(transparent)]
    Config(#[from] MetarConfigLoadError),
}

/// Raised when the METAR data-source configuration cannot be used.
/// Fatal at startup: the tracker never runs with unknown source semantics.
#[derive(Debug, Error)]
pub enum MetarConfigLoadError {
    #[error("METAR config not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read METAR config {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed METAR config {}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("METAR config {} has no '{section}' section", path.display())]
    MissingSection { path: PathBuf, section: String },

    #[error("METAR config {} has an empty '{section}' section", path.display())]
    EmptySection { path: PathBuf, section: String },
}
