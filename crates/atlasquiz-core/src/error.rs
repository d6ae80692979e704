// crates/atlasquiz-core/src/error.rs
use thiserror::Error;

/// Errors that abort catalog construction.
///
/// Everything after startup degrades instead of failing: unresolved names
/// pass through, missing shapes become degenerate geometry, and navigation on
/// an empty session is a no-op. Only reading the inputs can go wrong here.
#[derive(Debug, Error)]
pub enum AtlasError {
    /// An input file (region list, feature collection, overrides) is missing.
    #[error("{0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An input exists but is not the JSON shape we expect.
    #[error("malformed input '{input}': {source}")]
    Json {
        input: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog snapshot error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown region '{0}' (expected one of: europe, asia, africa, americas, oceania, all)")]
    UnknownRegion(String),

    #[error("unknown mode '{0}' (expected 'learn' or 'quiz')")]
    UnknownMode(String),
}

pub type Result<T> = std::result::Result<T, AtlasError>;
