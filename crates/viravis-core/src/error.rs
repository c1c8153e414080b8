use thiserror::Error;

/// Why a single poll tick produced nothing to apply.
///
/// None of these are retried: the next timer tick simply polls again.
#[derive(Debug, Error)]
pub enum PollError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown poll policy: {0}")]
    UnknownPolicy(String),
}
