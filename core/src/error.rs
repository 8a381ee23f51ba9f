use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown placement '{0}'")]
    UnknownPlacement(String),
    #[error("invalid destination list: {0}")]
    InvalidDestinations(#[source] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("position record encode failed: {0}")]
    Encode(#[source] serde_json::Error),
}
