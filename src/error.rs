use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON state: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML state: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported state file format: {0}")]
    UnsupportedFormat(String),
    #[error("unknown query: {0}")]
    UnknownQuery(String),
    #[error("invalid component index: {0}")]
    InvalidIndex(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
