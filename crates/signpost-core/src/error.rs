use thiserror::Error;

/// Errors surfaced by catalog backends.
pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog backend unavailable: {0}")]
    Unavailable(String),
    #[error("catalog query timed out: {0}")]
    Timeout(String),
    #[error("catalog query failed: {0}")]
    Query(String),
    #[error("catalog response is invalid: {0}")]
    InvalidData(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
