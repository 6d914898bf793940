/// Domain-specific error types for the dashboard core.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Operation failed: {0}")]
    Operation(String),

    #[error("Network operation failed: {0}")]
    Network(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias.
pub type DashResult<T> = Result<T, DashboardError>;
