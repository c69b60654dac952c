use thiserror::Error;

/// Failure retrieving the balance snapshot (aborts the run).
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    #[error("supply system unavailable: {0}")]
    Unavailable(String),

    #[error("malformed balance report: {0}")]
    Malformed(String),
}

/// Failure of a single storefront call (fails the line, not the run).
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    #[error("storefront call failed: {0}")]
    Call(String),
}

/// A reconciliation run that could not even start.
///
/// Per-line failures never produce this; they are recorded in the run
/// report and the driver moves on.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("could not fetch balance snapshot: {0}")]
    Snapshot(#[from] SourceError),
}
