use thiserror::Error;

use stocksync_http::HttpClientError;

/// Failure fetching the balance snapshot. Any of these aborts the whole
/// reconciliation run — there is nothing to reconcile without a snapshot.
#[derive(Debug, Error)]
pub enum SupplyError {
    #[error(transparent)]
    Http(#[from] HttpClientError),

    #[error("balance report request failed with status {status}")]
    Api { status: u16 },

    /// Malformed JSON is a hard error, never treated as an empty report.
    #[error("malformed balance report: {0}")]
    Parse(String),
}
